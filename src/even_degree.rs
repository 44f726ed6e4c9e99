//! Even-degree checker.
//!
//! Reads `n m s` and then `m` undirected edges, and answers `TAK` when every
//! vertex in `0..n` has even degree, `NIE` otherwise.

use std::fmt;
use std::io::BufRead;

use judge_io::{InputFormatError, TokenReader};
use log::debug;
use thiserror::Error;

pub type Vertex = usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: Vertex, n: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Tak,
    Nie,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Tak => f.write_str("TAK"),
            Verdict::Nie => f.write_str("NIE"),
        }
    }
}

/// Undirected multigraph stored as one adjacency list per vertex. Every edge
/// is recorded at both ends, so a self-loop lands in its vertex's list twice.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Vertex>>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn check(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                n: self.adjacency.len(),
            })
        }
    }

    pub fn add_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError> {
        self.check(a)?;
        self.check(b)?;
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        Ok(())
    }

    pub fn degree(&self, vertex: Vertex) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Lowest-numbered vertex with odd degree, if any.
    pub fn first_odd_vertex(&self) -> Option<Vertex> {
        self.adjacency
            .iter()
            .position(|neighbours| neighbours.len() % 2 != 0)
    }

    pub fn verdict(&self) -> Verdict {
        match self.first_odd_vertex() {
            Some(vertex) => {
                debug!("vertex {vertex} has odd degree");
                Verdict::Nie
            }
            None => Verdict::Tak,
        }
    }
}

/// The checker's input as read, before any graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvenDegreeInput {
    pub n: usize,
    /// Part of the input format but never consulted.
    pub s: i64,
    pub edges: Vec<(Vertex, Vertex)>,
}

impl EvenDegreeInput {
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new(self.n);
        for (a, b) in self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

pub fn parse_input<R: BufRead>(
    tokens: &mut TokenReader<R>,
) -> Result<EvenDegreeInput, InputFormatError> {
    let n = tokens.read("vertex count")?;
    let m: usize = tokens.read("edge count")?;
    let s = tokens.read("s")?;
    let mut edges = Vec::new();
    for _ in 0..m {
        let a = tokens.read("edge endpoint")?;
        let b = tokens.read("edge endpoint")?;
        edges.push((a, b));
    }
    Ok(EvenDegreeInput { n, s, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(n: usize, edges: &[(Vertex, Vertex)]) -> Graph {
        let mut graph = Graph::new(n);
        for &(a, b) in edges {
            graph.add_edge(a, b).unwrap();
        }
        graph
    }

    #[test]
    fn edgeless_graphs_are_even() {
        assert_eq!(Graph::new(0).vertex_count(), 0);
        assert_eq!(Graph::new(0).verdict(), Verdict::Tak);
        assert_eq!(Graph::new(4).verdict(), Verdict::Tak);
    }

    #[test]
    fn single_edge_is_odd() {
        let graph = graph_from(2, &[(0, 1)]);
        assert_eq!(graph.degree(0), Some(1));
        assert_eq!(graph.degree(1), Some(1));
        assert_eq!(graph.verdict(), Verdict::Nie);
    }

    #[test]
    fn triangle_is_even() {
        let graph = graph_from(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.verdict(), Verdict::Tak);
    }

    #[test]
    fn self_loop_counts_twice() {
        let graph = graph_from(2, &[(1, 1)]);
        assert_eq!(graph.degree(1), Some(2));
        assert_eq!(graph.verdict(), Verdict::Tak);
    }

    #[test]
    fn parallel_edges_each_count() {
        let graph = graph_from(2, &[(0, 1), (1, 0)]);
        assert_eq!(graph.degree(0), Some(2));
        assert_eq!(graph.verdict(), Verdict::Tak);

        let graph = graph_from(2, &[(0, 1), (1, 0), (0, 1)]);
        assert_eq!(graph.verdict(), Verdict::Nie);
    }

    #[test]
    fn scan_reports_lowest_odd_vertex() {
        let graph = graph_from(5, &[(3, 4), (1, 2)]);
        assert_eq!(graph.first_odd_vertex(), Some(1));
        assert_eq!(graph_from(3, &[(0, 0)]).first_odd_vertex(), None);
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let mut graph = Graph::new(3);
        assert_eq!(
            graph.add_edge(0, 3),
            Err(GraphError::VertexOutOfRange { vertex: 3, n: 3 })
        );
        assert_eq!(graph.degree(0), Some(0));
        assert_eq!(graph.degree(3), None);
    }

    #[test]
    fn verdict_tokens() {
        assert_eq!(Verdict::Tak.to_string(), "TAK");
        assert_eq!(Verdict::Nie.to_string(), "NIE");
    }

    #[test]
    fn parse_keeps_unused_field() {
        let mut tokens = TokenReader::from_text("3 2 -7\n0 1\n1 2\n");
        let input = parse_input(&mut tokens).unwrap();
        assert_eq!(
            input,
            EvenDegreeInput {
                n: 3,
                s: -7,
                edges: vec![(0, 1), (1, 2)],
            }
        );
        let graph = input.into_graph().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.verdict(), Verdict::Nie);
    }

    #[test]
    fn parse_huge_edge_count_fails_at_end_of_input() {
        let mut tokens = TokenReader::from_text("2 1000000000000000000 0\n0 1\n");
        assert!(matches!(
            parse_input(&mut tokens),
            Err(InputFormatError::UnexpectedEof { expected: "edge endpoint" })
        ));
    }

    #[test]
    fn parse_rejects_negative_vertex() {
        let mut tokens = TokenReader::from_text("3 1 0\n-1 2\n");
        assert!(matches!(
            parse_input(&mut tokens),
            Err(InputFormatError::InvalidToken { expected: "edge endpoint", .. })
        ));
    }
}
