use std::io::{self, BufRead, Write};

use judge_io::InputFormatError;
use log::debug;
use thiserror::Error;

pub mod even_degree;
pub mod fib_prefix;
pub mod utils;

pub use judge_io::TokenReader;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("malformed input: {0}")]
    Input(#[from] InputFormatError),

    #[error("invalid graph: {0}")]
    Graph(#[from] even_degree::GraphError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Reads query lengths from `input` and writes one Fibonacci prefix line per
/// query to `output`.
pub fn run_fib_prefix(input: impl BufRead, output: impl Write) -> Result<(), FixtureError> {
    let mut tokens = TokenReader::new(input);
    let queries = fib_prefix::parse_queries(&mut tokens)?;
    debug!("read {} prefix queries", queries.len());
    fib_prefix::solve(&queries, output)?;
    Ok(())
}

/// Reads an edge list from `input` and writes `TAK` or `NIE` to `output`.
pub fn run_even_degree(input: impl BufRead, output: impl Write) -> Result<(), FixtureError> {
    let mut tokens = TokenReader::new(input);
    let parsed = even_degree::parse_input(&mut tokens)?;
    debug!(
        "read graph with {} vertices and {} edges (s = {})",
        parsed.n,
        parsed.edges.len(),
        parsed.s
    );
    let graph = parsed.into_graph()?;
    let verdict = graph.verdict();
    utils::write_token(output, &verdict.to_string())?;
    Ok(())
}
