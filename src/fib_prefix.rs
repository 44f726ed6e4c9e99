//! Fibonacci prefix printer.
//!
//! Input is a query count followed by that many prefix lengths. Each query is
//! answered with the first `k` Fibonacci numbers written back to back with no
//! separator. The table is built once, sized by the longest query.

use std::io::{self, BufRead, Write};

use judge_io::{InputFormatError, TokenReader};
use log::debug;

use crate::utils;

/// Fibonacci numbers `F(0)..F(len - 1)` as `u64`, wrapping on overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibTable {
    values: Vec<u64>,
}

impl FibTable {
    pub fn build(len: usize) -> Self {
        let mut values: Vec<u64> = Vec::with_capacity(len);
        if len > 0 {
            values.push(0);
        }
        if len > 1 {
            values.push(1);
        }
        for i in 2..len {
            // Naturally overflow at 64 bits
            let next = values[i - 2].wrapping_add(values[i - 1]);
            values.push(next);
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// Concatenated decimal digits of the first `k` entries.
    ///
    /// Panics if `k` exceeds the table length.
    pub fn prefix(&self, k: usize) -> String {
        self.values[..k].iter().map(u64::to_string).collect()
    }
}

/// Reads the query count and then every prefix length, in order.
pub fn parse_queries<R: BufRead>(
    tokens: &mut TokenReader<R>,
) -> Result<Vec<usize>, InputFormatError> {
    let count: usize = tokens.read("query count")?;
    // The count is untrusted; let the vector grow with the tokens actually read.
    let mut queries = Vec::new();
    for _ in 0..count {
        queries.push(tokens.read("prefix length")?);
    }
    Ok(queries)
}

/// Writes one line per query, in the order the queries were given.
pub fn solve<W: Write>(queries: &[usize], mut output: W) -> io::Result<()> {
    let longest = queries.iter().copied().max().unwrap_or(0);
    debug!("building Fibonacci table with {longest} entries");
    let table = FibTable::build(longest);
    for &k in queries {
        utils::write_line(&mut output, &table.prefix(k))?;
    }
    output.flush()
}
