//! Whitespace-separated token input shared by the judge fixture programs.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

/// Anything that keeps the input from being read as the expected sequence of
/// integers.
#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected}: {token:?}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Pulls tokens out of a reader one line at a time. Line breaks carry no
/// meaning; only the order of the tokens does.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_ascii_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next token as a `T`. `expected` names the field in errors.
    pub fn read<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputFormatError> {
        let token = self
            .next_token()?
            .ok_or(InputFormatError::UnexpectedEof { expected })?;
        token
            .parse()
            .map_err(|_| InputFormatError::InvalidToken { expected, token })
    }
}

impl<'a> TokenReader<&'a [u8]> {
    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }
}
