use std::io::{self, Write};

/// Writes `line` followed by `\n`. Flushing is left to the caller.
pub fn write_line<W: Write>(output: &mut W, line: &str) -> io::Result<()> {
    output.write_all(line.as_bytes())?;
    output.write_all(b"\n")
}

/// Writes a single token with no line terminator, then flushes.
pub fn write_token<W: Write>(mut output: W, token: &str) -> io::Result<()> {
    output.write_all(token.as_bytes())?;
    output.flush()
}
