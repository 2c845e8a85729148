//! Result input sources.
//!
//! The round runner never touches the console directly; it pulls result
//! codes through this trait so tests can script a round end to end.

use std::io::{self, BufRead};

/// Supplies one raw result code per match.
pub trait ResultSource {
    /// Next result code, or `None` when the input was not an integer
    /// (including end of input). Out-of-range codes are returned as-is;
    /// the scoring layer decides what counts as valid.
    fn next_code(&mut self) -> Option<i64>;
}

/// Reads one line per match from any buffered reader.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ResultSource for LineSource<R> {
    fn next_code(&mut self) -> Option<i64> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => line.trim().parse().ok(),
        }
    }
}

/// Line source bound to standard input.
pub fn stdin_source() -> LineSource<io::StdinLock<'static>> {
    LineSource::new(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_code_per_line() {
        let mut source = LineSource::new(Cursor::new("1\n 3 \n2\n"));
        assert_eq!(source.next_code(), Some(1));
        assert_eq!(source.next_code(), Some(3));
        assert_eq!(source.next_code(), Some(2));
        assert_eq!(source.next_code(), None); // exhausted
    }

    #[test]
    fn test_non_integer_is_none() {
        let mut source = LineSource::new(Cursor::new("draw\n2\n"));
        assert_eq!(source.next_code(), None);
        assert_eq!(source.next_code(), Some(2));
    }
}
