//! Module with the position type and the line index used to compute positions.
//! A position is a struct that contains a line and column number.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the scanned input.
/// The position is represented by a line and column number.
/// The line and column numbers are 1-based. Columns count bytes, since RTF is a byte format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self { line, column }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A trait for providing the line and column information of a given byte offset in the input.
pub trait PositionProvider {
    /// Returns the position of the given offset.
    fn position(&self, offset: usize) -> Position;
}

/// The start offsets of all lines of an input.
/// `\r\n`, `\r` and `\n` each terminate a line.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub(crate) fn new(input: &[u8]) -> Self {
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < input.len() {
            match input[i] {
                b'\r' if input.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    line_starts.push(i);
                }
                b'\r' | b'\n' => {
                    i += 1;
                    line_starts.push(i);
                }
                _ => i += 1,
            }
        }
        Self {
            line_starts,
            len: input.len(),
        }
    }
}

impl PositionProvider for LineIndex {
    /// Offsets beyond the end of the input are clamped to the end.
    fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line + 1, offset - self.line_starts[line] + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 1);
        assert_eq!(format!("{}", pos), "line: 1, column: 1");
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new(b"ab\ncd\r\nef\rg");
        assert_eq!(index.position(0), Position::new(1, 1));
        assert_eq!(index.position(2), Position::new(1, 3));
        assert_eq!(index.position(3), Position::new(2, 1));
        assert_eq!(index.position(5), Position::new(2, 3));
        assert_eq!(index.position(7), Position::new(3, 1));
        assert_eq!(index.position(10), Position::new(4, 1));
        assert_eq!(index.position(11), Position::new(4, 2));
        assert_eq!(index.position(100), Position::new(4, 2));
    }
}
