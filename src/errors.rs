use thiserror::Error;

/// The result type for the `rtfscan` crate.
pub type Result<T> = std::result::Result<T, RtfScanError>;

/// The error type for the `rtfscan` crate.
#[derive(Error, Debug)]
pub struct RtfScanError {
    /// The source of the error.
    pub source: Box<RtfScanErrorKind>,
}

impl RtfScanError {
    /// Create a new `RtfScanError`.
    pub fn new(kind: RtfScanErrorKind) -> Self {
        RtfScanError {
            source: Box::new(kind),
        }
    }

    /// Returns the kind of the error.
    #[inline]
    pub fn kind(&self) -> &RtfScanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for RtfScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum RtfScanErrorKind {
    /// A closing brace was seen while the font data mode had no open group left.
    /// The offset is the byte offset of the brace if the error was raised by the scanner.
    #[error("Unbalanced closing brace in font data mode{}", fmt_offset(.offset))]
    UnbalancedBraceInSpecializedMode {
        /// The byte offset of the offending brace, if known.
        offset: Option<usize>,
    },

    /// A `\'` escape was not followed by two hexadecimal digits.
    #[error("Invalid hex escape at offset {offset}")]
    InvalidHexEscape {
        /// The byte offset of the backslash.
        offset: usize,
    },

    /// The input ended in the middle of a control sequence.
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEndOfInput {
        /// The byte offset of the incomplete control sequence.
        offset: usize,
    },

    /// The input ended before the font data group was closed.
    #[error("Unterminated font data, {depth} group(s) still open")]
    UnterminatedFontData {
        /// The nesting depth of the font data mode at the end of the input.
        depth: usize,
    },

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

fn fmt_offset(offset: &Option<usize>) -> String {
    offset.map_or_else(String::new, |o| format!(" at offset {}", o))
}

impl From<RtfScanErrorKind> for RtfScanError {
    fn from(kind: RtfScanErrorKind) -> Self {
        RtfScanError::new(kind)
    }
}

impl From<std::io::Error> for RtfScanError {
    fn from(error: std::io::Error) -> Self {
        RtfScanError::new(RtfScanErrorKind::IoError(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RtfScanError::new(RtfScanErrorKind::UnbalancedBraceInSpecializedMode {
            offset: Some(12),
        });
        assert_eq!(
            err.to_string(),
            "Unbalanced closing brace in font data mode at offset 12"
        );
        let err = RtfScanError::new(RtfScanErrorKind::UnbalancedBraceInSpecializedMode {
            offset: None,
        });
        assert_eq!(err.to_string(), "Unbalanced closing brace in font data mode");
        let err: RtfScanError = RtfScanErrorKind::UnterminatedFontData { depth: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Unterminated font data, 2 group(s) still open"
        );
    }
}
