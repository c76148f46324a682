use crate::RtfScanner;

/// A builder for creating an [`RtfScanner`].
#[derive(Debug, Default)]
pub struct RtfScannerBuilder {
    emit_newlines: bool,
}

impl RtfScannerBuilder {
    /// Creates a new builder with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the scanner report raw line breaks in the default mode as
    /// [`TokenKind::Newline`](crate::TokenKind::Newline) tokens.
    /// RTF readers ignore them, so they are skipped by default.
    /// Line breaks inside font data are always part of the data.
    pub fn emit_newlines(mut self, emit: bool) -> Self {
        self.emit_newlines = emit;
        self
    }

    /// Builds the scanner.
    pub fn build(self) -> RtfScanner {
        RtfScanner {
            emit_newlines: self.emit_newlines,
        }
    }
}
