use std::io::Read;

use crate::{Result, Tokens};

/// A scanner for RTF documents.
///
/// The scanner knows two modes. In the default mode it recognizes RTF markup: braces, control
/// words, control symbols, hex escapes and text. A control word that introduces embedded font
/// data (see [`crate::KNOWN_CONTROL_WORDS`]) switches to the font data mode, in which the rest
/// of the enclosing group is scanned as opaque data. The mode ends with the brace that closes
/// this group.
///
/// To create a scanner, use the [`crate::RtfScannerBuilder`].
#[derive(Clone, Debug)]
pub struct RtfScanner {
    pub(crate) emit_newlines: bool,
}

impl RtfScanner {
    /// Returns an iterator over all tokens of the input.
    /// Each iterator has its own mode stack and nesting state.
    pub fn tokens<'h>(&self, input: &'h [u8]) -> Tokens<'h> {
        Tokens::new(input, self.emit_newlines)
    }
}

/// Reads a whole RTF document from `reader`.
pub fn read_input<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(input)
}
