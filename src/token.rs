#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Position, Span};

/// The lexical category of a token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// An opening brace `{`.
    GroupStart,
    /// A closing brace `}`.
    GroupEnd,
    /// A control word like `\fontemb` or `\f0`, including an optional numeric parameter and
    /// the optional space delimiter.
    ControlWord,
    /// A backslash followed by a single non-letter character, e.g. `\*` or `\{`.
    ControlSymbol,
    /// A hex escape `\'hh`.
    HexEscape,
    /// A run of plain text.
    Text,
    /// A line break. RTF readers ignore these, so they are only emitted on request.
    Newline,
    /// A run of opaque bytes scanned in font data mode.
    FontData,
}

/// A token in the scanned input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The lexical category of the token.
    kind: TokenKind,
    /// The bytes covered by the token.
    span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Get the start of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the token.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the token is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self {
            kind: self.kind,
            span: self.span.shifted(offset),
        }
    }

    /// Returns the keyword of a control word token, i.e. the letters after the backslash
    /// without parameter and delimiter. `None` for all other kinds of tokens.
    ///
    /// The `input` must be the buffer the token was scanned from.
    pub fn control_word_name<'h>(&self, input: &'h [u8]) -> Option<&'h str> {
        if self.kind != TokenKind::ControlWord {
            return None;
        }
        let text = input.get(self.range())?.get(1..)?;
        let letters = text.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        std::str::from_utf8(&text[..letters]).ok()
    }
}

/// A token with start and end positions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenExt {
    /// The lexical category of the token.
    kind: TokenKind,
    /// The bytes covered by the token.
    span: Span,
    /// The position of the start of the token.
    start_position: Position,
    /// The position of the end of the token.
    /// The end position is exclusive.
    end_position: Position,
}

impl TokenExt {
    pub(crate) fn new(
        kind: TokenKind,
        span: Span,
        start_position: Position,
        end_position: Position,
    ) -> Self {
        Self {
            kind,
            span,
            start_position,
            end_position,
        }
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the position of the first byte of the token.
    #[inline]
    pub fn start_position(&self) -> Position {
        self.start_position
    }

    /// Get the position just behind the token.
    #[inline]
    pub fn end_position(&self) -> Position {
        self.end_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_word_name() {
        let input = br"{\fontemb12 data}";
        let token = Token::new(TokenKind::ControlWord, (1..12).into());
        assert_eq!(token.control_word_name(input), Some("fontemb"));
        assert_eq!(token.len(), 11);

        let token = Token::new(TokenKind::GroupStart, (0..1).into());
        assert_eq!(token.control_word_name(input), None);
    }
}
