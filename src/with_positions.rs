use crate::{Position, PositionProvider, Result, ScanMode, ScanModeSwitcher, Token, TokenExt};

/// An iterator over all tokens with positions.
#[derive(Debug)]
pub struct WithPositions<I> {
    iter: I,
}

impl<I> WithPositions<I>
where
    I: Iterator<Item = Result<Token>> + PositionProvider + Sized,
{
    /// Create a new `WithPositions` iterator.
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Iterator for WithPositions<I>
where
    I: Iterator<Item = Result<Token>> + PositionProvider + Sized,
{
    type Item = Result<TokenExt>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|t| {
            t.map(|t| {
                let start_position = self.iter.position(t.start());
                let end_position = self.iter.position(t.end());
                TokenExt::new(t.kind(), t.span(), start_position, end_position)
            })
        })
    }
}

impl<I> ScanModeSwitcher for WithPositions<I>
where
    I: ScanModeSwitcher,
{
    fn push_mode(&mut self, mode: ScanMode) {
        self.iter.push_mode(mode);
    }

    fn pop_mode(&mut self) -> Option<ScanMode> {
        self.iter.pop_mode()
    }

    fn current_mode(&self) -> ScanMode {
        self.iter.current_mode()
    }

    fn mode_depth(&self) -> usize {
        self.iter.mode_depth()
    }
}

/// An extension trait for iterators over tokens.
pub trait TokenExtIterator: Iterator<Item = Result<Token>> + PositionProvider + Sized {
    /// An iterator that yields tokens with positions.
    fn with_positions(self) -> WithPositions<Self> {
        WithPositions::new(self)
    }
}

// Implement the trait for all types that implement the required traits.
impl<I: Iterator<Item = Result<Token>> + PositionProvider + Sized> TokenExtIterator for I {}

impl<I> PositionProvider for WithPositions<I>
where
    I: Iterator<Item = Result<Token>> + PositionProvider,
{
    fn position(&self, offset: usize) -> Position {
        self.iter.position(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RtfScannerBuilder, TokenKind};

    #[test]
    fn test_with_positions() {
        let input = b"{\\rtf1\r\n\\fname{Arial}\n}";
        let scanner = RtfScannerBuilder::new().build();
        let tokens: Vec<TokenExt> = scanner
            .tokens(input)
            .with_positions()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[1].kind(), TokenKind::ControlWord);
        assert_eq!(tokens[1].start_position(), Position::new(1, 2));
        assert_eq!(tokens[1].end_position(), Position::new(1, 7));
        assert_eq!(tokens[2].kind(), TokenKind::ControlWord);
        assert_eq!(tokens[2].start_position(), Position::new(2, 1));
        assert_eq!(tokens[4].kind(), TokenKind::FontData);
        assert_eq!(tokens[4].start_position(), Position::new(2, 8));
        assert_eq!(tokens[4].end_position(), Position::new(2, 13));
        assert_eq!(tokens[5].kind(), TokenKind::GroupEnd);
        assert_eq!(tokens[5].start_position(), Position::new(2, 13));
        assert_eq!(tokens[6].start_position(), Position::new(3, 1));
    }

    #[test]
    fn test_mode_switch_through_positions() {
        let scanner = RtfScannerBuilder::new().build();
        let mut tokens = scanner.tokens(b"a}b").with_positions();
        tokens.push_mode(ScanMode::FontData);
        assert_eq!(tokens.current_mode(), ScanMode::FontData);
        assert_eq!(tokens.mode_depth(), 2);

        let first = tokens.next().unwrap().unwrap();
        assert_eq!(first.kind(), TokenKind::FontData);
        assert_eq!(first.start_position(), Position::new(1, 1));
        let second = tokens.next().unwrap().unwrap();
        assert_eq!(second.kind(), TokenKind::GroupEnd);
        assert_eq!(tokens.current_mode(), ScanMode::Default);
        assert_eq!(tokens.mode_depth(), 1);
        let third = tokens.next().unwrap().unwrap();
        assert_eq!(third.kind(), TokenKind::Text);
        assert_eq!(third.start_position(), Position::new(1, 3));

        tokens.push_mode(ScanMode::FontData);
        assert_eq!(tokens.pop_mode(), Some(ScanMode::FontData));
        assert_eq!(tokens.pop_mode(), None);
        assert!(tokens.next().is_none());
    }
}
