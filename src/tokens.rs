use log::trace;

use crate::{
    internal::TokensImpl, Position, PositionProvider, Result, ScanMode, ScanModeSwitcher, Token,
};

/// The result of a peek operation.
#[derive(Debug, PartialEq)]
pub enum PeekResult {
    /// The peek operation found n tokens.
    Matches(Vec<Token>),
    /// The peek operation found less than n tokens because the end of the input was reached
    /// or the next token is erroneous.
    MatchesReachedEnd(Vec<Token>),
    /// The peek operation found less than n tokens because the last token would have
    /// triggered a mode switch. The tokens are returned along with the mode that would be
    /// current after the last token.
    MatchesReachedModeSwitch((Vec<Token>, ScanMode)),
    /// The peek operation found no tokens.
    NotFound,
}

/// An iterator over the tokens of an RTF input.
///
/// The iterator yields `Ok(Token)` until the input is exhausted. If the input is malformed,
/// or ends inside a font data group, a single `Err` is yielded and the iterator ends.
///
/// * `'h` represents the lifetime of the haystack being scanned.
///
/// This iterator can be created with the [`crate::RtfScanner::tokens`] method.
#[derive(Debug)]
pub struct Tokens<'h> {
    inner: TokensImpl<'h>,
}

impl<'h> Tokens<'h> {
    /// Creates a new `Tokens` iterator.
    pub(crate) fn new(input: &'h [u8], emit_newlines: bool) -> Self {
        Self {
            inner: TokensImpl::new(input, emit_newlines),
        }
    }

    /// Sets an offset that is added to the span of each token.
    /// A parser that scans a slice of a larger buffer can pass the start of the slice.
    pub fn with_offset(self, offset: usize) -> Self {
        Self {
            inner: self.inner.with_offset(offset),
        }
    }

    /// Retrieve the byte offset of the next lexeme from the start of the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.inner.offset()
    }

    /// The brace nesting depth of the current font data group, zero outside of font data.
    #[inline]
    pub fn nesting_depth(&self) -> usize {
        self.inner.nesting_depth()
    }

    /// Returns the next token in the input.
    ///
    /// If the input is exhausted, `None` is returned.
    #[inline]
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        self.inner.next_token()
    }

    /// Peeks n tokens ahead without consuming the tokens.
    /// The function returns [PeekResult].
    ///
    /// The peek operation always stops at the end of the input or when a mode switch is
    /// triggered by the last token. The mode switch is not conducted by the peek operation to
    /// not change the state of the scanner.
    pub fn peek_n(&self, n: usize) -> PeekResult {
        self.inner.peek_n(n)
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl PositionProvider for Tokens<'_> {
    /// Returns the line and column numbers of the given offset.
    /// If the offset is greater than the length of the input, the position of the end of the
    /// input is returned.
    fn position(&self, offset: usize) -> Position {
        self.inner.position(offset)
    }
}

impl ScanModeSwitcher for Tokens<'_> {
    /// Pushes a scanner mode.
    ///
    /// Usually, the mode is changed by the scanner itself. Pushing [`ScanMode::FontData`]
    /// starts a new nesting session as if a font data control word had been scanned.
    fn push_mode(&mut self, mode: ScanMode) {
        trace!("Parser pushes scanner mode {}", mode);
        self.inner.state_mut().push_mode(mode);
    }

    fn pop_mode(&mut self) -> Option<ScanMode> {
        trace!("Parser pops scanner mode");
        self.inner.state_mut().pop_mode()
    }

    #[inline]
    fn current_mode(&self) -> ScanMode {
        self.inner.state().current_mode()
    }

    #[inline]
    fn mode_depth(&self) -> usize {
        self.inner.state().mode_depth()
    }
}
