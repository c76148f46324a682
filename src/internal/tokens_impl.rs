use std::cell::OnceCell;

use log::trace;

use crate::{
    position::LineIndex, PeekResult, Position, PositionProvider, Result, RtfScanError,
    RtfScanErrorKind, ScanMode, Span, Token, TokenKind,
};

use super::{lex_at, ScanState};

/// An iterator over the tokens of an RTF input.
pub(crate) struct TokensImpl<'h> {
    // The input haystack.
    input: &'h [u8],
    // The offset of the next lexeme in the input.
    pos: usize,
    // Added to every emitted span.
    offset: usize,
    emit_newlines: bool,
    state: ScanState,
    // Built on the first position request.
    line_index: OnceCell<LineIndex>,
    // Set after the end of the input or an error was reported.
    finished: bool,
}

impl<'h> TokensImpl<'h> {
    pub(crate) fn new(input: &'h [u8], emit_newlines: bool) -> Self {
        Self {
            input,
            pos: 0,
            offset: 0,
            emit_newlines,
            state: ScanState::default(),
            line_index: OnceCell::new(),
            finished: false,
        }
    }

    pub(crate) fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn nesting_depth(&self) -> usize {
        self.state.nesting_depth()
    }

    #[inline]
    pub(crate) fn state(&self) -> &ScanState {
        &self.state
    }

    #[inline]
    pub(crate) fn state_mut(&mut self) -> &mut ScanState {
        &mut self.state
    }

    /// Returns the next token, skipping line breaks unless they were requested.
    ///
    /// Every error is reported once. Afterwards the iterator is exhausted.
    pub(crate) fn next_token(&mut self) -> Option<Result<Token>> {
        if self.finished {
            return None;
        }
        let result = Self::scan(
            self.input,
            &mut self.pos,
            &mut self.state,
            self.emit_newlines,
        );
        match result {
            Ok(Some((token, _))) => Some(Ok(token.shifted(self.offset))),
            Ok(None) => {
                self.finished = true;
                self.end_of_input().map(Err)
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }

    /// Peeks n tokens ahead without consuming them.
    ///
    /// The peek operation stops at the end of the input, at an error and at a token that would
    /// switch modes. In the latter case the token is included and the new mode is returned.
    pub(crate) fn peek_n(&self, n: usize) -> PeekResult {
        let mut pos = self.pos;
        let mut state = self.state.clone();
        let mut tokens = Vec::with_capacity(n);
        let mut new_mode = None;
        if !self.finished {
            while tokens.len() < n {
                match Self::scan(self.input, &mut pos, &mut state, self.emit_newlines) {
                    Ok(Some((token, switched))) => {
                        tokens.push(token.shifted(self.offset));
                        if switched.is_some() {
                            new_mode = switched;
                            break;
                        }
                    }
                    Ok(None) | Err(_) => break,
                }
            }
        }
        if let Some(mode) = new_mode {
            PeekResult::MatchesReachedModeSwitch((tokens, mode))
        } else if tokens.len() == n {
            PeekResult::Matches(tokens)
        } else if tokens.is_empty() {
            PeekResult::NotFound
        } else {
            PeekResult::MatchesReachedEnd(tokens)
        }
    }

    // Scans the next reported token at `pos` and applies its effects on `state`.
    // Returns the unshifted token and the new mode if the token switched modes.
    fn scan(
        input: &[u8],
        pos: &mut usize,
        state: &mut ScanState,
        emit_newlines: bool,
    ) -> Result<Option<(Token, Option<ScanMode>)>> {
        loop {
            let Some(lexeme) = lex_at(input, *pos, state.current_mode())? else {
                return Ok(None);
            };
            let token = Token::new(lexeme.kind, Span::new(*pos, lexeme.end));
            *pos = lexeme.end;
            if token.kind() == TokenKind::Newline && !emit_newlines {
                continue;
            }
            let switched = state.transition(
                token.kind(),
                token.control_word_name(input),
                &input[token.range()],
                token.start(),
            )?;
            trace!(
                "{:?} {} in mode {}",
                token.kind(),
                token.span(),
                state.current_mode()
            );
            return Ok(Some((token, switched)));
        }
    }

    fn end_of_input(&self) -> Option<RtfScanError> {
        if self.state.current_mode() == ScanMode::FontData {
            return Some(RtfScanError::new(RtfScanErrorKind::UnterminatedFontData {
                depth: self.state.nesting_depth(),
            }));
        }
        None
    }

    /// Positions are computed for offsets relative to the input, i.e. without the offset
    /// given in [`TokensImpl::with_offset`].
    pub(crate) fn position(&self, offset: usize) -> Position {
        self.line_index
            .get_or_init(|| LineIndex::new(self.input))
            .position(offset.saturating_sub(self.offset))
    }
}

impl std::fmt::Debug for TokensImpl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokensImpl")
            .field("pos", &self.pos)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .finish()
    }
}

impl Iterator for TokensImpl<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
