use log::debug;

use crate::{
    is_known, BraceOutcome, ModeStack, NestedModeTracker, Result, RtfScanError, RtfScanErrorKind,
    ScanMode, ScanModeSwitcher, TokenKind,
};

/// The mutable lexical state of one scan: the mode stack, the nesting tracker of the font data
/// mode and whether the next `{` opens the data group of a font data control word.
///
/// The state is cloned by peek operations, so that peeking never changes the real state.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScanState {
    modes: ModeStack,
    tracker: NestedModeTracker,
    data_group_pending: bool,
}

impl ScanState {
    #[inline]
    pub(crate) fn current_mode(&self) -> ScanMode {
        self.modes.current_mode()
    }

    #[inline]
    pub(crate) fn mode_depth(&self) -> usize {
        self.modes.mode_depth()
    }

    #[inline]
    pub(crate) fn nesting_depth(&self) -> usize {
        self.tracker.depth()
    }

    /// Enters `mode`. Entering the font data mode starts a new tracker session, discarding the
    /// depth of a session that is still open.
    pub(crate) fn push_mode(&mut self, mode: ScanMode) {
        self.modes.push_mode(mode);
        if mode == ScanMode::FontData {
            self.tracker.prime();
            self.data_group_pending = true;
        }
    }

    /// Leaves the current mode. Leaving the font data mode ends the tracker session.
    pub(crate) fn pop_mode(&mut self) -> Option<ScanMode> {
        let popped = self.modes.pop_mode()?;
        if popped == ScanMode::FontData {
            self.tracker.reset();
            self.data_group_pending = false;
        }
        Some(popped)
    }

    /// Applies the effects of a scanned token.
    ///
    /// `name` is the keyword of a control word token, `text` the bytes of the token and
    /// `start` the offset of the token, used for error reporting.
    /// Returns the new mode if the token switched modes.
    pub(crate) fn transition(
        &mut self,
        kind: TokenKind,
        name: Option<&str>,
        text: &[u8],
        start: usize,
    ) -> Result<Option<ScanMode>> {
        match self.current_mode() {
            ScanMode::Default => {
                if kind == TokenKind::ControlWord && name.is_some_and(is_known) {
                    debug!(
                        "Control word {:?} at offset {} starts font data",
                        name, start
                    );
                    self.push_mode(ScanMode::FontData);
                    return Ok(Some(ScanMode::FontData));
                }
                Ok(None)
            }
            ScanMode::FontData => {
                // Raw line breaks are ignored by RTF readers, so they must not separate a
                // control word from its data group opener.
                if kind == TokenKind::FontData && is_line_break_only(text) {
                    return Ok(None);
                }
                let data_group_opener = std::mem::take(&mut self.data_group_pending);
                match kind {
                    TokenKind::GroupStart if data_group_opener => Ok(None),
                    TokenKind::GroupStart => {
                        self.tracker.opening_brace();
                        Ok(None)
                    }
                    TokenKind::GroupEnd => {
                        let outcome = self.tracker.closing_brace().map_err(|_| {
                            RtfScanError::new(
                                RtfScanErrorKind::UnbalancedBraceInSpecializedMode {
                                    offset: Some(start),
                                },
                            )
                        })?;
                        match outcome {
                            BraceOutcome::Continue => Ok(None),
                            BraceOutcome::ExitMode => {
                                self.modes.pop_mode();
                                debug!("Font data ends at offset {}", start + 1);
                                Ok(Some(self.current_mode()))
                            }
                        }
                    }
                    _ => Ok(None),
                }
            }
        }
    }
}

fn is_line_break_only(text: &[u8]) -> bool {
    !text.is_empty() && text.iter().all(|b| matches!(*b, b'\r' | b'\n'))
}
