use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A lexical mode of the RTF scanner.
///
/// This is known from Flex as *Start conditions*: each mode recognizes its own set of
/// lexemes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanMode {
    /// Regular RTF markup.
    #[default]
    Default,
    /// Opaque font data, entered after one of the
    /// [`KNOWN_CONTROL_WORDS`](crate::KNOWN_CONTROL_WORDS) and left when its group closes.
    FontData,
}

impl ScanMode {
    /// The name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            ScanMode::Default => "INITIAL",
            ScanMode::FontData => "FONT_DATA",
        }
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A trait to switch between scanner modes with stack semantics.
///
/// The scanner pushes a mode when a lexeme starts a specialized region and pops it when the
/// region ends. A parser may also drive the stack explicitly. It is discouraged to mix both
/// kinds of mode changes.
pub trait ScanModeSwitcher {
    /// Makes `mode` the current mode, remembering the previous one.
    fn push_mode(&mut self, mode: ScanMode);
    /// Returns to the mode that was current before the last push.
    /// The bottom mode is never popped; in that case `None` is returned.
    fn pop_mode(&mut self) -> Option<ScanMode>;
    /// Returns the current scanner mode.
    fn current_mode(&self) -> ScanMode;
    /// Returns the number of modes on the stack, at least one.
    fn mode_depth(&self) -> usize;
}

/// A stack of scanner modes whose bottom entry is always [`ScanMode::Default`].
#[derive(Clone, Debug)]
pub struct ModeStack {
    stack: Vec<ScanMode>,
}

impl ModeStack {
    /// Creates a stack holding only the default mode.
    pub fn new() -> Self {
        Self {
            stack: vec![ScanMode::Default],
        }
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanModeSwitcher for ModeStack {
    fn push_mode(&mut self, mode: ScanMode) {
        trace!("Push scanner mode {} onto {}", mode, self.current_mode());
        self.stack.push(mode);
    }

    fn pop_mode(&mut self) -> Option<ScanMode> {
        if self.stack.len() == 1 {
            trace!("Refusing to pop the bottom scanner mode");
            return None;
        }
        let popped = self.stack.pop();
        trace!("Pop scanner mode, back in {}", self.current_mode());
        popped
    }

    #[inline]
    fn current_mode(&self) -> ScanMode {
        // The stack is never empty.
        self.stack.last().copied().unwrap_or_default()
    }

    #[inline]
    fn mode_depth(&self) -> usize {
        self.stack.len()
    }
}
