use log::{debug, trace};

use crate::{Result, RtfScanError, RtfScanErrorKind};

/// What the scanner has to do after a closing brace was fed into a [`NestedModeTracker`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BraceOutcome {
    /// The group of the specialized mode is still open. Stay in the current mode.
    Continue,
    /// The group that started the specialized mode has been closed. Pop the current mode.
    ExitMode,
}

/// Tracks the brace nesting depth within a specialized scanner mode.
///
/// The depth is counted independently of any nesting in the surrounding mode. When the
/// scanner enters the specialized mode it calls [`NestedModeTracker::prime`], because the
/// control word that triggered the mode already lives inside an open group. Each opening
/// brace increments the depth, each closing brace decrements it. The closing brace that
/// brings the depth back to zero yields [`BraceOutcome::ExitMode`].
///
/// A closing brace at depth zero is an error and leaves the tracker unchanged.
#[derive(Clone, Debug, Default)]
pub struct NestedModeTracker {
    depth: usize,
}

impl NestedModeTracker {
    /// Creates a tracker with depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session at depth one.
    ///
    /// A session that is still running is discarded together with its depth.
    pub fn prime(&mut self) {
        if self.depth > 0 {
            debug!(
                "Nested mode tracker restarted, discarding open depth {}",
                self.depth
            );
        }
        self.depth = 1;
    }

    /// Handles an opening brace.
    #[inline]
    pub fn opening_brace(&mut self) {
        self.depth += 1;
        trace!("Opening brace, depth {}", self.depth);
    }

    /// Handles a closing brace.
    ///
    /// Returns [`BraceOutcome::ExitMode`] if the depth dropped to zero.
    /// Fails with [`RtfScanErrorKind::UnbalancedBraceInSpecializedMode`] if the depth was
    /// already zero.
    pub fn closing_brace(&mut self) -> Result<BraceOutcome> {
        if self.depth == 0 {
            return Err(RtfScanError::new(
                RtfScanErrorKind::UnbalancedBraceInSpecializedMode { offset: None },
            ));
        }
        self.depth -= 1;
        trace!("Closing brace, depth {}", self.depth);
        if self.depth == 0 {
            Ok(BraceOutcome::ExitMode)
        } else {
            Ok(BraceOutcome::Continue)
        }
    }

    /// The current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True while a session is running, i.e. the depth is greater than zero.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Ends the current session without signaling.
    pub fn reset(&mut self) {
        self.depth = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closes_until_exit(tracker: &mut NestedModeTracker, closes: usize) -> Vec<BraceOutcome> {
        (0..closes)
            .map(|_| tracker.closing_brace().unwrap())
            .collect()
    }

    #[test]
    fn test_balanced_sequences_exit_once_on_last_close() {
        for n in 1..=16 {
            let mut tracker = NestedModeTracker::new();
            for _ in 0..n {
                tracker.opening_brace();
            }
            assert_eq!(tracker.depth(), n);
            let outcomes = closes_until_exit(&mut tracker, n);
            let exits: Vec<usize> = outcomes
                .iter()
                .enumerate()
                .filter(|(_, o)| **o == BraceOutcome::ExitMode)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(exits, vec![n - 1], "n = {n}");
            assert!(!tracker.is_active());
        }
    }

    #[test]
    fn test_partial_closes_never_exit() {
        for n in 2..=8 {
            for k in 0..n {
                let mut tracker = NestedModeTracker::new();
                for _ in 0..n {
                    tracker.opening_brace();
                }
                let outcomes = closes_until_exit(&mut tracker, k);
                assert!(outcomes.iter().all(|o| *o == BraceOutcome::Continue));
                assert_eq!(tracker.depth(), n - k);
            }
        }
    }

    #[test]
    fn test_interleaved() {
        let mut tracker = NestedModeTracker::new();
        tracker.opening_brace();
        tracker.opening_brace();
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::Continue);
        assert_eq!(tracker.depth(), 1);
        tracker.opening_brace();
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::Continue);
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::ExitMode);
    }

    #[test]
    fn test_close_on_fresh_tracker_fails() {
        let mut tracker = NestedModeTracker::new();
        let err = tracker.closing_brace().unwrap_err();
        assert!(matches!(
            err.kind(),
            RtfScanErrorKind::UnbalancedBraceInSpecializedMode { offset: None }
        ));
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_prime_restarts_session() {
        let mut tracker = NestedModeTracker::new();
        tracker.prime();
        assert!(tracker.is_active());
        tracker.opening_brace();
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::Continue);
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::ExitMode);
        assert!(tracker.closing_brace().is_err());

        tracker.prime();
        assert_eq!(tracker.depth(), 1);
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::ExitMode);

        // Priming a running session discards its depth.
        tracker.prime();
        tracker.opening_brace();
        assert_eq!(tracker.depth(), 2);
        tracker.prime();
        assert_eq!(tracker.depth(), 1);
        assert_eq!(tracker.closing_brace().unwrap(), BraceOutcome::ExitMode);

        tracker.opening_brace();
        tracker.reset();
        assert!(!tracker.is_active());
    }
}
