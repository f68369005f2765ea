//! Timestamp-driven press detectors.
//!
//! Neither detector reads a clock: every decision uses the millisecond
//! timestamps carried on the events, so replayed streams classify exactly like
//! live ones.

use std::collections::HashMap;

use tracing::trace;

/// Recent press timestamps per key code, used for double-press detection.
///
/// Lives outside the per-attempt state and is not cleared on reset. The only
/// pruning is the sliding window applied on each press of the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressHistory {
    presses: HashMap<u16, Vec<u64>>,
}

impl PressHistory {
    /// Record a press of `code` at `now` and report whether it completes a
    /// double-press within `window_ms`.
    ///
    /// Presses older than the window are dropped first. On a hit the history
    /// for `code` is emptied so a third rapid press starts over.
    pub fn register_press(&mut self, code: u16, now: u64, window_ms: u64) -> bool {
        let presses = self.presses.entry(code).or_default();

        presses.retain(|&at| now.saturating_sub(at) <= window_ms);
        presses.push(now);

        let is_double = presses.len() >= 2;
        if is_double {
            presses.clear();
        }

        trace!(code, now, is_double, "Key press registered");

        is_double
    }

    /// Press timestamps currently remembered for `code`.
    pub fn presses(&self, code: u16) -> &[u64] {
        self.presses.get(&code).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Whether a mouse button pressed at `pressed_at` and released at
/// `released_at` was held for at least `threshold_ms`.
pub fn is_long_press(pressed_at: u64, released_at: u64, threshold_ms: u64) -> bool {
    released_at.saturating_sub(pressed_at) >= threshold_ms
}
