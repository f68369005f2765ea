use crate::recorder::{PressHistory, SequenceElement};

use std::collections::{HashMap, HashSet};

/// Mutable state of one recording session.
///
/// `active_keys` and `mouse_down_at` mirror what is physically held. An
/// attempt is complete exactly when both are empty.
#[derive(Debug, Clone, Default)]
pub struct RecorderState {
    pub(crate) active_keys: HashSet<u16>,
    pub(crate) mouse_down_at: HashMap<u16, u64>,
    pub(crate) sequence: Vec<SequenceElement>,
    pub(crate) press_history: PressHistory,
}

impl RecorderState {
    /// Key codes currently held.
    pub fn active_keys(&self) -> &HashSet<u16> {
        &self.active_keys
    }

    /// Press timestamps of mouse buttons currently held.
    pub fn mouse_down_at(&self) -> &HashMap<u16, u64> {
        &self.mouse_down_at
    }

    /// Elements recorded so far in this attempt, in arrival order.
    pub fn sequence(&self) -> &[SequenceElement] {
        &self.sequence
    }

    /// Double-press history, kept across attempts.
    pub fn press_history(&self) -> &PressHistory {
        &self.press_history
    }

    /// Nothing is held.
    pub fn all_released(&self) -> bool {
        self.active_keys.is_empty() && self.mouse_down_at.is_empty()
    }

    /// Clear the attempt. `press_history` survives.
    pub(crate) fn reset_attempt(&mut self) {
        self.active_keys.clear();
        self.mouse_down_at.clear();
        self.sequence.clear();
    }
}
