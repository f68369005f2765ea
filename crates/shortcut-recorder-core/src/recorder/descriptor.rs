use crate::recorder::{SequenceElement, ShortcutKind};

use serde::{Deserialize, Serialize};

/// Whether a descriptor is a live preview or a committed shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutStatus {
    /// Emitted after every input event.
    Updated,
    /// Emitted once per accepted attempt.
    Finished,
}

/// Output of the recognition engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDescriptor {
    /// Display label, e.g. `Ctrl → A` or `Double-Shift`.
    pub label: String,
    /// Recorded elements in arrival order.
    pub sequence: Vec<SequenceElement>,
    /// Preview or final.
    pub status: ShortcutStatus,
    /// Recognized shape; only set on finished descriptors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShortcutKind>,
}

impl ShortcutDescriptor {
    /// True for a committed shortcut.
    pub fn is_finished(&self) -> bool {
        self.status == ShortcutStatus::Finished
    }
}
