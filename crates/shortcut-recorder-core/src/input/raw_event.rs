use crate::EventKind;

use serde::{Deserialize, Serialize};

/// A single press or release as delivered by the global input hook.
///
/// Field names on the wire follow the hook provider (`type`, `keycode` or
/// `button`, `ctrlKey`, `altKey`, `time`), so captured hook output can be fed
/// back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputEvent {
    /// Which handler this event routes to.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Key code for keyboard events, button id for mouse events. Zero for
    /// hook events that carry neither, such as wheel or move.
    #[serde(default, alias = "keycode", alias = "button")]
    pub code: u16,
    /// Whether Ctrl was held when the event fired.
    #[serde(rename = "ctrlKey", default)]
    pub ctrl_held: bool,
    /// Whether Alt was held when the event fired.
    #[serde(rename = "altKey", default)]
    pub alt_held: bool,
    /// Milliseconds, monotonically increasing across the stream.
    #[serde(rename = "time")]
    pub timestamp: u64,
}

impl RawInputEvent {
    /// Create an event with no modifiers held.
    pub fn new(kind: EventKind, code: u16, timestamp: u64) -> Self {
        Self {
            kind,
            code,
            ctrl_held: false,
            alt_held: false,
            timestamp,
        }
    }

    /// Key-down of `code` at `timestamp`.
    pub fn key_down(code: u16, timestamp: u64) -> Self {
        Self::new(EventKind::KeyDown, code, timestamp)
    }

    /// Key-up of `code` at `timestamp`.
    pub fn key_up(code: u16, timestamp: u64) -> Self {
        Self::new(EventKind::KeyUp, code, timestamp)
    }

    /// Mouse-down of `button` at `timestamp`.
    pub fn mouse_down(button: u16, timestamp: u64) -> Self {
        Self::new(EventKind::MouseDown, button, timestamp)
    }

    /// Mouse-up of `button` at `timestamp`.
    pub fn mouse_up(button: u16, timestamp: u64) -> Self {
        Self::new(EventKind::MouseUp, button, timestamp)
    }

    /// Mark Ctrl as held.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_held = true;
        self
    }

    /// Mark Alt as held.
    pub fn with_alt(mut self) -> Self {
        self.alt_held = true;
        self
    }

    /// True when Ctrl or Alt was held.
    pub fn has_modifier(&self) -> bool {
        self.ctrl_held || self.alt_held
    }
}
