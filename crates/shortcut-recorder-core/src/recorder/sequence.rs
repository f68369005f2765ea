use crate::RawInputEvent;

use serde::{Deserialize, Serialize};

/// A keyboard press recorded into the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyElement {
    /// Hook key code.
    pub code: u16,
    /// Ctrl held at press time.
    pub ctrl_held: bool,
    /// Alt held at press time.
    pub alt_held: bool,
    /// Press timestamp in milliseconds.
    pub timestamp: u64,
    /// Set when this press completed a double-press of the same key.
    pub is_double_press: bool,
}

impl KeyElement {
    /// Record a key press from a key-down event.
    pub fn from_event(event: &RawInputEvent) -> Self {
        Self {
            code: event.code,
            ctrl_held: event.ctrl_held,
            alt_held: event.alt_held,
            timestamp: event.timestamp,
            is_double_press: false,
        }
    }
}

/// A mouse press recorded into the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseElement {
    /// Hook button id (1 left, 2 right, 3 middle, ...).
    pub button: u16,
    /// Ctrl held at press time.
    pub ctrl_held: bool,
    /// Alt held at press time.
    pub alt_held: bool,
    /// Press timestamp in milliseconds.
    pub timestamp: u64,
    /// Set on release when the button was held past the long-press threshold.
    pub is_long_press: bool,
    /// Whether the matching release has been seen.
    #[serde(skip)]
    pub(crate) released: bool,
}

impl MouseElement {
    /// Record a mouse press from a mouse-down event.
    pub fn from_event(event: &RawInputEvent) -> Self {
        Self {
            button: event.code,
            ctrl_held: event.ctrl_held,
            alt_held: event.alt_held,
            timestamp: event.timestamp,
            is_long_press: false,
            released: false,
        }
    }

    /// Whether the long/short flag has been settled by a release.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// One recorded key or mouse interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequenceElement {
    /// Keyboard press.
    Key(KeyElement),
    /// Mouse press.
    Mouse(MouseElement),
}

impl SequenceElement {
    /// Ctrl or Alt was held when this element was pressed.
    pub fn has_modifier(&self) -> bool {
        match self {
            SequenceElement::Key(key) => key.ctrl_held || key.alt_held,
            SequenceElement::Mouse(mouse) => mouse.ctrl_held || mouse.alt_held,
        }
    }

    /// Press timestamp in milliseconds.
    pub fn timestamp(&self) -> u64 {
        match self {
            SequenceElement::Key(key) => key.timestamp,
            SequenceElement::Mouse(mouse) => mouse.timestamp,
        }
    }

    /// The key payload, if this is a key element.
    pub fn as_key(&self) -> Option<&KeyElement> {
        match self {
            SequenceElement::Key(key) => Some(key),
            SequenceElement::Mouse(_) => None,
        }
    }

    /// The mouse payload, if this is a mouse element.
    pub fn as_mouse(&self) -> Option<&MouseElement> {
        match self {
            SequenceElement::Key(_) => None,
            SequenceElement::Mouse(mouse) => Some(mouse),
        }
    }
}
