//! Accepted shortcut shapes and the rules that recognize them.
//!
//! Rules are checked in a fixed priority order and the first match decides the
//! shape. A sequence matching none of them is rejected.

use crate::recorder::SequenceElement;

use serde::{Deserialize, Serialize};

/// Left mouse button id.
pub const BUTTON_LEFT: u16 = 1;
/// Right mouse button id.
pub const BUTTON_RIGHT: u16 = 2;
/// Middle mouse button id.
pub const BUTTON_MIDDLE: u16 = 3;

/// Shape of an accepted shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutKind {
    /// One key pressed twice in quick succession.
    DoublePress,
    /// Ctrl/Alt held on the first key, followed by anything.
    ModifierKey,
    /// A lone mouse button; left/right only when long-pressed.
    MouseButton,
    /// Ctrl/Alt held on the first element, then a mouse button.
    ModifierMouse,
    /// Two different unmodified keys.
    TwoKey,
}

/// Classify a completed attempt. `None` means the attempt is rejected.
pub fn classify(sequence: &[SequenceElement]) -> Option<ShortcutKind> {
    if sequence.is_empty() {
        return None;
    }

    if is_double_press(sequence) {
        Some(ShortcutKind::DoublePress)
    } else if is_modifier_key(sequence) {
        Some(ShortcutKind::ModifierKey)
    } else if is_mouse_button(sequence) {
        Some(ShortcutKind::MouseButton)
    } else if is_modifier_mouse(sequence) {
        Some(ShortcutKind::ModifierMouse)
    } else if is_two_key(sequence) {
        Some(ShortcutKind::TwoKey)
    } else {
        None
    }
}

/// Exactly one key element, marked as a double-press.
pub fn is_double_press(sequence: &[SequenceElement]) -> bool {
    match sequence {
        [SequenceElement::Key(key)] => key.is_double_press,
        _ => false,
    }
}

fn is_modifier_key(sequence: &[SequenceElement]) -> bool {
    match sequence {
        [first @ SequenceElement::Key(_), _, ..] => first.has_modifier(),
        _ => false,
    }
}

fn is_mouse_button(sequence: &[SequenceElement]) -> bool {
    match sequence {
        [SequenceElement::Mouse(mouse)] => {
            let plain_click = matches!(mouse.button, BUTTON_LEFT | BUTTON_RIGHT);
            !plain_click || mouse.is_long_press
        }
        _ => false,
    }
}

fn is_modifier_mouse(sequence: &[SequenceElement]) -> bool {
    match sequence {
        [first, SequenceElement::Mouse(_)] => first.has_modifier(),
        _ => false,
    }
}

fn is_two_key(sequence: &[SequenceElement]) -> bool {
    match sequence {
        [SequenceElement::Key(first), SequenceElement::Key(second)] => {
            !first.ctrl_held && !first.alt_held && first.code != second.code
        }
        _ => false,
    }
}
