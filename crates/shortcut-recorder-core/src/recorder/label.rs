//! Display labels for recorded sequences.

use crate::recorder::{
    BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT, MouseElement, SequenceElement, is_double_press,
};

use std::borrow::Cow;

/// Renders sequences as human-readable labels such as `Ctrl → A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormatter {
    separator: String,
}

impl LabelFormatter {
    /// Formatter joining elements with `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Label for `sequence`. An empty sequence renders as an empty string.
    pub fn format(&self, sequence: &[SequenceElement]) -> String {
        if is_double_press(sequence) {
            if let Some(SequenceElement::Key(key)) = sequence.last() {
                return format!("Double-{}", key_name(key.code));
            }
        }

        sequence
            .iter()
            .map(|element| match element {
                SequenceElement::Key(key) => key_name(key.code),
                SequenceElement::Mouse(mouse) => Cow::Owned(mouse_label(mouse)),
            })
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

fn mouse_label(mouse: &MouseElement) -> String {
    let press_type = if mouse.is_long_press {
        "LongPress"
    } else {
        "ShortPress"
    };
    format!("{}{}", button_name(mouse.button), press_type)
}

/// Display name for a mouse button id, `Button<id>` when unnamed.
pub fn button_name(button: u16) -> Cow<'static, str> {
    match button {
        BUTTON_LEFT => Cow::Borrowed("Left"),
        BUTTON_RIGHT => Cow::Borrowed("Right"),
        BUTTON_MIDDLE => Cow::Borrowed("Middle"),
        other => Cow::Owned(format!("Button{}", other)),
    }
}

/// Display name for a libuiohook key code, `Key<code>` when unmapped.
pub fn key_name(code: u16) -> Cow<'static, str> {
    let name = match code {
        1 => "Escape",
        2 => "1",
        3 => "2",
        4 => "3",
        5 => "4",
        6 => "5",
        7 => "6",
        8 => "7",
        9 => "8",
        10 => "9",
        11 => "0",
        12 => "Minus",
        13 => "Equal",
        14 => "Backspace",
        15 => "Tab",
        16 => "Q",
        17 => "W",
        18 => "E",
        19 => "R",
        20 => "T",
        21 => "Y",
        22 => "U",
        23 => "I",
        24 => "O",
        25 => "P",
        26 => "BracketLeft",
        27 => "BracketRight",
        28 => "Enter",
        29 => "Ctrl",
        30 => "A",
        31 => "S",
        32 => "D",
        33 => "F",
        34 => "G",
        35 => "H",
        36 => "J",
        37 => "K",
        38 => "L",
        39 => "Semicolon",
        40 => "Quote",
        41 => "Backquote",
        42 => "Shift",
        43 => "Backslash",
        44 => "Z",
        45 => "X",
        46 => "C",
        47 => "V",
        48 => "B",
        49 => "N",
        50 => "M",
        51 => "Comma",
        52 => "Period",
        53 => "Slash",
        54 => "ShiftRight",
        55 => "NumpadMultiply",
        56 => "Alt",
        57 => "Space",
        58 => "CapsLock",
        59 => "F1",
        60 => "F2",
        61 => "F3",
        62 => "F4",
        63 => "F5",
        64 => "F6",
        65 => "F7",
        66 => "F8",
        67 => "F9",
        68 => "F10",
        69 => "NumLock",
        70 => "ScrollLock",
        71 => "Numpad7",
        72 => "Numpad8",
        73 => "Numpad9",
        74 => "NumpadSubtract",
        75 => "Numpad4",
        76 => "Numpad5",
        77 => "Numpad6",
        78 => "NumpadAdd",
        79 => "Numpad1",
        80 => "Numpad2",
        81 => "Numpad3",
        82 => "Numpad0",
        83 => "NumpadDecimal",
        87 => "F11",
        88 => "F12",
        91 => "F13",
        92 => "F14",
        93 => "F15",
        99 => "F16",
        100 => "F17",
        101 => "F18",
        102 => "F19",
        103 => "F20",
        104 => "F21",
        105 => "F22",
        106 => "F23",
        107 => "F24",
        3613 => "CtrlRight",
        3637 => "NumpadDivide",
        3639 => "PrintScreen",
        3640 => "AltRight",
        3655 => "Home",
        3657 => "PageUp",
        3663 => "End",
        3665 => "PageDown",
        3666 => "Insert",
        3667 => "Delete",
        3675 => "Meta",
        3676 => "MetaRight",
        57416 => "ArrowUp",
        57419 => "ArrowLeft",
        57421 => "ArrowRight",
        57424 => "ArrowDown",
        other => return Cow::Owned(format!("Key{}", other)),
    };

    Cow::Borrowed(name)
}
