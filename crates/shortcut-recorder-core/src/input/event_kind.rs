use serde::{Deserialize, Serialize};

/// Kind of a raw input event.
///
/// On the wire a kind is the numeric event type used by libuiohook. Types the
/// recorder has no handler for decode to [`EventKind::Unsupported`] and are
/// ignored by the engine instead of failing the whole stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EventKind {
    /// A key went down (also sent on auto-repeat).
    KeyDown,
    /// A key went up.
    KeyUp,
    /// A mouse button went down.
    MouseDown,
    /// A mouse button went up.
    MouseUp,
    /// Any other hook event type (wheel, move, typed, ...).
    Unsupported(u8),
}

impl EventKind {
    /// libuiohook `EVENT_KEY_PRESSED`.
    pub const KEY_DOWN_CODE: u8 = 4;
    /// libuiohook `EVENT_KEY_RELEASED`.
    pub const KEY_UP_CODE: u8 = 5;
    /// libuiohook `EVENT_MOUSE_PRESSED`.
    pub const MOUSE_DOWN_CODE: u8 = 7;
    /// libuiohook `EVENT_MOUSE_RELEASED`.
    pub const MOUSE_UP_CODE: u8 = 8;

    /// Numeric wire code for this kind.
    pub fn code(self) -> u8 {
        match self {
            EventKind::KeyDown => Self::KEY_DOWN_CODE,
            EventKind::KeyUp => Self::KEY_UP_CODE,
            EventKind::MouseDown => Self::MOUSE_DOWN_CODE,
            EventKind::MouseUp => Self::MOUSE_UP_CODE,
            EventKind::Unsupported(code) => code,
        }
    }

    /// Whether the recorder has a handler for this kind.
    pub fn is_supported(self) -> bool {
        !matches!(self, EventKind::Unsupported(_))
    }
}

impl From<u8> for EventKind {
    fn from(code: u8) -> Self {
        match code {
            Self::KEY_DOWN_CODE => EventKind::KeyDown,
            Self::KEY_UP_CODE => EventKind::KeyUp,
            Self::MOUSE_DOWN_CODE => EventKind::MouseDown,
            Self::MOUSE_UP_CODE => EventKind::MouseUp,
            other => EventKind::Unsupported(other),
        }
    }
}

impl From<EventKind> for u8 {
    fn from(kind: EventKind) -> Self {
        kind.code()
    }
}
