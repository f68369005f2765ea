mod event_kind;
mod raw_event;

pub use {event_kind::EventKind, raw_event::RawInputEvent};
