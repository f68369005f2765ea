mod config;
mod descriptor;
mod engine;
mod label;
mod sequence;
mod state;
mod timing;
mod validator;

pub use {
    config::{
        DEFAULT_DOUBLE_PRESS_THRESHOLD_MS, DEFAULT_LABEL_SEPARATOR,
        DEFAULT_LONG_PRESS_THRESHOLD_MS, RecorderConfig,
    },
    descriptor::{ShortcutDescriptor, ShortcutStatus},
    engine::{ShortcutListener, ShortcutRecorder},
    label::{LabelFormatter, button_name, key_name},
    sequence::{KeyElement, MouseElement, SequenceElement},
    state::RecorderState,
    timing::{PressHistory, is_long_press},
    validator::{BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT, ShortcutKind, classify, is_double_press},
};
