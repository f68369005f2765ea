//! Shortcut Recorder Core Library
//!
//! Recognizes user-recorded keyboard and mouse shortcuts from a stream of raw
//! press/release events: single keys with Ctrl/Alt, two-key sequences,
//! double-presses, and short or long mouse presses.
//!
//! # Example
//!
//! ```
//! use shortcut_recorder_core::{
//!     CoreResult, RawInputEvent, RecorderConfig, ShortcutDescriptor, ShortcutRecorder,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let mut finished = Vec::new();
//!     let mut recorder = ShortcutRecorder::new(
//!         RecorderConfig::default(),
//!         |descriptor: ShortcutDescriptor| {
//!             if descriptor.is_finished() {
//!                 finished.push(descriptor.label);
//!             }
//!         },
//!     )?;
//!
//!     // Ctrl down, A down, release both.
//!     recorder.handle_event(&RawInputEvent::key_down(29, 0).with_ctrl());
//!     recorder.handle_event(&RawInputEvent::key_down(30, 40).with_ctrl());
//!     recorder.handle_event(&RawInputEvent::key_up(30, 90).with_ctrl());
//!     recorder.handle_event(&RawInputEvent::key_up(29, 120));
//!
//!     drop(recorder);
//!     assert_eq!(finished, vec!["Ctrl → A".to_string()]);
//!     Ok(())
//! }
//! ```

mod error;
mod input;
mod recorder;

pub use {
    error::RecorderError,
    error::Result as CoreResult,
    input::{EventKind, RawInputEvent},
    recorder::{
        BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT, DEFAULT_DOUBLE_PRESS_THRESHOLD_MS,
        DEFAULT_LABEL_SEPARATOR, DEFAULT_LONG_PRESS_THRESHOLD_MS, KeyElement, LabelFormatter,
        MouseElement, PressHistory, RecorderConfig, RecorderState, SequenceElement,
        ShortcutDescriptor, ShortcutKind, ShortcutListener, ShortcutRecorder, ShortcutStatus,
        button_name, classify, is_double_press, is_long_press, key_name,
    },
};
