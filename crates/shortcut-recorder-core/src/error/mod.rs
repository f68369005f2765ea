use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder configuration errors with source location tracking.
///
/// Input handling itself never fails: unknown event kinds, unmapped key codes,
/// rejected sequences and unmatched releases are all absorbed by the engine.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// A timing threshold was zero, which would accept or reject everything.
    #[error("Invalid {name} threshold: {value_ms}ms {location}")]
    InvalidThreshold {
        /// Which threshold was rejected.
        name: &'static str,
        /// The rejected value in milliseconds.
        value_ms: u64,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Label separator was empty.
    #[error("Label separator must not be empty {location}")]
    InvalidSeparator {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
