use shortcut_recorder_core::RecorderError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the shortcut-recorder binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Recognition engine rejected its configuration.
    #[error("Recorder error: {source} {location}")]
    Recorder {
        /// The underlying recorder error.
        #[source]
        source: RecorderError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// An input line could not be decoded as a raw event.
    #[error("Invalid event on line {line}: {reason} {location}")]
    EventParse {
        /// 1-based line number in the input stream.
        line: usize,
        /// Decoder message.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to send message through async channel.
    #[error("Channel send failed: {message} {location}")]
    ChannelSendFailed {
        /// Human-readable error message.
        message: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to render or write a descriptor.
    #[error("Output failed: {reason} {location}")]
    OutputFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem or stream operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<RecorderError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<RecorderError> for AppError {
    #[track_caller]
    fn from(source: RecorderError) -> Self {
        AppError::Recorder {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
