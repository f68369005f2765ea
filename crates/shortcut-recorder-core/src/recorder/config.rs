use crate::{CoreResult, RecorderError};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::instrument;

/// Minimum hold, in milliseconds, for a mouse press to count as long.
pub const DEFAULT_LONG_PRESS_THRESHOLD_MS: u64 = 500;

/// Maximum gap, in milliseconds, between two presses of one key for a double-press.
pub const DEFAULT_DOUBLE_PRESS_THRESHOLD_MS: u64 = 500;

/// Separator placed between rendered sequence elements.
pub const DEFAULT_LABEL_SEPARATOR: &str = " → ";

/// Tunables for the recognition engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Mouse presses held at least this long are long presses.
    pub long_press_threshold_ms: u64,
    /// Two presses of the same key within this window form a double-press.
    pub double_press_threshold_ms: u64,
    /// Joins element names in a label.
    pub separator: String,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            long_press_threshold_ms: DEFAULT_LONG_PRESS_THRESHOLD_MS,
            double_press_threshold_ms: DEFAULT_DOUBLE_PRESS_THRESHOLD_MS,
            separator: DEFAULT_LABEL_SEPARATOR.to_string(),
        }
    }
}

impl RecorderConfig {
    /// Check that thresholds are non-zero and the separator is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::InvalidThreshold`] or
    /// [`RecorderError::InvalidSeparator`].
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> CoreResult<()> {
        if self.long_press_threshold_ms == 0 {
            return Err(RecorderError::InvalidThreshold {
                name: "long-press",
                value_ms: self.long_press_threshold_ms,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.double_press_threshold_ms == 0 {
            return Err(RecorderError::InvalidThreshold {
                name: "double-press",
                value_ms: self.double_press_threshold_ms,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.separator.is_empty() {
            return Err(RecorderError::InvalidSeparator {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
