use crate::config::{
    default_double_press_threshold_ms, default_long_press_threshold_ms, default_separator,
};

use serde::{Deserialize, Serialize};
use shortcut_recorder_core::RecorderConfig;

/// Recognition engine tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderSettings {
    /// Minimum mouse hold, in milliseconds, for a long press.
    #[serde(default = "default_long_press_threshold_ms")]
    pub long_press_threshold_ms: u64,

    /// Maximum gap, in milliseconds, between the two presses of a double-press.
    #[serde(default = "default_double_press_threshold_ms")]
    pub double_press_threshold_ms: u64,

    /// Separator between elements in shortcut labels.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            long_press_threshold_ms: default_long_press_threshold_ms(),
            double_press_threshold_ms: default_double_press_threshold_ms(),
            separator: default_separator(),
        }
    }
}

impl RecorderSettings {
    /// Engine configuration built from these settings.
    pub fn to_recorder_config(&self) -> RecorderConfig {
        RecorderConfig {
            long_press_threshold_ms: self.long_press_threshold_ms,
            double_press_threshold_ms: self.double_press_threshold_ms,
            separator: self.separator.clone(),
        }
    }
}
