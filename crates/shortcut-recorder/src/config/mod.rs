#[allow(clippy::module_inception)]
mod config;
mod logging_config;
mod output_config;
mod recorder_settings;

pub(crate) use {
    config::Config,
    logging_config::LoggingConfig,
    output_config::{OutputConfig, OutputFormat},
    recorder_settings::RecorderSettings,
};

use shortcut_recorder_core::{
    DEFAULT_DOUBLE_PRESS_THRESHOLD_MS, DEFAULT_LABEL_SEPARATOR, DEFAULT_LONG_PRESS_THRESHOLD_MS,
};

pub(crate) const DEFAULT_FINISHED_ONLY: bool = false;

pub(crate) fn default_long_press_threshold_ms() -> u64 {
    DEFAULT_LONG_PRESS_THRESHOLD_MS
}

pub(crate) fn default_double_press_threshold_ms() -> u64 {
    DEFAULT_DOUBLE_PRESS_THRESHOLD_MS
}

pub(crate) fn default_separator() -> String {
    DEFAULT_LABEL_SEPARATOR.to_string()
}

pub(crate) fn default_finished_only() -> bool {
    DEFAULT_FINISHED_ONLY
}
