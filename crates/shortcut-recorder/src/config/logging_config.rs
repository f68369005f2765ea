use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for daily-rolling log files (None = stderr only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}
