use crate::config::default_finished_only;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How descriptors are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<status>\t<label>` per line.
    #[default]
    Text,
    /// One JSON descriptor per line.
    Json,
}

/// Descriptor output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output encoding.
    #[serde(default)]
    pub format: OutputFormat,

    /// Suppress `updated` previews and print only finished shortcuts.
    #[serde(default = "default_finished_only")]
    pub finished_only: bool,
}
