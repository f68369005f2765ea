//! Configuration management for shortcut-recorder.
//!
//! Loads and saves a TOML configuration file from the platform config
//! directory (or an explicit path), writing defaults on first run with an
//! atomic temp-file-and-rename.

use crate::{
    AppError, AppResult,
    config::{LoggingConfig, OutputConfig, RecorderSettings},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use shortcut_recorder_core::RecorderConfig;
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Recognition engine settings.
    #[serde(default)]
    pub recorder: RecorderSettings,
    /// Descriptor output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Log destinations and filters.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the platform config directory, creating a
    /// default file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, writing defaults there if missing.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!(config_path = ?path, "No config found, creating default");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Engine configuration, validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Recorder`] for zero thresholds or an empty separator.
    #[track_caller]
    pub fn recorder_config(&self) -> AppResult<RecorderConfig> {
        let config = self.recorder.to_recorder_config();
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                debug!(config_dir = ?dir, "Created config directory");
            }
        }

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "shortcut-recorder", "Shortcut-Recorder")
            .ok_or_else(|| AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
