//! Tracing subscriber setup.
//!
//! Human-readable logs always go to stderr so stdout stays reserved for
//! descriptors. When `logging.directory` is set, a JSON copy is written to a
//! daily-rolling file as well.

use crate::config::LoggingConfig;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub(crate) const DEFAULT_LOG_FILTER: &str = "shortcut_recorder=info,shortcut_recorder_core=info";

const LOG_FILE_PREFIX: &str = "shortcut-recorder";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the program.
pub(crate) fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let (file_layer, guard) = match config.directory.as_deref().map(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .build(dir)
    }) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("[shortcut-recorder] File logging disabled: {}", e);
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = &config.directory {
        tracing::debug!(log_dir = ?dir, "File logging enabled");
    }

    guard
}
