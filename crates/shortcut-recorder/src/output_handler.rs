//! Descriptor rendering and delivery.
//!
//! Text mode writes `<status>\t<label>` per descriptor; JSON mode writes one
//! serialized descriptor per line. With `finished_only` set, in-progress
//! updates are suppressed.

use crate::{
    AppError, AppResult,
    config::{OutputConfig, OutputFormat},
};

use std::panic::Location;

use error_location::ErrorLocation;
use shortcut_recorder_core::{ShortcutDescriptor, ShortcutStatus};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

/// Writes descriptors to an async sink.
pub struct OutputHandler<W> {
    pub(crate) writer: W,
    format: OutputFormat,
    finished_only: bool,
    written: usize,
}

impl<W: AsyncWrite + Unpin> OutputHandler<W> {
    /// Create a handler writing to `writer` as configured.
    pub fn new(writer: W, config: &OutputConfig) -> Self {
        Self {
            writer,
            format: config.format,
            finished_only: config.finished_only,
            written: 0,
        }
    }

    /// Number of descriptors written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Render and write one descriptor. Suppressed descriptors are a no-op.
    #[instrument(skip(self, descriptor), fields(status = ?descriptor.status))]
    pub async fn write_descriptor(&mut self, descriptor: &ShortcutDescriptor) -> AppResult<()> {
        let Some(line) = self.render(descriptor)? else {
            return Ok(());
        };

        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| AppError::OutputFailed {
                reason: format!("Failed to write descriptor: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.written += 1;
        debug!(label = %descriptor.label, "Descriptor written");

        Ok(())
    }

    /// Flush buffered output.
    pub async fn flush(&mut self) -> AppResult<()> {
        self.writer
            .flush()
            .await
            .map_err(|e| AppError::OutputFailed {
                reason: format!("Failed to flush output: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Line for `descriptor`, newline included, or `None` when suppressed.
    #[track_caller]
    pub fn render(&self, descriptor: &ShortcutDescriptor) -> AppResult<Option<String>> {
        if self.finished_only && !descriptor.is_finished() {
            return Ok(None);
        }

        let line = match self.format {
            OutputFormat::Text => {
                format!("{}\t{}\n", status_name(descriptor.status), descriptor.label)
            }
            OutputFormat::Json => {
                let json =
                    serde_json::to_string(descriptor).map_err(|e| AppError::OutputFailed {
                        reason: format!("Failed to serialize descriptor: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                format!("{}\n", json)
            }
        };

        Ok(Some(line))
    }
}

fn status_name(status: ShortcutStatus) -> &'static str {
    match status {
        ShortcutStatus::Updated => "updated",
        ShortcutStatus::Finished => "finished",
    }
}
