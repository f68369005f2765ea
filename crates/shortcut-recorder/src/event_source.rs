//! Raw event feed decoded from JSON lines.
//!
//! Stands in for the global input hook: each non-blank line is one hook event
//! (`{"type":4,"keycode":30,"ctrlKey":true,"altKey":false,"time":120}`).
//! Lines starting with `#` are comments. Malformed lines are logged and
//! skipped.

use crate::{AppError, AppResult, EventHub};

use std::panic::Location;

use error_location::ErrorLocation;
use shortcut_recorder_core::RawInputEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

/// Counters reported when the feed is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Events decoded and published.
    pub published: usize,
    /// Lines that failed to decode.
    pub skipped: usize,
}

/// Reads raw events from a line-oriented stream.
pub struct EventSource<R> {
    reader: R,
}

impl<R: AsyncBufRead + Unpin> EventSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Publish every decodable line into `hub` until end of input.
    ///
    /// # Errors
    ///
    /// Returns error only if reading the underlying stream fails.
    #[instrument(skip(self, hub))]
    pub async fn run(self, hub: &mut EventHub) -> AppResult<SourceStats> {
        let mut lines = self.reader.lines();
        let mut stats = SourceStats::default();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;

            match parse_line(&line, line_no) {
                Ok(Some(event)) => {
                    let delivered = hub.publish(event).await;
                    if delivered == 0 {
                        debug!(line = line_no, "No live listeners for event");
                    }
                    stats.published += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "Skipping malformed event line");
                    stats.skipped += 1;
                }
            }
        }

        info!(
            published = stats.published,
            skipped = stats.skipped,
            "Event source exhausted"
        );

        Ok(stats)
    }
}

/// Decode one input line. Blank lines and `#` comments yield `None`.
#[track_caller]
pub fn parse_line(line: &str, line_no: usize) -> AppResult<Option<RawInputEvent>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| AppError::EventParse {
            line: line_no,
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
