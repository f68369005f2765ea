use crate::{AppError, AppResult, AttemptState, OutputHandler};

use std::panic::Location;

use error_location::ErrorLocation;
use shortcut_recorder_core::{
    RawInputEvent, RecorderConfig, SequenceElement, ShortcutDescriptor, ShortcutListener,
    ShortcutRecorder,
};
use tokio::{io::AsyncWrite, sync::mpsc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Totals reported when the event stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw events fed to the recorder.
    pub events: usize,
    /// Attempts that produced a finished shortcut.
    pub recognized: usize,
    /// Attempts that ended without matching any rule.
    pub rejected: usize,
    /// Attempts still open at end of input.
    pub cancelled: usize,
}

/// Forwards recorder notifications onto the app's descriptor queue.
///
/// The recorder calls its listener synchronously, so descriptors are queued
/// and written once the event has been handled.
pub struct DescriptorForwarder {
    tx: mpsc::UnboundedSender<ShortcutDescriptor>,
}

impl ShortcutListener for DescriptorForwarder {
    fn on_shortcut(&mut self, descriptor: ShortcutDescriptor) {
        if let Err(e) = self.tx.send(descriptor) {
            let error = AppError::ChannelSendFailed {
                message: format!("Descriptor queue closed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            };
            warn!(error = %error, "Dropping descriptor");
        }
    }
}

/// Drives the recorder from a raw event stream and writes its descriptors.
pub struct App<W> {
    pub(crate) recorder: ShortcutRecorder<DescriptorForwarder>,
    pub(crate) descriptor_rx: mpsc::UnboundedReceiver<ShortcutDescriptor>,
    pub(crate) event_rx: mpsc::Receiver<RawInputEvent>,
    pub(crate) output: OutputHandler<W>,
    pub(crate) attempt: AttemptState,
}

impl<W: AsyncWrite + Unpin> App<W> {
    /// Build the app around a fresh recorder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Recorder`] if `config` is rejected.
    #[track_caller]
    pub fn new(
        config: RecorderConfig,
        event_rx: mpsc::Receiver<RawInputEvent>,
        output: OutputHandler<W>,
    ) -> AppResult<Self> {
        let (tx, descriptor_rx) = mpsc::unbounded_channel();
        let recorder = ShortcutRecorder::new(config, DescriptorForwarder { tx })?;

        Ok(Self {
            recorder,
            descriptor_rx,
            event_rx,
            output,
            attempt: AttemptState::Idle,
        })
    }

    /// Run until the event channel closes.
    ///
    /// An attempt still open when input ends is cancelled and counted in
    /// [`RunSummary::cancelled`].
    #[instrument(skip(self))]
    pub async fn run(mut self) -> AppResult<RunSummary> {
        info!("Shortcut recorder started");

        let mut summary = RunSummary::default();

        while let Some(event) = self.event_rx.recv().await {
            summary.events += 1;
            self.recorder.handle_event(&event);

            let finished = self.write_pending().await?;
            self.track_attempt(&event, finished, &mut summary);
        }

        if self.recorder.has_open_attempt() {
            if let AttemptState::Recording { session_id, .. } = self.attempt {
                warn!(session_id = %session_id, "Input ended mid-attempt, cancelling");
            } else {
                warn!("Input ended mid-attempt, cancelling");
            }
            self.recorder.cancel();
            self.attempt = AttemptState::Idle;
            summary.cancelled += 1;
        }

        self.output.flush().await?;

        info!(
            events = summary.events,
            recognized = summary.recognized,
            rejected = summary.rejected,
            cancelled = summary.cancelled,
            written = self.output.written(),
            "Event stream closed"
        );

        Ok(summary)
    }

    /// Write queued descriptors. Returns true if one of them was finished.
    async fn write_pending(&mut self) -> AppResult<bool> {
        let mut finished = false;

        while let Ok(descriptor) = self.descriptor_rx.try_recv() {
            if descriptor.is_finished() {
                finished = true;
                let session_id = match self.attempt {
                    AttemptState::Recording { session_id, .. } => Some(session_id),
                    AttemptState::Idle => None,
                };
                info!(
                    session_id = ?session_id,
                    label = %descriptor.label,
                    kind = ?descriptor.kind,
                    "Shortcut finished"
                );
            }
            self.output.write_descriptor(&descriptor).await?;
        }

        Ok(finished)
    }

    /// Move between idle and recording as attempts open and close.
    pub(crate) fn track_attempt(&mut self, event: &RawInputEvent, finished: bool, summary: &mut RunSummary) {
        let open = self.recorder.has_open_attempt();

        match self.attempt {
            AttemptState::Idle if open => {
                let session_id = Uuid::new_v4();
                let started_at_ms = self
                    .recorder
                    .state()
                    .sequence()
                    .first()
                    .map_or(event.timestamp, SequenceElement::timestamp);
                self.attempt = AttemptState::Recording {
                    started_at_ms,
                    session_id,
                };
                debug!(session_id = %session_id, at_ms = started_at_ms, "Attempt started");
            }
            AttemptState::Idle => {}
            AttemptState::Recording {
                session_id,
                started_at_ms,
            } if !open => {
                let duration_ms = event.timestamp.saturating_sub(started_at_ms);
                if finished {
                    summary.recognized += 1;
                } else {
                    summary.rejected += 1;
                    debug!(session_id = %session_id, duration_ms, "Attempt rejected");
                }
                self.attempt = AttemptState::Idle;
            }
            AttemptState::Recording { .. } => {}
        }
    }
}
