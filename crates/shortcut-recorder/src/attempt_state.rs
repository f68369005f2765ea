use uuid::Uuid;

/// Whether the recorder has an attempt in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// No keys or buttons held and nothing recorded.
    Idle,
    /// An attempt is being built.
    Recording {
        /// Timestamp of the event that opened the attempt.
        started_at_ms: u64,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}
