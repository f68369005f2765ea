//! In-process fan-out of raw input events to registered listeners.
//!
//! Listeners register with [`EventHub::listen`] and receive every published
//! event on their own bounded channel. A listener that drops its receiver is
//! pruned on the next publish, so explicit [`EventHub::unlisten`] is optional.

use std::fmt;

use shortcut_recorder_core::RawInputEvent;
use tokio::sync::mpsc;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

/// Identifies one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registry of live raw-event listeners.
pub struct EventHub {
    listeners: Vec<(ListenerId, mpsc::Sender<RawInputEvent>)>,
    capacity: usize,
}

impl EventHub {
    /// Hub whose listener channels buffer up to `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            listeners: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Register a new listener.
    #[instrument(skip(self))]
    pub fn listen(&mut self) -> (ListenerId, mpsc::Receiver<RawInputEvent>) {
        let id = ListenerId(Uuid::new_v4());
        let (tx, rx) = mpsc::channel(self.capacity);
        self.listeners.push((id, tx));

        debug!(listener_id = %id, listeners = self.listeners.len(), "Listener registered");

        (id, rx)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    #[instrument(skip(self))]
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;

        if removed {
            debug!(listener_id = %id, listeners = self.listeners.len(), "Listener removed");
        }

        removed
    }

    /// Number of registered listeners, including any not yet pruned.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to every live listener and return how many received it.
    ///
    /// Waits for channel capacity, so a slow listener applies backpressure
    /// rather than losing events. Listeners whose receiver is gone are dropped.
    pub async fn publish(&mut self, event: RawInputEvent) -> usize {
        let mut delivered = 0;
        let mut closed = Vec::new();

        for (id, tx) in &self.listeners {
            if tx.is_closed() || tx.send(event).await.is_err() {
                closed.push(*id);
            } else {
                delivered += 1;
            }
        }

        if !closed.is_empty() {
            self.listeners.retain(|(id, _)| !closed.contains(id));
            debug!(
                pruned = closed.len(),
                listeners = self.listeners.len(),
                "Pruned closed listeners"
            );
        }

        trace!(kind = ?event.kind, code = event.code, delivered, "Event published");

        delivered
    }
}
