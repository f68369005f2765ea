use crate::{
    CoreResult, EventKind, RawInputEvent,
    recorder::{
        KeyElement, LabelFormatter, MouseElement, RecorderConfig, RecorderState,
        SequenceElement, ShortcutDescriptor, ShortcutKind, ShortcutStatus, classify,
        is_long_press,
    },
};

use tracing::{debug, info, instrument, trace};

/// Receives descriptors produced by a [`ShortcutRecorder`].
///
/// Implemented for every `FnMut(ShortcutDescriptor)`, so a closure is usually
/// enough.
pub trait ShortcutListener {
    /// Called with an `Updated` descriptor after every event, and with a
    /// `Finished` descriptor once per accepted attempt.
    fn on_shortcut(&mut self, descriptor: ShortcutDescriptor);
}

impl<F> ShortcutListener for F
where
    F: FnMut(ShortcutDescriptor),
{
    fn on_shortcut(&mut self, descriptor: ShortcutDescriptor) {
        self(descriptor)
    }
}

/// Stateful shortcut recognition engine.
///
/// Feed it raw press/release events in arrival order with
/// [`handle_event`](Self::handle_event). Every event yields an `Updated`
/// preview; when the last held key or button is released the recorded
/// sequence is validated, a `Finished` descriptor is emitted if it forms an
/// accepted shortcut, and the attempt is reset either way.
///
/// # Thread Safety
///
/// Single-threaded by design: the engine owns its state and expects events to
/// arrive serialized. Hosts that receive events on several threads must funnel
/// them through one owner.
pub struct ShortcutRecorder<L> {
    config: RecorderConfig,
    formatter: LabelFormatter,
    state: RecorderState,
    listener: L,
}

impl<L: ShortcutListener> ShortcutRecorder<L> {
    /// Create an engine with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a threshold is zero or the separator is empty.
    #[track_caller]
    #[instrument(skip(listener))]
    pub fn new(config: RecorderConfig, listener: L) -> CoreResult<Self> {
        config.validate()?;

        let formatter = LabelFormatter::new(config.separator.clone());

        debug!(
            long_press_threshold_ms = config.long_press_threshold_ms,
            double_press_threshold_ms = config.double_press_threshold_ms,
            "ShortcutRecorder initialized"
        );

        Ok(Self {
            config,
            formatter,
            state: RecorderState::default(),
            listener,
        })
    }

    /// Route one raw event to its handler, then emit an `Updated` preview.
    ///
    /// Unsupported event kinds leave the state untouched but still produce a
    /// preview.
    #[instrument(level = "debug", skip(self, event), fields(kind = ?event.kind, code = event.code, timestamp = event.timestamp))]
    pub fn handle_event(&mut self, event: &RawInputEvent) {
        match event.kind {
            EventKind::KeyDown => self.on_key_down(event),
            EventKind::KeyUp => self.on_key_up(event),
            EventKind::MouseDown => self.on_mouse_down(event),
            EventKind::MouseUp => self.on_mouse_up(event),
            EventKind::Unsupported(code) => {
                trace!(event_type = code, "Ignoring unsupported event kind");
            }
        }

        let preview = self.describe(ShortcutStatus::Updated, None);
        self.listener.on_shortcut(preview);
    }

    /// The current preview, without feeding an event.
    pub fn preview(&self) -> ShortcutDescriptor {
        self.describe(ShortcutStatus::Updated, None)
    }

    /// Something is held, or elements have been recorded since the last reset.
    pub fn has_open_attempt(&self) -> bool {
        !self.state.all_released() || !self.state.sequence.is_empty()
    }

    /// Discard the current attempt without validating it.
    ///
    /// Double-press history is kept, as on any other reset.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if self.has_open_attempt() {
            info!(
                elements = self.state.sequence.len(),
                label = %self.formatter.format(&self.state.sequence),
                "Attempt cancelled"
            );
        }
        self.state.reset_attempt();
    }

    /// Read-only view of the tracked state.
    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    fn on_key_down(&mut self, event: &RawInputEvent) {
        if !self.state.active_keys.insert(event.code) {
            trace!(code = event.code, "Key repeat suppressed");
            return;
        }

        self.state
            .sequence
            .push(SequenceElement::Key(KeyElement::from_event(event)));

        let is_double = self.state.press_history.register_press(
            event.code,
            event.timestamp,
            self.config.double_press_threshold_ms,
        );

        if is_double {
            if let Some(SequenceElement::Key(key)) = self.state.sequence.last_mut() {
                key.is_double_press = true;
            }
            debug!(code = event.code, "Double-press detected");
        }
    }

    fn on_key_up(&mut self, event: &RawInputEvent) {
        self.state.active_keys.remove(&event.code);

        if self.state.all_released() {
            self.finalize();
        }
    }

    fn on_mouse_down(&mut self, event: &RawInputEvent) {
        self.state.mouse_down_at.insert(event.code, event.timestamp);
        self.state
            .sequence
            .push(SequenceElement::Mouse(MouseElement::from_event(event)));
    }

    fn on_mouse_up(&mut self, event: &RawInputEvent) {
        let button = event.code;

        match self.state.mouse_down_at.remove(&button) {
            Some(pressed_at) => {
                let long = is_long_press(
                    pressed_at,
                    event.timestamp,
                    self.config.long_press_threshold_ms,
                );

                let pending = self.state.sequence.iter_mut().rev().find_map(|element| {
                    match element {
                        SequenceElement::Mouse(mouse)
                            if mouse.button == button && !mouse.released =>
                        {
                            Some(mouse)
                        }
                        _ => None,
                    }
                });

                if let Some(mouse) = pending {
                    mouse.is_long_press = long;
                    mouse.released = true;
                }

                debug!(
                    button,
                    held_ms = event.timestamp.saturating_sub(pressed_at),
                    is_long_press = long,
                    "Mouse button released"
                );
            }
            None => {
                debug!(button, "Mouse release without recorded press");
            }
        }

        if self.state.all_released() {
            self.finalize();
        }
    }

    fn finalize(&mut self) {
        match classify(&self.state.sequence) {
            Some(kind) => {
                let finished = self.describe(ShortcutStatus::Finished, Some(kind));
                info!(label = %finished.label, kind = ?kind, "Shortcut recorded");
                self.listener.on_shortcut(finished);
            }
            None if self.state.sequence.is_empty() => {
                trace!("Release with empty sequence");
            }
            None => {
                info!(
                    label = %self.formatter.format(&self.state.sequence),
                    elements = self.state.sequence.len(),
                    "Sequence rejected"
                );
            }
        }

        self.state.reset_attempt();
    }

    fn describe(&self, status: ShortcutStatus, kind: Option<ShortcutKind>) -> ShortcutDescriptor {
        ShortcutDescriptor {
            label: self.formatter.format(&self.state.sequence),
            sequence: self.state.sequence.clone(),
            status,
            kind,
        }
    }
}
