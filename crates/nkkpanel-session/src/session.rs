use std::convert::Infallible;
use std::time::Duration;

use bytes::BytesMut;
use nkkpanel_codec::{decode_event, encode_command, Button, Command, Event, MemorySlot};
use nkkpanel_transport::PanelTransport;
use tracing::{debug, info, trace};

use crate::delay::{Delay, ThreadDelay};
use crate::error::Result;
use crate::handshake::{wait_for_ready, ReadyPolicy};
use crate::notify::Notification;
use crate::state::PanelState;

/// Time the controller needs to reboot after a reset. No ack is sent.
pub const RESET_SETTLE: Duration = Duration::from_millis(500);

/// Text printed once the panel is initialized.
pub const DEFAULT_GREETING: &str = "Select";

const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Configuration for a [`DeviceSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Ready handshake retry policy.
    pub ready: ReadyPolicy,
    /// Wait after `Reset` before issuing further commands.
    pub reset_settle: Duration,
    /// Text printed when the session enters the ready phase.
    pub greeting: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ready: ReadyPolicy::default(),
            reset_settle: RESET_SETTLE,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingReady,
    Initializing,
    Ready,
    EventLoop,
}

/// A single panel, driven over an exclusively owned transport.
pub struct DeviceSession<T, D = ThreadDelay> {
    transport: T,
    delay: D,
    config: SessionConfig,
    state: PanelState,
    phase: SessionPhase,
    buf: BytesMut,
}

impl<T: PanelTransport> DeviceSession<T, ThreadDelay> {
    /// Create a session with default configuration and real sleeps.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default(), ThreadDelay)
    }
}

impl<T: PanelTransport, D: Delay> DeviceSession<T, D> {
    /// Create a session with explicit configuration and delay source.
    pub fn with_config(transport: T, config: SessionConfig, delay: D) -> Self {
        Self {
            transport,
            delay,
            config,
            state: PanelState::default(),
            phase: SessionPhase::AwaitingReady,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current panel bookkeeping.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Configuration the session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the session and return the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Encode and write one command.
    pub fn send(&mut self, command: &Command) -> Result<()> {
        self.buf.clear();
        encode_command(command, &mut self.buf)?;
        debug!(command = command.name(), bytes = %hex::encode_upper(&self.buf), "writing command");
        self.transport.write_all(&self.buf)?;
        Ok(())
    }

    /// Handshake, initialize and print the greeting.
    ///
    /// Leaves the session in [`SessionPhase::EventLoop`].
    pub fn start(&mut self) -> Result<()> {
        self.phase = SessionPhase::AwaitingReady;
        let attempts = wait_for_ready(&mut self.transport, &mut self.delay, &self.config.ready)?;
        debug!(attempts, "ready handshake complete");

        self.initialize()?;
        self.phase = SessionPhase::Ready;
        info!("device ready");

        let greeting = self.config.greeting.clone();
        self.print_text(&greeting, Button::One)?;
        self.phase = SessionPhase::EventLoop;
        Ok(())
    }

    /// Reset the controller and put both switches into their start images:
    /// switch 2 on image 1, switch 1 blank.
    pub fn initialize(&mut self) -> Result<()> {
        self.phase = SessionPhase::Initializing;
        self.reset()?;
        self.set_image(Button::Two, 1)?;
        self.set_image(Button::One, 3)?;
        Ok(())
    }

    /// Send `Reset` and block for the settle time.
    pub fn reset(&mut self) -> Result<()> {
        self.send(&Command::Reset)?;
        let settle = self.config.reset_settle;
        if !settle.is_zero() {
            trace!(?settle, "waiting for panel reboot");
            self.delay.sleep(settle);
        }
        Ok(())
    }

    /// Show image `index` (1, 2, or 3 = blank on switch 1) on `button` and
    /// record it.
    pub fn set_image(&mut self, button: Button, index: u8) -> Result<()> {
        let slot = MemorySlot::for_image(button, index)?;
        self.send(&Command::SelectImage { button, slot })?;
        self.state.set(button, index)?;
        Ok(())
    }

    /// Advance switch 2 to its next image, wrapping 2 → 1.
    pub fn increment_switch2(&mut self) -> Result<()> {
        let next = self.state.next_switch2_index();
        self.set_image(Button::Two, next)
    }

    /// Draw `text` on the panel.
    ///
    /// The controller has one text target, so `button` is informational.
    pub fn print_text(&mut self, text: &str, button: Button) -> Result<()> {
        let command = Command::PrintText {
            text: text.to_string(),
            button,
        };
        info!(text, %button, "writing text to panel");
        self.send(&command)
    }

    /// Apply one decoded event to the panel.
    pub fn handle_event(&mut self, event: Event) -> Result<Option<Notification>> {
        match event {
            Event::Press(Button::One) => {
                let notification = Notification::for_press(&self.state);
                debug!(kind = notification.kind(), "switch 1 pressed");
                Ok(Some(notification))
            }
            Event::Press(Button::Two) => {
                self.increment_switch2()?;
                debug!(
                    image = self.state.image_index(Button::Two),
                    "switch 2 pressed"
                );
                Ok(None)
            }
            Event::Release(button) => {
                trace!(%button, "release ignored");
                Ok(None)
            }
            Event::Unknown(byte) => {
                trace!(byte = format_args!("{byte:#04x}"), "unknown event ignored");
                Ok(None)
            }
        }
    }

    /// Block for one event byte, decode it and dispatch it.
    pub fn next_event(&mut self) -> Result<Option<Notification>> {
        let byte = self.transport.read_byte()?;
        self.handle_event(decode_event(byte))
    }

    /// Start the session if needed, then dispatch events until a fatal
    /// error. Each notification is handed to `on_notify`.
    pub fn run<F>(&mut self, mut on_notify: F) -> Result<Infallible>
    where
        F: FnMut(Notification),
    {
        if self.phase != SessionPhase::EventLoop {
            self.start()?;
        }
        loop {
            if let Some(notification) = self.next_event()? {
                on_notify(notification);
            }
        }
    }
}

impl<T, D> std::fmt::Debug for DeviceSession<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSession")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("config", &self.config)
            .finish()
    }
}
