//! Device session for NKK switch panels.
//!
//! A [`DeviceSession`] owns the transport and the panel bookkeeping. It waits
//! for the controller to report ready, resets it, puts both switches into
//! their initial images, prints the greeting, then turns press events into
//! image changes and [`Notification`]s.

pub mod delay;
pub mod error;
pub mod handshake;
pub mod notify;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;

pub use delay::{Delay, ThreadDelay};
pub use error::{Result, SessionError};
pub use handshake::{wait_for_ready, ReadyPolicy};
pub use notify::Notification;
pub use session::{DeviceSession, SessionConfig, SessionPhase, DEFAULT_GREETING, RESET_SETTLE};
pub use state::PanelState;
