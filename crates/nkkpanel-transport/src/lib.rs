//! Byte-stream transport abstraction for NKK switch panels.
//!
//! The panel speaks a byte-oriented protocol over a serial line. Everything
//! above this crate only needs three things from the link: write a run of
//! bytes, block until one byte arrives, and ask whether the link is still
//! open. [`PanelTransport`] captures exactly that.
//!
//! - [`StreamTransport`] adapts any `Read + Write` stream.
//! - [`SerialTransport`] opens a physical port (behind the `serial` feature).

pub mod error;
pub mod traits;

#[cfg(feature = "serial")]
pub mod serial;

pub use error::{Result, TransportError};
pub use traits::{PanelTransport, StreamTransport};

#[cfg(feature = "serial")]
pub use serial::{SerialConfig, SerialTransport, BAUD_RATE};
