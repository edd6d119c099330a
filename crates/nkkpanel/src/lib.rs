//! Drive NKK two-switch display panels over a serial link.
//!
//! # Crate Structure
//!
//! - [`transport`] — Byte-stream transport abstraction (serial behind `serial` feature)
//! - [`codec`] — Command encoding and event decoding for the panel wire protocol
//! - [`session`] — Ready handshake, initialization and event dispatch

/// Re-export transport types.
pub mod transport {
    pub use nkkpanel_transport::*;
}

/// Re-export codec types.
pub mod codec {
    pub use nkkpanel_codec::*;
}

/// Re-export session types.
pub mod session {
    pub use nkkpanel_session::*;
}
