//! Single-byte events reported by the panel.

use crate::command::Button;

/// Reply to a ready request once the controller accepts commands (`'a'`).
pub const READY_MARKER: u8 = b'a';

/// Switch 1 pressed.
pub const EVT_PRESS_1: u8 = 0x81;
/// Switch 2 pressed.
pub const EVT_PRESS_2: u8 = 0x82;
/// Switch 1 released.
pub const EVT_RELEASE_1: u8 = 0xB1;
/// Switch 2 released.
pub const EVT_RELEASE_2: u8 = 0xB2;

/// A decoded panel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Press(Button),
    Release(Button),
    /// Any byte that is not a known event code. Line noise lands here.
    Unknown(u8),
}

/// Decode a raw event byte. Never fails.
pub fn decode_event(byte: u8) -> Event {
    match byte {
        EVT_PRESS_1 => Event::Press(Button::One),
        EVT_PRESS_2 => Event::Press(Button::Two),
        EVT_RELEASE_1 => Event::Release(Button::One),
        EVT_RELEASE_2 => Event::Release(Button::Two),
        other => Event::Unknown(other),
    }
}
