use crate::command::{Button, MemorySlot};

/// Errors raised while building panel commands.
///
/// All of these are detected before any byte reaches the transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Button number outside the panel's two switches.
    #[error("invalid button {0} (expected 1 or 2)")]
    InvalidButton(u8),

    /// The slot cannot be shown on this button.
    #[error("{slot:?} is not selectable on button {button}")]
    UnsupportedSlotForButton { button: Button, slot: MemorySlot },

    /// Image index outside the range stored for the button.
    #[error("invalid image index {index} for button {button}")]
    InvalidImageIndex { button: Button, index: u8 },

    /// Text longer than the two-digit length field can express.
    #[error("text too long ({len} characters, max {max})")]
    TextTooLong { len: usize, max: usize },

    /// Text contains a character outside 7-bit ASCII.
    #[error("unsupported character {0:?} (only ASCII is supported)")]
    UnsupportedCharacter(char),
}

pub type Result<T> = std::result::Result<T, CodecError>;
