use std::fmt;

use bytes::BytesMut;

use crate::error::{CodecError, Result};

/// Opcode: reboot the switch controller.
pub const OP_RESET: [u8; 1] = [0x24];
/// Opcode: ask the controller to answer with the ready marker.
pub const OP_REQUEST_READY: [u8; 1] = [0x01];
/// Opcode: select a stored image on switch 1.
pub const OP_SELECT_IMAGE_1: [u8; 2] = [0x2E, 0x31];
/// Opcode: select a stored image on switch 2.
pub const OP_SELECT_IMAGE_2: [u8; 2] = [0x2E, 0x32];
/// Opcode: step switch 1 to its next stored image.
pub const OP_NEXT_IMAGE_1: [u8; 2] = [0x2E, 0x33];
/// Opcode: step switch 2 to its next stored image.
pub const OP_NEXT_IMAGE_2: [u8; 2] = [0x2E, 0x34];
/// Opcode: step switch 1 to its previous stored image.
pub const OP_PREVIOUS_IMAGE_1: [u8; 2] = [0x2E, 0x35];
/// Opcode: step switch 2 to its previous stored image.
pub const OP_PREVIOUS_IMAGE_2: [u8; 2] = [0x2E, 0x36];
/// Opcode: draw text. The controller has a single text target.
pub const OP_ADD_TEXT: [u8; 2] = [0x27, 0x51];

/// One of the panel's two pushbuttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    One,
    Two,
}

impl Button {
    /// The button's 1-based number as printed on the panel.
    pub fn number(self) -> u8 {
        match self {
            Button::One => 1,
            Button::Two => 2,
        }
    }

    pub(crate) fn select_opcode(self) -> [u8; 2] {
        match self {
            Button::One => OP_SELECT_IMAGE_1,
            Button::Two => OP_SELECT_IMAGE_2,
        }
    }

    pub(crate) fn next_opcode(self) -> [u8; 2] {
        match self {
            Button::One => OP_NEXT_IMAGE_1,
            Button::Two => OP_NEXT_IMAGE_2,
        }
    }

    pub(crate) fn previous_opcode(self) -> [u8; 2] {
        match self {
            Button::One => OP_PREVIOUS_IMAGE_1,
            Button::Two => OP_PREVIOUS_IMAGE_2,
        }
    }
}

impl TryFrom<u8> for Button {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Button::One),
            2 => Ok(Button::Two),
            other => Err(CodecError::InvalidButton(other)),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Image storage slot on the controller.
///
/// Switch 1 has a third, unused slot; selecting it blanks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemorySlot {
    Slot1,
    Slot2,
    SlotEmpty,
}

impl MemorySlot {
    /// The 4-byte memory location id sent after a select-image opcode.
    pub fn wire_id(self) -> [u8; 4] {
        match self {
            MemorySlot::Slot1 => *b"0001",
            MemorySlot::Slot2 => *b"0002",
            MemorySlot::SlotEmpty => *b"0003",
        }
    }

    /// 1-based image index this slot represents.
    pub fn image_index(self) -> u8 {
        match self {
            MemorySlot::Slot1 => 1,
            MemorySlot::Slot2 => 2,
            MemorySlot::SlotEmpty => 3,
        }
    }

    /// Map an image index to the slot holding it on `button`.
    ///
    /// Index 3 (blank) exists on switch 1 only.
    pub fn for_image(button: Button, index: u8) -> Result<Self> {
        let slot = match index {
            1 => MemorySlot::Slot1,
            2 => MemorySlot::Slot2,
            3 => MemorySlot::SlotEmpty,
            _ => return Err(CodecError::InvalidImageIndex { button, index }),
        };
        if !slot.selectable_on(button) {
            return Err(CodecError::InvalidImageIndex { button, index });
        }
        Ok(slot)
    }

    /// Whether this slot may be selected on `button`.
    pub fn selectable_on(self, button: Button) -> bool {
        !(button == Button::Two && self == MemorySlot::SlotEmpty)
    }
}

/// A logical panel command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reboot the controller. No acknowledgement follows.
    Reset,
    /// Ask the controller to reply with the ready marker.
    RequestReady,
    /// Show the image stored in `slot` on `button`.
    SelectImage { button: Button, slot: MemorySlot },
    /// Draw `text` at the fixed origin.
    PrintText { text: String, button: Button },
    /// Step `button` to the next stored image on the controller side.
    NextImage { button: Button },
    /// Step `button` to the previous stored image on the controller side.
    PreviousImage { button: Button },
}

impl Command {
    /// Short lowercase name used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Reset => "reset",
            Command::RequestReady => "request_ready",
            Command::SelectImage { .. } => "select_image",
            Command::PrintText { .. } => "print_text",
            Command::NextImage { .. } => "next_image",
            Command::PreviousImage { .. } => "previous_image",
        }
    }

    /// Append this command's wire bytes to `dst`. See [`crate::encode_command`].
    pub fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        crate::codec::encode_command(self, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_from_number() {
        assert_eq!(Button::try_from(1), Ok(Button::One));
        assert_eq!(Button::try_from(2), Ok(Button::Two));
        assert_eq!(Button::try_from(0), Err(CodecError::InvalidButton(0)));
        assert_eq!(Button::try_from(3), Err(CodecError::InvalidButton(3)));
    }

    #[test]
    fn slot_wire_ids_are_ascii_digits() {
        assert_eq!(MemorySlot::Slot1.wire_id(), [0x30, 0x30, 0x30, 0x31]);
        assert_eq!(MemorySlot::Slot2.wire_id(), [0x30, 0x30, 0x30, 0x32]);
        assert_eq!(MemorySlot::SlotEmpty.wire_id(), [0x30, 0x30, 0x30, 0x33]);
    }

    #[test]
    fn image_index_maps_to_slot() {
        assert_eq!(MemorySlot::for_image(Button::One, 1), Ok(MemorySlot::Slot1));
        assert_eq!(MemorySlot::for_image(Button::One, 2), Ok(MemorySlot::Slot2));
        assert_eq!(
            MemorySlot::for_image(Button::One, 3),
            Ok(MemorySlot::SlotEmpty)
        );
        assert_eq!(MemorySlot::for_image(Button::Two, 2), Ok(MemorySlot::Slot2));
    }

    #[test]
    fn blank_image_only_on_switch_one() {
        assert_eq!(
            MemorySlot::for_image(Button::Two, 3),
            Err(CodecError::InvalidImageIndex {
                button: Button::Two,
                index: 3
            })
        );
        assert!(matches!(
            MemorySlot::for_image(Button::One, 0),
            Err(CodecError::InvalidImageIndex { index: 0, .. })
        ));
    }

    #[test]
    fn command_encode_appends() {
        let mut buf = BytesMut::new();
        Command::Reset.encode(&mut buf).unwrap();
        Command::SelectImage {
            button: Button::One,
            slot: MemorySlot::Slot2,
        }
        .encode(&mut buf)
        .unwrap();
        assert_eq!(buf.as_ref(), b"\x24\x2E10002");
    }

    #[test]
    fn slot_index_roundtrip() {
        for slot in [MemorySlot::Slot1, MemorySlot::Slot2, MemorySlot::SlotEmpty] {
            assert_eq!(
                MemorySlot::for_image(Button::One, slot.image_index()),
                Ok(slot)
            );
        }
    }
}
