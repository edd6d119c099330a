use bytes::{BufMut, Bytes, BytesMut};

use crate::command::{Button, Command, MemorySlot, OP_ADD_TEXT, OP_REQUEST_READY, OP_RESET};
use crate::error::{CodecError, Result};

/// Longest text the two-digit character count can describe.
pub const MAX_TEXT_LEN: usize = 99;

/// Fixed text origin row, sent as two ASCII digits.
pub const TEXT_START_ROW: u8 = 17;

/// Fixed text origin column, sent as two ASCII digits.
pub const TEXT_START_COL: u8 = 17;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Append the wire bytes of `command` to `dst`.
///
/// Validation happens before anything is appended, so `dst` is untouched on
/// error.
pub fn encode_command(command: &Command, dst: &mut BytesMut) -> Result<()> {
    match command {
        Command::Reset => dst.put_slice(&OP_RESET),
        Command::RequestReady => dst.put_slice(&OP_REQUEST_READY),
        Command::SelectImage { button, slot } => {
            if !slot.selectable_on(*button) {
                return Err(CodecError::UnsupportedSlotForButton {
                    button: *button,
                    slot: *slot,
                });
            }
            dst.reserve(6);
            dst.put_slice(&button.select_opcode());
            dst.put_slice(&slot.wire_id());
        }
        Command::PrintText { text, .. } => encode_text(text, dst)?,
        Command::NextImage { button } => dst.put_slice(&button.next_opcode()),
        Command::PreviousImage { button } => dst.put_slice(&button.previous_opcode()),
    }
    Ok(())
}

/// `24`
pub fn encode_reset() -> Bytes {
    Bytes::from_static(&OP_RESET)
}

/// `01`
pub fn encode_request_ready() -> Bytes {
    Bytes::from_static(&OP_REQUEST_READY)
}

/// Select-image opcode for `button` followed by the slot's memory id.
///
/// Switch 2 only stores two images; [`MemorySlot::SlotEmpty`] is rejected for
/// it with [`CodecError::UnsupportedSlotForButton`].
pub fn encode_select_image(button: Button, slot: MemorySlot) -> Result<Bytes> {
    encode_one(&Command::SelectImage { button, slot })
}

/// Encode an add-text command.
///
/// Wire format:
/// ```text
/// ┌───────────┬────────────┬───────────┬───────────┬─────────────────────────┐
/// │ 0x27 0x51 │ count (2)  │ row (2)   │ col (2)   │ 2 bytes per character    │
/// │           │ "06"       │ "17"      │ "17"      │ 'S' → "53" → 0x35 0x33   │
/// └───────────┴────────────┴───────────┴───────────┴─────────────────────────┘
/// ```
/// Numeric fields are zero-padded decimal digits sent as ASCII. Each
/// character is sent as the two lowercase hex digits of its ASCII code, each
/// digit itself sent as ASCII.
///
/// `button` does not change the bytes: the controller exposes a single text
/// opcode, so text always lands on the same target.
pub fn encode_print_text(text: &str, button: Button) -> Result<Bytes> {
    encode_one(&Command::PrintText {
        text: text.to_owned(),
        button,
    })
}

/// `2E33` (switch 1) or `2E34` (switch 2).
pub fn encode_next_image(button: Button) -> Bytes {
    Bytes::copy_from_slice(&button.next_opcode())
}

/// `2E35` (switch 1) or `2E36` (switch 2).
pub fn encode_previous_image(button: Button) -> Bytes {
    Bytes::copy_from_slice(&button.previous_opcode())
}

fn encode_one(command: &Command) -> Result<Bytes> {
    let mut buf = BytesMut::new();
    encode_command(command, &mut buf)?;
    Ok(buf.freeze())
}

fn encode_text(text: &str, dst: &mut BytesMut) -> Result<()> {
    let len = text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CodecError::TextTooLong {
            len,
            max: MAX_TEXT_LEN,
        });
    }
    if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
        return Err(CodecError::UnsupportedCharacter(c));
    }

    dst.reserve(OP_ADD_TEXT.len() + 6 + 2 * len);
    dst.put_slice(&OP_ADD_TEXT);
    dst.put_slice(&ascii_decimal(len as u8));
    dst.put_slice(&ascii_decimal(TEXT_START_ROW));
    dst.put_slice(&ascii_decimal(TEXT_START_COL));
    for byte in text.bytes() {
        dst.put_u8(HEX_DIGITS[usize::from(byte >> 4)]);
        dst.put_u8(HEX_DIGITS[usize::from(byte & 0x0F)]);
    }
    Ok(())
}

/// Two zero-padded decimal digits as ASCII. `value` must be < 100.
fn ascii_decimal(value: u8) -> [u8; 2] {
    debug_assert!(value < 100);
    [b'0' + value / 10, b'0' + value % 10]
}
