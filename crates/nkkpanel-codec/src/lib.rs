//! Wire codec for the NKK switch panel protocol.
//!
//! Commands flow host → panel as short opcode-prefixed byte runs; events flow
//! panel → host as single bytes. This crate maps between those bytes and
//! typed values. It performs no I/O.
//!
//! ```text
//! Reset          24
//! Request ready  01
//! Select image   2E31|2E32 + 3030303N
//! Add text       2751 + count + row + col + per-char hex digits
//! ```

pub mod codec;
pub mod command;
pub mod error;
pub mod event;

pub use codec::{
    encode_command, encode_next_image, encode_previous_image, encode_print_text,
    encode_request_ready, encode_reset, encode_select_image, MAX_TEXT_LEN, TEXT_START_COL,
    TEXT_START_ROW,
};
pub use command::{Button, Command, MemorySlot};
pub use error::{CodecError, Result};
pub use event::{decode_event, Event, READY_MARKER};
