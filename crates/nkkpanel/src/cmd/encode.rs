use bytes::BytesMut;
use nkkpanel_codec::{encode_command, Button, Command, MemorySlot};

use crate::cmd::{EncodeArgs, EncodeCommand, SlotArg};
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let command = build_command(args.command)?;

    let mut buf = BytesMut::new();
    encode_command(&command, &mut buf).map_err(|err| codec_error("encode failed", err))?;

    print_encoded(&command, &buf, format);
    Ok(SUCCESS)
}

fn build_command(command: EncodeCommand) -> CliResult<Command> {
    Ok(match command {
        EncodeCommand::Reset => Command::Reset,
        EncodeCommand::Ready => Command::RequestReady,
        EncodeCommand::Select { button, slot } => Command::SelectImage {
            button: parse_button(button)?,
            slot: match slot {
                SlotArg::One => MemorySlot::Slot1,
                SlotArg::Two => MemorySlot::Slot2,
                SlotArg::Empty => MemorySlot::SlotEmpty,
            },
        },
        EncodeCommand::Text { button, text } => Command::PrintText {
            text,
            button: parse_button(button)?,
        },
        EncodeCommand::Next { button } => Command::NextImage {
            button: parse_button(button)?,
        },
        EncodeCommand::Previous { button } => Command::PreviousImage {
            button: parse_button(button)?,
        },
    })
}

fn parse_button(number: u8) -> CliResult<Button> {
    Button::try_from(number).map_err(|err| codec_error("invalid --button", err))
}
