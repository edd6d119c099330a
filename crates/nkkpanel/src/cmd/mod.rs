use std::time::Duration;

use clap::{Args, Subcommand, ValueEnum};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod encode;
pub mod run;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to a panel and handle button presses until the link fails.
    Run(RunArgs),
    /// Print the wire bytes of a panel command.
    Encode(EncodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Run(args) => run::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Serial device path (e.g. /dev/ttyUSB0, COM6).
    #[arg(long, short = 'p', env = "NKKPANEL_PORT")]
    pub port: String,
    /// Give up after N unanswered ready requests. Default: retry forever.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub ready_attempts: Option<u32>,
    /// Pause between ready requests (e.g. 100ms, 1s). Default: none.
    #[arg(long, value_name = "DURATION")]
    pub ready_backoff: Option<String>,
    /// Wait after reset before initializing (e.g. 500ms).
    #[arg(long, default_value = "500ms")]
    pub settle: String,
    /// Text printed once the panel is ready.
    #[arg(long, default_value = nkkpanel_session::DEFAULT_GREETING)]
    pub greeting: String,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub command: EncodeCommand,
}

#[derive(Subcommand, Debug)]
pub enum EncodeCommand {
    /// Reset the controller.
    Reset,
    /// Request the ready marker.
    Ready,
    /// Select a stored image on a switch.
    Select {
        /// Switch number (1 or 2).
        #[arg(long, short = 'b')]
        button: u8,
        /// Memory slot to show.
        #[arg(long, short = 's')]
        slot: SlotArg,
    },
    /// Draw ASCII text (at most 99 characters).
    Text {
        /// Switch number (1 or 2). Does not change the bytes.
        #[arg(long, short = 'b', default_value = "1")]
        button: u8,
        /// Text to draw.
        text: String,
    },
    /// Step a switch to its next stored image.
    Next {
        #[arg(long, short = 'b')]
        button: u8,
    },
    /// Step a switch to its previous stored image.
    Previous {
        #[arg(long, short = 'b')]
        button: u8,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SlotArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    Empty,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Parse `500ms`, `2s` or a bare number of seconds. Zero is allowed.
pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .trim()
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    Ok(match unit {
        "ms" => Duration::from_millis(value),
        _ => Duration::from_secs(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("0ms").unwrap(), Duration::ZERO);
    }

    #[test]
    fn rejects_bad_durations() {
        assert_eq!(parse_duration("").unwrap_err().code, USAGE);
        assert_eq!(parse_duration("fast").unwrap_err().code, USAGE);
        assert_eq!(parse_duration("-1s").unwrap_err().code, USAGE);
    }
}
