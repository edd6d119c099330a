use std::io::{IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use nkkpanel_codec::Command;
use nkkpanel_session::Notification;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct NotificationOutput<'a> {
    kind: &'a str,
    message: String,
    timestamp: String,
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    command: &'a str,
    length: usize,
    hex: String,
}

pub fn print_notification(notification: Notification, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = NotificationOutput {
                kind: notification.kind(),
                message: notification.to_string(),
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "MESSAGE"])
                .add_row(vec![
                    notification.kind().to_string(),
                    notification.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            println!("{notification}");
        }
    }
}

pub fn print_encoded(command: &Command, bytes: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                command: command.name(),
                length: bytes.len(),
                hex: hex::encode_upper(bytes),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OFFSET", "HEX", "ASCII"]);
            for (offset, byte) in bytes.iter().enumerate() {
                table.add_row(vec![
                    offset.to_string(),
                    format!("{byte:02X}"),
                    ascii_preview(*byte),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} ({} bytes): {}", command.name(), bytes.len(), hex::encode_upper(bytes));
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout();
            let _ = out.write_all(bytes);
            let _ = out.flush();
        }
    }
}

fn ascii_preview(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        char::from(byte).to_string()
    } else {
        ".".to_string()
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
