use std::fmt;
use std::io;

use nkkpanel_codec::CodecError;
use nkkpanel_session::SessionError;
use nkkpanel_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::NotFound => TRANSPORT_ERROR,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Io(source) => io_error(context, source),
        TransportError::Closed => CliError::new(FAILURE, format!("{context}: {err}")),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err {
        CodecError::InvalidButton(_) | CodecError::InvalidImageIndex { .. } => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn session_error(context: &str, err: SessionError) -> CliError {
    match err {
        SessionError::Transport(err) => transport_error(context, err),
        SessionError::Codec(err) => codec_error(context, err),
        SessionError::NotReady { .. } => CliError::new(TIMEOUT, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_errors_split_usage_and_data() {
        assert_eq!(codec_error("x", CodecError::InvalidButton(7)).code, USAGE);
        assert_eq!(
            codec_error("x", CodecError::TextTooLong { len: 120, max: 99 }).code,
            DATA_INVALID
        );
        assert_eq!(
            codec_error("x", CodecError::UnsupportedCharacter('é')).code,
            DATA_INVALID
        );
    }

    #[test]
    fn session_errors_follow_inner_layer() {
        let closed = session_error("run", SessionError::Transport(TransportError::Closed));
        assert_eq!(closed.code, FAILURE);
        assert_eq!(closed.message, "run: transport closed");

        let denied = session_error(
            "run",
            SessionError::Transport(TransportError::Io(io::Error::from(
                io::ErrorKind::PermissionDenied,
            ))),
        );
        assert_eq!(denied.code, PERMISSION_DENIED);

        let not_ready = session_error("run", SessionError::NotReady { attempts: 5 });
        assert_eq!(not_ready.code, TIMEOUT);
    }
}
