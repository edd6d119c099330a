use nkkpanel_session::{DeviceSession, ReadyPolicy, SessionConfig, ThreadDelay};
use nkkpanel_transport::{SerialConfig, SerialTransport};
use tracing::info;

use crate::cmd::{parse_duration, RunArgs};
use crate::exit::{session_error, transport_error, CliResult};
use crate::output::{print_notification, OutputFormat};

pub fn run(args: RunArgs, format: OutputFormat) -> CliResult<i32> {
    let config = session_config(&args)?;

    let transport = SerialTransport::open(&SerialConfig::new(args.port.as_str()))
        .map_err(|err| transport_error("open failed", err))?;
    info!(port = transport.path(), "waiting for panel");

    let mut session = DeviceSession::with_config(transport, config, ThreadDelay);
    match session.run(|notification| print_notification(notification, format)) {
        Ok(never) => match never {},
        Err(err) => Err(session_error("session ended", err)),
    }
}

fn session_config(args: &RunArgs) -> CliResult<SessionConfig> {
    let backoff = match &args.ready_backoff {
        Some(value) => parse_duration(value)?,
        None => Default::default(),
    };
    let ready = match args.ready_attempts {
        Some(attempts) => ReadyPolicy::bounded(attempts, backoff),
        None => ReadyPolicy {
            max_attempts: None,
            backoff,
        },
    };

    Ok(SessionConfig {
        ready,
        reset_settle: parse_duration(&args.settle)?,
        greeting: args.greeting.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn args() -> RunArgs {
        RunArgs {
            port: "/dev/ttyUSB0".to_string(),
            ready_attempts: None,
            ready_backoff: None,
            settle: "500ms".to_string(),
            greeting: "Select".to_string(),
        }
    }

    #[test]
    fn defaults_match_session_defaults() {
        let config = session_config(&args()).unwrap();
        let defaults = SessionConfig::default();
        assert_eq!(config.ready, defaults.ready);
        assert_eq!(config.reset_settle, defaults.reset_settle);
        assert_eq!(config.greeting, defaults.greeting);
    }

    #[test]
    fn bounded_ready_policy_from_flags() {
        let config = session_config(&RunArgs {
            ready_attempts: Some(10),
            ready_backoff: Some("250ms".to_string()),
            ..args()
        })
        .unwrap();
        assert_eq!(
            config.ready,
            ReadyPolicy::bounded(10, Duration::from_millis(250))
        );
    }
}
