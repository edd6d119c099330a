use std::time::Duration;

use nkkpanel_codec::{encode_request_ready, READY_MARKER};
use nkkpanel_transport::PanelTransport;
use tracing::debug;

use crate::delay::Delay;
use crate::error::{Result, SessionError};

/// How persistently to ask the controller whether it is ready.
///
/// The default asks forever with no pause between attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyPolicy {
    /// Give up after this many requests. `None` retries forever.
    pub max_attempts: Option<u32>,
    /// Pause between a non-ready reply and the next request.
    pub backoff: Duration,
}

impl ReadyPolicy {
    /// Retry forever without pausing.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop after `max_attempts` requests, pausing `backoff` between them.
    ///
    /// A bound of zero sends nothing and fails immediately.
    pub fn bounded(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff,
        }
    }
}

/// Send ready requests until the controller answers with the ready marker.
///
/// Each attempt writes one request and reads one byte. An attempt succeeds
/// only if that byte is the marker and the transport still reports open.
/// Returns the number of attempts made.
pub fn wait_for_ready<T, D>(transport: &mut T, delay: &mut D, policy: &ReadyPolicy) -> Result<u32>
where
    T: PanelTransport + ?Sized,
    D: Delay + ?Sized,
{
    let request = encode_request_ready();
    let mut attempts = 0u32;

    loop {
        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                return Err(SessionError::NotReady { attempts });
            }
        }
        if attempts > 0 && !policy.backoff.is_zero() {
            delay.sleep(policy.backoff);
        }

        attempts = attempts.saturating_add(1);
        transport.write_all(&request)?;
        let reply = transport.read_byte()?;

        if reply == READY_MARKER && transport.is_open() {
            debug!(attempts, "panel reported ready");
            return Ok(attempts);
        }

        debug!(
            attempt = attempts,
            reply = format_args!("{reply:#04x}"),
            "panel not ready"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedTransport;

    fn no_delay() -> impl FnMut(Duration) {
        |_| panic!("no delay expected")
    }

    #[test]
    fn ready_on_first_reply() {
        let mut transport = ScriptedTransport::with_replies(b"a");
        let attempts =
            wait_for_ready(&mut transport, &mut no_delay(), &ReadyPolicy::default()).unwrap();

        assert_eq!(attempts, 1);
        assert_eq!(transport.writes, vec![vec![0x01]]);
    }

    #[test]
    fn retries_until_marker_arrives() {
        let mut transport = ScriptedTransport::with_replies(&[0x00, 0x82, b'a']);
        let attempts =
            wait_for_ready(&mut transport, &mut no_delay(), &ReadyPolicy::unbounded()).unwrap();

        assert_eq!(attempts, 3);
        assert_eq!(transport.writes.len(), 3);
        assert!(transport.writes.iter().all(|w| w == &[0x01]));
    }

    #[test]
    fn marker_on_closed_transport_is_not_ready() {
        let mut transport = ScriptedTransport::with_replies(b"aa");
        transport.open = false;
        let err = wait_for_ready(
            &mut transport,
            &mut no_delay(),
            &ReadyPolicy::bounded(2, Duration::ZERO),
        )
        .unwrap_err();

        assert!(matches!(err, SessionError::NotReady { attempts: 2 }));
    }

    #[test]
    fn bounded_policy_sleeps_between_attempts() {
        let mut transport = ScriptedTransport::with_replies(&[0x00, 0x00, 0x00]);
        let mut sleeps = Vec::new();
        let err = wait_for_ready(
            &mut transport,
            &mut |d: Duration| sleeps.push(d),
            &ReadyPolicy::bounded(3, Duration::from_millis(100)),
        )
        .unwrap_err();

        assert!(matches!(err, SessionError::NotReady { attempts: 3 }));
        assert_eq!(sleeps, vec![Duration::from_millis(100); 2]);
    }

    #[test]
    fn zero_attempt_bound_sends_nothing() {
        let mut transport = ScriptedTransport::with_replies(&[0x00]);
        let err = wait_for_ready(
            &mut transport,
            &mut no_delay(),
            &ReadyPolicy::bounded(0, Duration::from_millis(100)),
        )
        .unwrap_err();

        assert!(matches!(err, SessionError::NotReady { attempts: 0 }));
        assert!(transport.writes.is_empty());
    }

    #[test]
    fn single_attempt_bound_never_sleeps() {
        let mut transport = ScriptedTransport::with_replies(&[0x00]);
        let err = wait_for_ready(
            &mut transport,
            &mut no_delay(),
            &ReadyPolicy::bounded(1, Duration::from_millis(100)),
        )
        .unwrap_err();

        assert!(matches!(err, SessionError::NotReady { attempts: 1 }));
        assert_eq!(transport.writes, vec![vec![0x01]]);
    }

    #[test]
    fn transport_failure_is_fatal() {
        let mut transport = ScriptedTransport::with_replies(&[]);
        let err =
            wait_for_ready(&mut transport, &mut no_delay(), &ReadyPolicy::default()).unwrap_err();

        assert!(matches!(err, SessionError::Transport(_)));
    }
}
