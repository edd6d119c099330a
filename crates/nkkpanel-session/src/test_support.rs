use std::collections::VecDeque;

use nkkpanel_transport::{PanelTransport, TransportError};

/// Transport that replays scripted replies and records every write.
///
/// Reads past the end of the script fail with [`TransportError::Closed`].
#[derive(Debug)]
pub(crate) struct ScriptedTransport {
    pub replies: VecDeque<u8>,
    pub writes: Vec<Vec<u8>>,
    pub open: bool,
}

impl ScriptedTransport {
    pub fn with_replies(replies: &[u8]) -> Self {
        Self {
            replies: replies.iter().copied().collect(),
            writes: Vec::new(),
            open: true,
        }
    }
}

impl PanelTransport for ScriptedTransport {
    fn write_all(&mut self, bytes: &[u8]) -> nkkpanel_transport::Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn read_byte(&mut self) -> nkkpanel_transport::Result<u8> {
        self.replies.pop_front().ok_or(TransportError::Closed)
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
