/// Errors that can occur while driving a panel session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Transport-level error. Always fatal for the session.
    #[error("transport error: {0}")]
    Transport(#[from] nkkpanel_transport::TransportError),

    /// A command could not be encoded.
    #[error("codec error: {0}")]
    Codec(#[from] nkkpanel_codec::CodecError),

    /// The controller never answered a ready request within the policy.
    #[error("panel not ready after {attempts} attempts")]
    NotReady { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, SessionError>;
