use std::io::{ErrorKind, Read, Write};

use tracing::trace;

use crate::error::{Result, TransportError};

/// A blocking byte link to a switch panel.
///
/// Writes must reach the device in the order they are issued; any serial
/// byte stream satisfies this.
pub trait PanelTransport {
    /// Write every byte of `bytes` (blocking).
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Block until a single byte is available and return it.
    fn read_byte(&mut self) -> Result<u8>;

    /// Whether the link is still usable.
    fn is_open(&self) -> bool;
}

impl<T: PanelTransport + ?Sized> PanelTransport for &mut T {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

impl<T: PanelTransport + ?Sized> PanelTransport for Box<T> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// Adapts any `Read + Write` stream into a [`PanelTransport`].
///
/// The transport reports itself closed once the stream signals EOF.
#[derive(Debug)]
pub struct StreamTransport<S> {
    inner: S,
    closed: bool,
}

impl<S: Read + Write> StreamTransport<S> {
    /// Wrap a connected stream.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consume the transport and return the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read + Write> PanelTransport for StreamTransport<S> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        write_all_to(&mut self.inner, bytes).inspect_err(|err| {
            if matches!(err, TransportError::Closed) {
                self.closed = true;
            }
        })
    }

    fn read_byte(&mut self) -> Result<u8> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        read_byte_from(&mut self.inner, false).inspect_err(|err| {
            if matches!(err, TransportError::Closed) {
                self.closed = true;
            }
        })
    }

    fn is_open(&self) -> bool {
        !self.closed
    }
}

/// Write a complete buffer and flush, retrying on transient errors.
pub(crate) fn write_all_to<W: Write + ?Sized>(inner: &mut W, bytes: &[u8]) -> Result<()> {
    let mut offset = 0usize;
    while offset < bytes.len() {
        match inner.write(&bytes[offset..]) {
            Ok(0) => return Err(TransportError::Closed),
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
            Err(err) => return Err(TransportError::Io(err)),
        }
    }

    loop {
        match inner.flush() {
            Ok(()) => return Ok(()),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
            Err(err) => return Err(TransportError::Io(err)),
        }
    }
}

/// Read exactly one byte.
///
/// When `wait_through_timeouts` is set, read timeouts are treated as "nothing
/// yet" and the call keeps blocking. Serial drivers need a finite timeout even
/// when the caller wants to wait forever.
pub(crate) fn read_byte_from<R: Read + ?Sized>(
    inner: &mut R,
    wait_through_timeouts: bool,
) -> Result<u8> {
    let mut byte = [0u8; 1];
    loop {
        match inner.read(&mut byte) {
            Ok(0) => return Err(TransportError::Closed),
            Ok(_) => {
                trace!(byte = format_args!("{:#04x}", byte[0]), "byte received");
                return Ok(byte[0]);
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if wait_through_timeouts && err.kind() == ErrorKind::TimedOut => continue,
            Err(err) => return Err(TransportError::Io(err)),
        }
    }
}
