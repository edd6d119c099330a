use std::time::Duration;

use serialport::SerialPort;
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::traits::{read_byte_from, write_all_to, PanelTransport};

/// Line rate of the NKK switch controller. The device does not negotiate.
pub const BAUD_RATE: u32 = 115_200;

/// Default per-read driver timeout. Reads keep waiting past it.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(250);

/// Configuration for opening a serial panel link.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Device path (e.g. `/dev/ttyUSB0`, `COM6`).
    pub path: String,
    /// Driver-level read timeout. Blocking reads retry through it.
    pub read_timeout: Duration,
}

impl SerialConfig {
    /// Configuration for `path` with the default read timeout.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// A switch panel attached to a serial port at [`BAUD_RATE`], 8N1.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    path: String,
    closed: bool,
}

impl SerialTransport {
    /// Open the port described by `config`.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(config.path.as_str(), BAUD_RATE)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| TransportError::Open {
                path: config.path.clone(),
                source,
            })?;

        info!(path = %config.path, baud = BAUD_RATE, "serial port opened");

        Ok(Self {
            port,
            path: config.path.clone(),
            closed: false,
        })
    }

    /// Device path this transport was opened on.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl PanelTransport for SerialTransport {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        let result = write_all_to(&mut self.port, bytes);
        if matches!(result, Err(TransportError::Closed)) {
            debug!(path = %self.path, "serial write returned zero bytes");
            self.closed = true;
        }
        result
    }

    fn read_byte(&mut self) -> Result<u8> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        let result = read_byte_from(&mut self.port, true);
        if matches!(result, Err(TransportError::Closed)) {
            debug!(path = %self.path, "serial read hit EOF");
            self.closed = true;
        }
        result
    }

    fn is_open(&self) -> bool {
        !self.closed
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("path", &self.path)
            .field("closed", &self.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_config_defaults() {
        let config = SerialConfig::new("/dev/ttyUSB0");
        assert_eq!(config.path, "/dev/ttyUSB0");
        assert_eq!(config.read_timeout, DEFAULT_READ_TIMEOUT);
    }

    #[test]
    fn open_missing_device_reports_path() {
        let config = SerialConfig::new("/dev/nkkpanel-does-not-exist");
        let err = SerialTransport::open(&config).unwrap_err();
        assert!(err.to_string().contains("/dev/nkkpanel-does-not-exist"));
    }
}
