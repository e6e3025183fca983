use async_trait::async_trait;
use std::sync::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;

use super::midi::parse_hex_line;
use crate::error::PadError;
use crate::models::DeviceInfo;

/// Source of MIDI input devices
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Devices currently available
    fn list(&self) -> Vec<DeviceInfo>;

    /// Forward raw messages from device `id` to `sender` until the device
    /// closes or the receiver is dropped.
    async fn watch(&self, id: &str, sender: Sender<Vec<u8>>) -> Result<(), PadError>;
}

type LineReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// A single pseudo-device reading hex-encoded messages, one per line.
///
/// Each line holds the bytes of one message, e.g. `90 63 7f` for a note-on
/// of note 99 at full velocity. Blank lines and `#` comments are skipped.
pub struct StdinDevice {
    info: DeviceInfo,
    reader: Mutex<Option<LineReader>>,
}

impl StdinDevice {
    pub const ID: &'static str = "stdin";

    /// Read messages from standard input
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    /// Read messages from any line-oriented reader
    pub fn from_reader(reader: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        Self {
            info: DeviceInfo::new(Self::ID, "Hex messages on standard input"),
            reader: Mutex::new(Some(Box::new(reader))),
        }
    }
}

impl Default for StdinDevice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceSource for StdinDevice {
    fn list(&self) -> Vec<DeviceInfo> {
        vec![self.info.clone()]
    }

    async fn watch(&self, id: &str, sender: Sender<Vec<u8>>) -> Result<(), PadError> {
        if id != self.info.id {
            return Err(PadError::UnknownDevice(id.to_string()));
        }
        let reader = self
            .reader
            .lock()
            .map_err(|_| PadError::Device("reader lock poisoned".to_string()))?
            .take()
            .ok_or_else(|| PadError::Device(format!("{id} is already being watched")))?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(bytes) = parse_hex_line(&line) else {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    tracing::warn!(line = trimmed, "Skipping line that is not hex bytes");
                }
                continue;
            };
            if sender.send(bytes).await.is_err() {
                tracing::debug!(device = id, "Receiver closed, stopping watch");
                break;
            }
        }
        tracing::debug!(device = id, "Device input closed");
        Ok(())
    }
}
