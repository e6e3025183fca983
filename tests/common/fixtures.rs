//! Test doubles and constants.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::Sender;

use padmosaic::error::PadError;
use padmosaic::models::{ClipRef, DeviceInfo};
use padmosaic::services::{AudioPlayer, DeviceSource, FileDialog, FileKind, PickedFile};

/// Raw MIDI messages
pub mod midi {
    /// Note-on for `note` on channel 1 at velocity 100
    pub fn note_on(note: u8) -> Vec<u8> {
        vec![0x90, note, 0x64]
    }

    /// Note-on with velocity 0, which devices send as note-off
    pub fn silent_note_on(note: u8) -> Vec<u8> {
        vec![0x90, note, 0x00]
    }

    pub fn note_off(note: u8) -> Vec<u8> {
        vec![0x80, note, 0x40]
    }

    /// Control change, e.g. a knob turn
    pub fn control_change(controller: u8, value: u8) -> Vec<u8> {
        vec![0xB0, controller, value]
    }
}

/// Device ids used by [`MemoryDevices::launchpad_and_keys`]
pub mod devices {
    pub const LAUNCHPAD: &str = "launchpad-mini";
    pub const KEYS: &str = "keystation-49";
}

/// Device source holding a fixed list of devices, each with a scripted
/// list of messages it sends when watched.
#[derive(Default)]
pub struct MemoryDevices {
    devices: Vec<DeviceInfo>,
    scripts: Mutex<HashMap<String, Vec<Vec<u8>>>>,
}

impl MemoryDevices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, id: &str, name: &str, messages: Vec<Vec<u8>>) -> Self {
        self.devices.push(DeviceInfo::new(id, name));
        self.scripts
            .get_mut()
            .unwrap()
            .insert(id.to_string(), messages);
        self
    }

    /// Two silent devices
    pub fn launchpad_and_keys() -> Self {
        Self::new()
            .with_device(devices::LAUNCHPAD, "Launchpad Mini", Vec::new())
            .with_device(devices::KEYS, "Keystation 49", Vec::new())
    }
}

#[async_trait]
impl DeviceSource for MemoryDevices {
    fn list(&self) -> Vec<DeviceInfo> {
        self.devices.clone()
    }

    async fn watch(&self, id: &str, sender: Sender<Vec<u8>>) -> Result<(), PadError> {
        let messages = self
            .scripts
            .lock()
            .unwrap()
            .remove(id)
            .ok_or_else(|| PadError::UnknownDevice(id.to_string()))?;
        for message in messages {
            if sender.send(message).await.is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Dialog answering `open` from a queue and recording every `save`.
///
/// Clones share state, so a test keeps one handle while the session owns
/// the other. An empty queue answers as a cancelled dialog.
#[derive(Clone, Default)]
pub struct ScriptedDialog {
    answers: Arc<Mutex<VecDeque<Option<PickedFile>>>>,
    opened: Arc<Mutex<Vec<FileKind>>>,
    saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a file to be picked
    pub fn pick(&self, name: &str, bytes: &[u8]) -> &Self {
        self.answers.lock().unwrap().push_back(Some(PickedFile {
            name: name.to_string(),
            bytes: bytes.to_vec(),
        }));
        self
    }

    /// Queue a cancelled dialog
    pub fn cancel(&self) -> &Self {
        self.answers.lock().unwrap().push_back(None);
        self
    }

    pub fn opened(&self) -> Vec<FileKind> {
        self.opened.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }

    /// Contents of the most recent save
    pub fn last_saved(&self) -> Option<(String, Vec<u8>)> {
        self.saved.lock().unwrap().last().cloned()
    }
}

impl FileDialog for ScriptedDialog {
    fn open(&mut self, kind: FileKind) -> Result<Option<PickedFile>, PadError> {
        self.opened.lock().unwrap().push(kind);
        Ok(self.answers.lock().unwrap().pop_front().flatten())
    }

    fn save(&mut self, suggested_name: &str, bytes: &[u8]) -> Result<(), PadError> {
        self.saved
            .lock()
            .unwrap()
            .push((suggested_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Player recording which pads played which clips
#[derive(Clone, Default)]
pub struct RecordingPlayer {
    played: Arc<Mutex<Vec<(u8, ClipRef)>>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pads(&self) -> Vec<u8> {
        self.played.lock().unwrap().iter().map(|(pad, _)| *pad).collect()
    }

    pub fn played(&self) -> Vec<(u8, ClipRef)> {
        self.played.lock().unwrap().clone()
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&mut self, pad: u8, clip: &ClipRef) -> Result<(), PadError> {
        self.played.lock().unwrap().push((pad, clip.clone()));
        Ok(())
    }
}

/// Write a solid-color PNG
pub fn write_solid_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save(path)
        .unwrap();
}

/// Write a deterministic gradient PNG
pub fn write_gradient_png(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
        ])
    })
    .save(path)
    .unwrap();
}
