use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinHandle;

use super::devices::DeviceSource;
use super::dialog::{FileDialog, FileKind};
use super::mapping_store::{MappingStore, MAPPINGS_FILE_NAME};
use super::midi::parse_note_on;
use super::player::AudioPlayer;
use crate::error::PadError;
use crate::models::{ClipRef, DeviceInfo, Grid};

/// Outcome of one incoming MIDI message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The pad had a clip and it was handed to the player
    Played(u8),
    /// A pad was pressed but nothing is bound to it
    Unmapped(u8),
    /// Not a pad press (other message, zero velocity, malformed)
    Ignored,
}

/// Pad mapper session.
///
/// Owns the mapping table and the collaborators. Incoming messages are
/// handled on the task that owns the session, so the table is never
/// shared.
pub struct PadSession {
    store: MappingStore,
    source: Arc<dyn DeviceSource>,
    dialog: Box<dyn FileDialog>,
    player: Box<dyn AudioPlayer>,
    devices: Vec<DeviceInfo>,
    selected: Option<DeviceInfo>,
}

impl PadSession {
    pub fn new(
        source: Arc<dyn DeviceSource>,
        dialog: Box<dyn FileDialog>,
        player: Box<dyn AudioPlayer>,
    ) -> Self {
        Self {
            store: MappingStore::new(),
            source,
            dialog,
            player,
            devices: Vec::new(),
            selected: None,
        }
    }

    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    /// Re-query the device source
    pub fn refresh_devices(&mut self) -> &[DeviceInfo] {
        self.devices = self.source.list();
        tracing::debug!(count = self.devices.len(), "Refreshed MIDI devices");
        &self.devices
    }

    /// Devices found by the last refresh
    pub fn devices(&self) -> &[DeviceInfo] {
        &self.devices
    }

    pub fn select_device(&mut self, id: &str) -> Result<&DeviceInfo, PadError> {
        let device = self
            .devices
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| PadError::UnknownDevice(id.to_string()))?;
        tracing::info!(device = %device, "Selected MIDI device");
        Ok(self.selected.insert(device))
    }

    /// Return to the device list
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn selected_device(&self) -> Option<&DeviceInfo> {
        self.selected.as_ref()
    }

    /// Ask for an audio file and bind it to `pad`.
    ///
    /// Returns `false` if the dialog was cancelled.
    pub fn click_pad(&mut self, pad: u8) -> Result<bool, PadError> {
        if !Grid::contains(pad) {
            return Err(PadError::InvalidPad(pad));
        }
        let Some(file) = self.dialog.open(FileKind::Audio)? else {
            return Ok(false);
        };
        let clip = ClipRef::from_file(&file.name, &file.bytes);
        tracing::info!(pad, file = %file.name, bytes = file.bytes.len(), "Mapped clip");
        self.store.set(pad, clip);
        Ok(true)
    }

    /// Unbind `pad`, returning its clip
    pub fn clear_pad(&mut self, pad: u8) -> Result<Option<ClipRef>, PadError> {
        if !Grid::contains(pad) {
            return Err(PadError::InvalidPad(pad));
        }
        Ok(self.store.remove(pad))
    }

    /// Write the table through the dialog as `tileMappings.json`
    pub fn save_mappings(&mut self) -> Result<(), PadError> {
        let json = self.store.save();
        self.dialog.save(MAPPINGS_FILE_NAME, json.as_bytes())
    }

    /// Ask for a mapping file and replace the table with it.
    ///
    /// Returns `false` if the dialog was cancelled. A malformed file is an
    /// error and leaves the table as it was.
    pub fn load_mappings(&mut self) -> Result<bool, PadError> {
        let Some(file) = self.dialog.open(FileKind::Mappings)? else {
            return Ok(false);
        };
        self.store.load_slice(&file.bytes)?;
        tracing::info!(file = %file.name, pads = self.store.len(), "Loaded mappings");
        Ok(true)
    }

    /// React to one raw MIDI message.
    pub fn handle_message(&mut self, raw: &[u8]) -> Result<Trigger, PadError> {
        let Some(press) = parse_note_on(raw) else {
            return Ok(Trigger::Ignored);
        };
        match self.store.get(press.note) {
            Some(clip) => {
                self.player.play(press.note, clip)?;
                Ok(Trigger::Played(press.note))
            }
            None => {
                tracing::debug!(pad = press.note, "Pad has no clip");
                Ok(Trigger::Unmapped(press.note))
            }
        }
    }

    /// Start forwarding the selected device's messages into `sender`.
    pub fn watch_selected(
        &self,
        sender: Sender<Vec<u8>>,
    ) -> Result<JoinHandle<Result<(), PadError>>, PadError> {
        let id = self
            .selected
            .as_ref()
            .ok_or(PadError::NoDeviceSelected)?
            .id
            .clone();
        let source = Arc::clone(&self.source);
        Ok(tokio::spawn(async move { source.watch(&id, sender).await }))
    }

    /// Handle messages until every sender is dropped.
    ///
    /// Playback errors are logged and do not stop the loop. Returns the
    /// number of clips played.
    pub async fn run(&mut self, mut receiver: Receiver<Vec<u8>>) -> usize {
        let mut played = 0;
        while let Some(raw) = receiver.recv().await {
            match self.handle_message(&raw) {
                Ok(Trigger::Played(_)) => played += 1,
                Ok(_) => {}
                Err(e) => tracing::warn!(%e, "Failed to play clip"),
            }
        }
        played
    }
}
