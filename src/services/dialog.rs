use std::path::{Path, PathBuf};

use crate::error::PadError;

/// What a file dialog is asked to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// An audio clip to bind to a pad
    Audio,
    /// A saved mapping table
    Mappings,
}

impl FileKind {
    /// Accept filter a picker would show
    pub fn accept(self) -> &'static str {
        match self {
            FileKind::Audio => "audio/*",
            FileKind::Mappings => "application/json",
        }
    }
}

/// A file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Interactive file picking and saving
pub trait FileDialog: Send {
    /// Ask the user for a file. `Ok(None)` means the dialog was cancelled.
    fn open(&mut self, kind: FileKind) -> Result<Option<PickedFile>, PadError>;

    /// Offer `bytes` for download under `suggested_name`.
    fn save(&mut self, suggested_name: &str, bytes: &[u8]) -> Result<(), PadError>;
}

/// Non-interactive dialog answering with paths given up front.
///
/// Opening audio reads the configured clip (cancelled if none was given).
/// Opening mappings reads the mappings path (cancelled if the file does not
/// exist yet). Saving writes to the mappings path, or into it under the
/// suggested name when it is a directory.
#[derive(Debug, Clone)]
pub struct PathDialog {
    audio: Option<PathBuf>,
    mappings: PathBuf,
}

impl PathDialog {
    pub fn new(mappings: impl Into<PathBuf>) -> Self {
        Self {
            audio: None,
            mappings: mappings.into(),
        }
    }

    /// Set the clip returned for audio requests
    pub fn with_audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = Some(path.into());
        self
    }

    pub fn mappings_path(&self) -> &Path {
        &self.mappings
    }

    fn read(path: &Path) -> Result<PickedFile, PadError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(PickedFile { name, bytes })
    }
}

impl FileDialog for PathDialog {
    fn open(&mut self, kind: FileKind) -> Result<Option<PickedFile>, PadError> {
        match kind {
            FileKind::Audio => self.audio.as_deref().map(Self::read).transpose(),
            FileKind::Mappings => {
                if self.mappings.is_file() {
                    Self::read(&self.mappings).map(Some)
                } else {
                    tracing::debug!(path = %self.mappings.display(), "No mappings file yet");
                    Ok(None)
                }
            }
        }
    }

    fn save(&mut self, suggested_name: &str, bytes: &[u8]) -> Result<(), PadError> {
        let target = if self.mappings.is_dir() {
            self.mappings.join(suggested_name)
        } else {
            self.mappings.clone()
        };
        std::fs::write(&target, bytes)?;
        tracing::info!(path = %target.display(), bytes = bytes.len(), "Saved mappings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_filters() {
        assert_eq!(FileKind::Audio.accept(), "audio/*");
        assert_eq!(FileKind::Mappings.accept(), "application/json");
    }

    #[test]
    fn test_open_audio_without_path_is_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let mut dialog = PathDialog::new(dir.path().join("m.json"));
        assert_eq!(dialog.open(FileKind::Audio).unwrap(), None);
    }

    #[test]
    fn test_open_audio_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("kick.mp3");
        std::fs::write(&clip, b"ID3").unwrap();

        let mut dialog = PathDialog::new(dir.path().join("m.json")).with_audio(&clip);
        let picked = dialog.open(FileKind::Audio).unwrap().unwrap();
        assert_eq!(picked.name, "kick.mp3");
        assert_eq!(picked.bytes, b"ID3");
    }

    #[test]
    fn test_open_missing_audio_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut dialog =
            PathDialog::new(dir.path().join("m.json")).with_audio(dir.path().join("gone.mp3"));
        assert!(matches!(dialog.open(FileKind::Audio), Err(PadError::Io(_))));
    }

    #[test]
    fn test_open_missing_mappings_is_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let mut dialog = PathDialog::new(dir.path().join("m.json"));
        assert_eq!(dialog.open(FileKind::Mappings).unwrap(), None);
    }

    #[test]
    fn test_save_to_file_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        let mut dialog = PathDialog::new(&path);

        dialog.save("tileMappings.json", b"{}").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");

        let picked = dialog.open(FileKind::Mappings).unwrap().unwrap();
        assert_eq!(picked.name, "m.json");
    }

    #[test]
    fn test_save_into_directory_uses_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut dialog = PathDialog::new(dir.path());
        dialog.save("tileMappings.json", b"{}").unwrap();
        assert!(dir.path().join("tileMappings.json").is_file());
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut dialog = PathDialog::new(dir.path().join("gone").join("m.json"));
        assert!(matches!(
            dialog.save("tileMappings.json", b"{}"),
            Err(PadError::Io(_))
        ));
    }
}
