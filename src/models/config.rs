use mosaic_dither::{Palette, PaletteError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Mosaic configuration loaded from a YAML file (`CONFIG_FILE`)
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MosaicConfig {
    /// Palette as `rgb(R, G, B)` or `#RRGGBB` strings, in matching order.
    /// `None` uses the built-in 29-color palette.
    pub palette: Option<Vec<String>>,

    /// Side length of the quantized grid
    pub size: usize,

    /// Preview block size in pixels
    pub scale: usize,

    /// Chroma multiplier applied before quantization
    pub saturation: f32,

    /// Lightness multiplier applied before quantization
    pub brightness: f32,

    /// Where the preview PNG is written
    pub output: PathBuf,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            palette: None,
            size: 8,
            scale: 32,
            saturation: 1.4,
            brightness: 1.1,
            output: PathBuf::from("export.png"),
        }
    }
}

impl MosaicConfig {
    /// Load from `path`, falling back to defaults when the file is missing
    /// or invalid.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        size = config.size,
                        scale = config.scale,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from the file named by `CONFIG_FILE`, or defaults if unset
    pub fn from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    /// Build the configured palette
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        match &self.palette {
            Some(labels) => Palette::from_labels(labels.as_slice()),
            None => Ok(Palette::mosaic()),
        }
    }
}
