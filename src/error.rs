use std::path::PathBuf;

use mosaic_dither::{BufferError, PaletteError, QuantizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("Source image not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BufferError> for MosaicError {
    fn from(e: BufferError) -> Self {
        MosaicError::Quantize(e.into())
    }
}

impl From<PaletteError> for MosaicError {
    fn from(e: PaletteError) -> Self {
        MosaicError::Quantize(e.into())
    }
}

#[derive(Debug, Error)]
pub enum PadError {
    #[error("Invalid mapping file: {0}")]
    Mapping(#[from] serde_json::Error),

    #[error("Pad {0} is not on the grid")]
    InvalidPad(u8),

    #[error("Unknown MIDI device: {0}")]
    UnknownDevice(String),

    #[error("No MIDI device selected")]
    NoDeviceSelected,

    #[error("Invalid clip: {0}")]
    InvalidClip(String),

    #[error("Device error: {0}")]
    Device(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
