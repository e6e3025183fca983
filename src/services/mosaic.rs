use mosaic_dither::{expand, MosaicQuantizer, Palette, PixelBuffer, QuantizedImage};
use std::path::{Path, PathBuf};

use crate::error::MosaicError;
use crate::models::MosaicConfig;
use crate::rendering::encode_preview;

/// What a mosaic run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicReport {
    /// `['rgb(...)','rgb(...)',...]`, one label per cell in scan order
    pub labels: String,
    /// Where the preview PNG was written
    pub output: PathBuf,
    /// Size of the written PNG
    pub png_bytes: usize,
    /// Grid dimensions
    pub width: usize,
    pub height: usize,
}

/// Image → palette mosaic pipeline
pub struct MosaicService {
    config: MosaicConfig,
    quantizer: MosaicQuantizer,
}

impl MosaicService {
    pub fn new(config: MosaicConfig) -> Result<Self, MosaicError> {
        let palette: Palette = config.palette()?;
        let quantizer = MosaicQuantizer::new(palette)
            .resize(config.size, config.size)
            .saturation(config.saturation)
            .brightness(config.brightness);
        Ok(Self { config, quantizer })
    }

    pub fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Decode `source` and quantize it to the configured grid.
    pub fn quantize_file(&self, source: &Path) -> Result<QuantizedImage, MosaicError> {
        if !source.exists() {
            return Err(MosaicError::SourceMissing(source.to_path_buf()));
        }
        let decoded = image::open(source)?.into_rgb8();
        let (width, height) = decoded.dimensions();
        tracing::debug!(path = %source.display(), width, height, "Decoded source image");

        let buffer = PixelBuffer::from_raw(decoded.into_raw(), width as usize, height as usize)?;
        Ok(self.quantizer.quantize(&buffer)?)
    }

    /// Quantize `source`, write the preview PNG and return the label list.
    pub fn run(&self, source: &Path) -> Result<MosaicReport, MosaicError> {
        let image = self.quantize_file(source)?;
        let preview = expand(&image, self.config.scale)?;
        let png = encode_preview(&preview)?;
        std::fs::write(&self.config.output, &png)?;

        tracing::info!(
            output = %self.config.output.display(),
            bytes = png.len(),
            "Wrote preview"
        );

        Ok(MosaicReport {
            labels: image.label_list(),
            output: self.config.output.clone(),
            png_bytes: png.len(),
            width: image.width(),
            height: image.height(),
        })
    }
}
