//! MosaicQuantizer builder: pre-process, quantize, wrap.

use crate::buffer::PixelBuffer;
use crate::dither::{Dither, FloydSteinberg};
use crate::output::QuantizedImage;
use crate::palette::Palette;
use crate::preprocess::{PreprocessOptions, Preprocessor};

use super::QuantizeError;

/// Builder that turns a source image into a [`QuantizedImage`].
///
/// Defaults to identity pre-processing, so [`quantize`](Self::quantize)
/// dithers the buffer as given. Use [`MosaicQuantizer::mosaic`] for the
/// 8×8 grid with the saturation and brightness boost.
///
/// # Example
///
/// ```
/// use mosaic_dither::{MosaicQuantizer, Palette, PixelBuffer, Rgb};
///
/// let source = PixelBuffer::filled(8, 8, Rgb::new(255, 0, 0)).unwrap();
/// let image = MosaicQuantizer::new(Palette::mosaic()).quantize(&source).unwrap();
///
/// assert_eq!(image.len(), 64);
/// assert!(image.labels().all(|label| label == "rgb(255, 1, 0)"));
/// ```
#[derive(Debug, Clone)]
pub struct MosaicQuantizer {
    palette: Palette,
    preprocess: PreprocessOptions,
}

impl MosaicQuantizer {
    /// Quantizer with the given palette and no pre-processing.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            preprocess: PreprocessOptions::default(),
        }
    }

    /// Quantizer with the given palette and [`PreprocessOptions::mosaic`].
    pub fn mosaic(palette: Palette) -> Self {
        Self::new(palette).preprocess(PreprocessOptions::mosaic())
    }

    /// Replace all pre-processing options at once.
    #[inline]
    pub fn preprocess(mut self, options: PreprocessOptions) -> Self {
        self.preprocess = options;
        self
    }

    /// Set the target grid.
    #[inline]
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.preprocess = self.preprocess.resize(width, height);
        self
    }

    #[inline]
    pub fn saturation(mut self, factor: f32) -> Self {
        self.preprocess = self.preprocess.saturation(factor);
        self
    }

    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.preprocess = self.preprocess.brightness(factor);
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run the full pipeline on `source`.
    ///
    /// 1. Pre-process (resize, modulate)
    /// 2. Floyd-Steinberg quantize against the palette
    /// 3. Wrap in [`QuantizedImage`]
    ///
    /// The builder is reusable; `source` is not modified.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::Buffer`] if a resize dimension is zero.
    pub fn quantize(&self, source: &PixelBuffer) -> Result<QuantizedImage, QuantizeError> {
        let mut buffer = Preprocessor::new(self.preprocess.clone()).process(source)?;
        let indices = FloydSteinberg.dither(&mut buffer, &self.palette);
        Ok(QuantizedImage::new(
            indices,
            buffer.width(),
            buffer.height(),
            self.palette.clone(),
        ))
    }

    /// Like [`quantize`](Self::quantize) for raw interleaved RGB bytes.
    pub fn quantize_rgb(
        &self,
        data: Vec<u8>,
        width: usize,
        height: usize,
    ) -> Result<QuantizedImage, QuantizeError> {
        let source = PixelBuffer::from_raw(data, width, height)?;
        self.quantize(&source)
    }
}
