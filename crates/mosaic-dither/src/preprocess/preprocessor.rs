//! Resize then modulate.

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::{Oklab, Rgb};

use super::oklch::Oklch;
use super::resize::resize_nearest;
use super::PreprocessOptions;

/// Scale lightness and chroma of every pixel in Oklch.
///
/// `brightness` multiplies L, `saturation` multiplies C. Results are
/// clamped back into the sRGB gamut. With both factors at 1.0 the buffer is
/// left untouched.
pub fn modulate(buffer: &mut PixelBuffer, saturation: f32, brightness: f32) {
    if saturation == 1.0 && brightness == 1.0 {
        return;
    }
    buffer.map_in_place(|pixel| {
        let lch = Oklch::from(Oklab::from(pixel))
            .scale_lightness(brightness)
            .scale_chroma(saturation);
        Rgb::from(Oklab::from(lch))
    });
}

/// Applies [`PreprocessOptions`] to a source buffer.
///
/// # Example
///
/// ```
/// use mosaic_dither::{PixelBuffer, PreprocessOptions, Preprocessor, Rgb};
///
/// let source = PixelBuffer::filled(4, 4, Rgb::new(0, 0, 0)).unwrap();
/// let out = Preprocessor::new(PreprocessOptions::new().resize(2, 2))
///     .process(&source)
///     .unwrap();
/// assert_eq!(out.pixel_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Resize (if requested), then modulate (if any factor differs from 1.0).
    ///
    /// # Errors
    ///
    /// [`BufferError::ZeroDimension`] if a target dimension is zero.
    pub fn process(&self, source: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        let width = self.options.target_width.unwrap_or(source.width());
        let height = self.options.target_height.unwrap_or(source.height());
        let mut buffer = resize_nearest(source, width, height)?;

        if self.options.modulates() {
            modulate(
                &mut buffer,
                self.options.saturation,
                self.options.brightness,
            );
        }
        Ok(buffer)
    }
}
