//! Block-replicated preview raster.

use super::QuantizedImage;
use crate::buffer::{byte_len, BufferError, PixelBuffer, CHANNELS};

/// Expand `image` so every quantized pixel becomes a `scale`×`scale` block.
///
/// The result is `(width * scale) × (height * scale)` pixels. Every output
/// pixel inside block `[x*s, (x+1)*s) × [y*s, (y+1)*s)` equals the chosen
/// color of quantized pixel `(x, y)`.
///
/// # Errors
///
/// - [`BufferError::ZeroScale`] if `scale` is 0
/// - [`BufferError::TooLarge`] if the expanded raster overflows `usize`
///
/// # Example
///
/// ```
/// use mosaic_dither::{expand, Palette, QuantizedImage};
///
/// let image = QuantizedImage::new(vec![0; 4], 2, 2, Palette::mosaic());
/// let preview = expand(&image, 32).unwrap();
/// assert_eq!((preview.width(), preview.height()), (64, 64));
/// ```
pub fn expand(image: &QuantizedImage, scale: usize) -> Result<PixelBuffer, BufferError> {
    if scale == 0 {
        return Err(BufferError::ZeroScale);
    }
    let (Some(out_width), Some(out_height)) = (
        image.width().checked_mul(scale),
        image.height().checked_mul(scale),
    ) else {
        return Err(BufferError::TooLarge {
            width: image.width().saturating_mul(scale),
            height: image.height().saturating_mul(scale),
        });
    };
    let len = byte_len(out_width, out_height)?;

    // Build one output row per source row, then repeat it `scale` times.
    let mut data = Vec::with_capacity(len);
    let mut row = Vec::with_capacity(out_width * CHANNELS);
    for y in 0..image.height() {
        row.clear();
        for x in 0..image.width() {
            let bytes = image.color_at(x, y).to_bytes();
            for _ in 0..scale {
                row.extend_from_slice(&bytes);
            }
        }
        for _ in 0..scale {
            data.extend_from_slice(&row);
        }
    }

    PixelBuffer::from_raw(data, out_width, out_height)
}
