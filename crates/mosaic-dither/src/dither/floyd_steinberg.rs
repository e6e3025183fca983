//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg is the most widely known error diffusion algorithm.
//! It distributes 100% of the quantization error to 4 neighbors (less at
//! the image border, where out-of-range shares are dropped).

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Scanning is strictly left to right, top to bottom, so the result is
/// fully determined by the input buffer and the palette order.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(buffer, palette, &FLOYD_STEINBERG)
    }
}
