//! Error diffusion quantization.
//!
//! Algorithms implement the [`Dither`] trait. The scan loop is written once
//! in [`dither_with_kernel`] against a [`Kernel`] table; only the
//! Floyd-Steinberg kernel ships.
//!
//! # Example
//!
//! ```
//! use mosaic_dither::{Dither, FloydSteinberg, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::mosaic();
//! let mut buffer = PixelBuffer::filled(8, 8, Rgb::new(255, 0, 0)).unwrap();
//! let indices = FloydSteinberg.dither(&mut buffer, &palette);
//! assert_eq!(indices.len(), 64);
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::Palette;

/// Trait for error diffusion dithering algorithms.
///
/// Error diffusion works by:
/// 1. For each pixel, find the nearest palette color
/// 2. Compute the quantization error (current - chosen)
/// 3. Distribute that error to neighboring unprocessed pixels
/// 4. Replace the pixel with the chosen color
pub trait Dither {
    /// Quantize `buffer` in place and return palette indices.
    ///
    /// On return every pixel of `buffer` holds its chosen palette color.
    /// The returned `Vec<u8>` has one index per pixel in row-major order,
    /// each in `0..palette.len()`.
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette) -> Vec<u8>;
}

/// Add `error * factor` to a channel, clamp to 0..=255 and truncate.
#[inline]
fn spread(value: u8, error: i32, factor: f64) -> u8 {
    (value as f64 + error as f64 * factor).clamp(0.0, 255.0) as u8
}

/// Add weighted error to one pixel.
#[inline]
fn diffuse(buffer: &mut PixelBuffer, x: usize, y: usize, error: [i32; 3], factor: f64) {
    let p = buffer.pixel(x, y);
    buffer.set_pixel(
        x,
        y,
        Rgb::new(
            spread(p.r, error[0], factor),
            spread(p.g, error[1], factor),
            spread(p.b, error[2], factor),
        ),
    );
}

/// Spread `error` from `(x, y)` to every in-bounds kernel neighbor.
fn diffuse_error(buffer: &mut PixelBuffer, x: usize, y: usize, error: [i32; 3], kernel: &Kernel) {
    for &(dx, dy, weight) in kernel.entries {
        let Some(nx) = x.checked_add_signed(dx as isize) else {
            continue;
        };
        let ny = y + dy as usize;
        if nx >= buffer.width() || ny >= buffer.height() {
            continue;
        }
        diffuse(buffer, nx, ny, error, kernel.factor(weight));
    }
}

/// Row-major error diffusion with an arbitrary forward-only kernel.
///
/// Scans y outer, x inner, always left to right. Neighbors outside the
/// buffer are skipped.
pub fn dither_with_kernel(buffer: &mut PixelBuffer, palette: &Palette, kernel: &Kernel) -> Vec<u8> {
    let mut indices = Vec::with_capacity(buffer.pixel_count());

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let current = buffer.pixel(x, y);
            let idx = palette.find_nearest(current);
            let chosen = palette.color(idx);
            // Palette construction caps the length at 256
            indices.push(idx as u8);

            let error = [
                current.r as i32 - chosen.r as i32,
                current.g as i32 - chosen.g as i32,
                current.b as i32 - chosen.b as i32,
            ];
            if error != [0, 0, 0] {
                diffuse_error(buffer, x, y, error, kernel);
            }

            buffer.set_pixel(x, y, chosen);
        }
    }

    indices
}
