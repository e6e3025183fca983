//! Interleaved 8-bit RGB pixel buffer.
//!
//! [`PixelBuffer`] is both the quantizer's working image (mutated in place
//! while error is diffused) and the preview raster it produces.

use std::fmt;

use crate::color::Rgb;

/// Bytes per pixel: R, G, B.
pub const CHANNELS: usize = 3;

/// Error type for buffer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height was zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Raw byte length does not equal `width * height * 3`
    LengthMismatch {
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },
    /// Preview scale factor was zero
    ZeroScale,
    /// `width * height * 3` does not fit in `usize`
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "buffer dimensions must be non-zero (got {}x{})", width, height)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "raw RGB length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            BufferError::ZeroScale => write!(f, "preview scale must be at least 1"),
            BufferError::TooLarge { width, height } => {
                write!(f, "buffer of {}x{} pixels is too large", width, height)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Byte length of a `width` × `height` RGB raster, checked for overflow.
pub(crate) fn byte_len(width: usize, height: usize) -> Result<usize, BufferError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BufferError::TooLarge { width, height })
}

/// A width × height grid of RGB pixels stored row-major, 3 bytes per pixel.
///
/// # Example
///
/// ```
/// use mosaic_dither::{PixelBuffer, Rgb};
///
/// let mut buffer = PixelBuffer::filled(2, 2, Rgb::new(0, 0, 0)).unwrap();
/// buffer.set_pixel(1, 0, Rgb::new(255, 255, 255));
/// assert_eq!(buffer.as_bytes()[3..6], [255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroDimension`] if either dimension is zero
    /// - [`BufferError::TooLarge`] if `width * height * 3` overflows
    /// - [`BufferError::LengthMismatch`] if `data.len() != width * height * 3`
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, BufferError> {
        let pixels = byte_len(width, height)? / CHANNELS;
        let data = color.to_bytes().repeat(pixels);
        Self::from_raw(data, width, height)
    }

    /// Build a buffer from row-major pixels.
    pub fn from_pixels(pixels: &[Rgb], width: usize, height: usize) -> Result<Self, BufferError> {
        let data = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        Self::from_raw(data, width, height)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        (y * self.width + x) * CHANNELS
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&color.to_bytes());
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }

    /// Apply `f` to every pixel in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(Rgb) -> Rgb) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            let out = f(Rgb::new(chunk[0], chunk[1], chunk[2]));
            chunk.copy_from_slice(&out.to_bytes());
        }
    }

    /// The raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw interleaved bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
