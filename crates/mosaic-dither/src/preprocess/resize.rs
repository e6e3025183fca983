//! Nearest-neighbour resampling.

use crate::buffer::{byte_len, BufferError, PixelBuffer};

/// Source coordinate sampled for destination coordinate `dst`.
///
/// Samples at the centre of the destination cell:
/// `floor((dst + 0.5) * src_len / dst_len)`, clamped to the last index.
#[inline]
fn sample(dst: usize, src_len: usize, dst_len: usize) -> usize {
    let pos = ((dst as f64 + 0.5) * src_len as f64 / dst_len as f64) as usize;
    pos.min(src_len - 1)
}

/// Resize `source` to exactly `width` × `height` with nearest-neighbour
/// sampling.
///
/// The image is stretched to fill the target; aspect ratio is not kept.
/// Resizing to the source dimensions returns an identical copy.
///
/// # Errors
///
/// - [`BufferError::ZeroDimension`] if either target dimension is zero
/// - [`BufferError::TooLarge`] if the target does not fit in memory addressing
pub fn resize_nearest(
    source: &PixelBuffer,
    width: usize,
    height: usize,
) -> Result<PixelBuffer, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    let len = byte_len(width, height)?;
    if width == source.width() && height == source.height() {
        return Ok(source.clone());
    }

    let columns: Vec<usize> = (0..width)
        .map(|x| sample(x, source.width(), width))
        .collect();

    let mut data = Vec::with_capacity(len);
    for y in 0..height {
        let sy = sample(y, source.height(), height);
        for &sx in &columns {
            data.extend_from_slice(&source.pixel(sx, sy).to_bytes());
        }
    }
    PixelBuffer::from_raw(data, width, height)
}
