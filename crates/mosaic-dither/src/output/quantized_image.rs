//! QuantizedImage: palette indices plus the palette they index.

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::Rgb;
use crate::palette::Palette;

/// The canonical output of the quantizer.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette used. Labels and RGB bytes are looked
/// up on demand, so every label is by construction an exact palette entry.
///
/// # Example
///
/// ```
/// use mosaic_dither::{Palette, QuantizedImage, Rgb};
///
/// let palette = Palette::from_colors(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = QuantizedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.labels().count(), 4);
/// assert_eq!(
///     image.label_list(),
///     "['rgb(0, 0, 0)','rgb(255, 255, 255)','rgb(255, 255, 255)','rgb(0, 0, 0)']"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl QuantizedImage {
    /// Wrap quantizer output.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match {}x{}",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of quantized pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Chosen color of the pixel at `(x, y)`.
    pub fn color_at(&self, x: usize, y: usize) -> Rgb {
        self.palette
            .color(self.indices[y * self.width + x] as usize)
    }

    /// Label of every pixel in scan order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.indices
            .iter()
            .map(move |&idx| self.palette.label(idx as usize))
    }

    /// The printable label list: `['a','b',...]`.
    pub fn label_list(&self) -> String {
        let quoted: Vec<String> = self.labels().map(|label| format!("'{label}'")).collect();
        format!("[{}]", quoted.join(","))
    }

    /// Flat `[R, G, B, ...]` bytes of the chosen colors.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.indices
            .iter()
            .flat_map(|&idx| self.palette.color(idx as usize).to_bytes())
            .collect()
    }

    /// The chosen colors as a [`PixelBuffer`] of the same dimensions.
    pub fn to_buffer(&self) -> Result<PixelBuffer, BufferError> {
        PixelBuffer::from_raw(self.to_rgb(), self.width, self.height)
    }
}
