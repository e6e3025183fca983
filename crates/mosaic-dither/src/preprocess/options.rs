//! Pre-processing options.

/// Configuration for [`Preprocessor`](super::Preprocessor).
///
/// The default is the identity: no resize, saturation 1.0, brightness 1.0.
/// [`PreprocessOptions::mosaic`] gives the 8×8 grid with the saturation and
/// brightness boost the mosaic command uses.
///
/// # Example
///
/// ```
/// use mosaic_dither::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .resize(16, 16)
///     .saturation(1.2)
///     .brightness(0.9);
/// assert_eq!(options.target_width, Some(16));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessOptions {
    /// Target width for resize (None = keep the source width).
    pub target_width: Option<usize>,

    /// Target height for resize (None = keep the source height).
    pub target_height: Option<usize>,

    /// Chroma multiplier in Oklch space.
    ///
    /// - 1.0 = no change
    /// - 1.4 = mosaic default
    pub saturation: f32,

    /// Lightness multiplier in Oklch space.
    ///
    /// - 1.0 = no change
    /// - 1.1 = mosaic default
    pub brightness: f32,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            target_width: None,
            target_height: None,
            saturation: 1.0,
            brightness: 1.0,
        }
    }
}

impl PreprocessOptions {
    /// Identity options, same as `PreprocessOptions::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset: resize to 8×8, saturation 1.4, brightness 1.1.
    pub fn mosaic() -> Self {
        Self::new().resize(8, 8).saturation(1.4).brightness(1.1)
    }

    /// Set target dimensions for nearest-neighbour resize.
    #[inline]
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.target_width = Some(width);
        self.target_height = Some(height);
        self
    }

    /// Set the chroma multiplier.
    #[inline]
    pub fn saturation(mut self, factor: f32) -> Self {
        self.saturation = factor;
        self
    }

    /// Set the lightness multiplier.
    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.brightness = factor;
        self
    }

    /// Whether modulation would change any pixel.
    pub(crate) fn modulates(&self) -> bool {
        self.saturation != 1.0 || self.brightness != 1.0
    }
}
