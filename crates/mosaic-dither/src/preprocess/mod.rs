//! Pixel pre-processing before quantization.
//!
//! The pipeline has two steps, both pure functions on [`PixelBuffer`]:
//!
//! 1. **Resize** with nearest-neighbour sampling to the target grid. The
//!    image is stretched to fill it; aspect ratio is not preserved.
//! 2. **Modulate** in Oklch: lightness is multiplied by `brightness`, chroma
//!    by `saturation`. A factor of 1.0 leaves the channel alone.
//!
//! Resize runs first so modulation only touches the handful of pixels that
//! reach the quantizer.
//!
//! # Example
//!
//! ```
//! use mosaic_dither::{PixelBuffer, PreprocessOptions, Preprocessor, Rgb};
//!
//! let source = PixelBuffer::filled(64, 48, Rgb::new(200, 40, 40)).unwrap();
//! let grid = Preprocessor::new(PreprocessOptions::mosaic())
//!     .process(&source)
//!     .unwrap();
//! assert_eq!((grid.width(), grid.height()), (8, 8));
//! ```
//!
//! [`PixelBuffer`]: crate::PixelBuffer

mod oklch;
mod options;
mod preprocessor;
mod resize;

pub use options::PreprocessOptions;
pub use preprocessor::{modulate, Preprocessor};
pub use resize::resize_nearest;
