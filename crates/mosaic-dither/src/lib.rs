#![allow(clippy::module_inception)]

//! mosaic-dither: palette quantization for tiny mosaics
//!
//! Turns an image into a small grid (8×8 by default) where every cell is one
//! color from a fixed palette, using Floyd-Steinberg error diffusion so the
//! grid keeps some of the source's tonal detail.
//!
//! # Quick Start
//!
//! The [`MosaicQuantizer`] builder is the primary entry point:
//!
//! ```
//! use mosaic_dither::{expand, MosaicQuantizer, Palette, PixelBuffer, Rgb};
//!
//! let source = PixelBuffer::filled(40, 30, Rgb::new(30, 200, 60)).unwrap();
//! let image = MosaicQuantizer::mosaic(Palette::mosaic())
//!     .quantize(&source)
//!     .unwrap();
//!
//! assert_eq!(image.len(), 64);
//! println!("{}", image.label_list());
//!
//! let preview = expand(&image, 32).unwrap();
//! assert_eq!((preview.width(), preview.height()), (256, 256));
//! ```
//!
//! # Pipeline
//!
//! 1. [`preprocess`]: nearest-neighbour resize, then Oklch brightness and
//!    saturation modulation
//! 2. [`dither`]: row-major Floyd-Steinberg against the [`Palette`], nearest
//!    color by squared RGB distance, first entry wins ties
//! 3. [`output`]: palette indices wrapped in a [`QuantizedImage`], printable
//!    labels and a block-replicated preview raster
//!
//! Quantization works on 8-bit sRGB values directly. Diffused error is
//! clamped to 0..=255 and truncated at every step, so a given input always
//! produces the same output.
//!
//! The crate has no dependencies and does no I/O; decoding and encoding
//! image files is left to the caller.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{MosaicQuantizer, QuantizeError};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{Oklab, Rgb};
pub use dither::{Dither, FloydSteinberg};
pub use output::{expand, QuantizedImage};
pub use palette::{Palette, PaletteEntry, PaletteError, ParseColorError, MOSAIC_COLORS};
pub use preprocess::{PreprocessOptions, Preprocessor};
