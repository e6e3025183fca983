//! Output types for the quantization pipeline.
//!
//! [`QuantizedImage`] stores palette indices with dimension metadata and an
//! owned [`Palette`](crate::palette::Palette). Labels, RGB bytes and the
//! block-replicated preview raster ([`expand`]) derive from it on demand.

mod preview;
mod quantized_image;

pub use preview::expand;
pub use quantized_image::QuantizedImage;
