//! Color types.
//!
//! - [`Rgb`]: 8-bit sRGB triple, the pixel type used everywhere
//! - [`Oklab`]: perceptual space used by brightness/saturation modulation

mod oklab;
mod rgb;

pub use oklab::Oklab;
pub use rgb::Rgb;
