//! High-level API: the [`MosaicQuantizer`] builder and the [`QuantizeError`]
//! unified error type.

mod builder;
mod error;

pub use builder::MosaicQuantizer;
pub use error::QuantizeError;
