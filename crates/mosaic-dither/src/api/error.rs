//! Unified error type for the mosaic-dither public API.

use std::fmt;

use crate::buffer::BufferError;
use crate::palette::{PaletteError, ParseColorError};

/// Wraps every error the crate can produce for `?` propagation.
///
/// # Example
///
/// ```
/// use mosaic_dither::{Palette, QuantizeError};
///
/// fn custom() -> Result<Palette, QuantizeError> {
///     Ok(Palette::from_labels(&["rgb(0, 0, 0)", "#ffffff"])?)
/// }
/// assert_eq!(custom().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// Palette validation error (empty, too large, or bad label)
    Palette(PaletteError),
    /// A single color string failed to parse
    ParseColor(ParseColorError),
    /// Pixel buffer could not be built (bad dimensions, length, or scale)
    Buffer(BufferError),
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Palette(err) => write!(f, "palette error: {}", err),
            QuantizeError::ParseColor(err) => write!(f, "color parse error: {}", err),
            QuantizeError::Buffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Palette(err) => Some(err),
            QuantizeError::ParseColor(err) => Some(err),
            QuantizeError::Buffer(err) => Some(err),
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::Palette(err)
    }
}

impl From<ParseColorError> for QuantizeError {
    fn from(err: ParseColorError) -> Self {
        QuantizeError::ParseColor(err)
    }
}

impl From<BufferError> for QuantizeError {
    fn from(err: BufferError) -> Self {
        QuantizeError::Buffer(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_prefixes() {
        let err = QuantizeError::from(PaletteError::EmptyPalette);
        assert!(err.to_string().starts_with("palette error: "));

        let err = QuantizeError::from(BufferError::ZeroScale);
        assert_eq!(
            err.to_string(),
            "pixel buffer error: preview scale must be at least 1"
        );
    }

    #[test]
    fn test_source_is_wrapped_error() {
        let err = QuantizeError::from(ParseColorError::InvalidLength);
        assert!(err.source().is_some());
    }
}
