//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing color strings.
///
/// Returned when a hex (`#RRGGBB`) or functional (`rgb(R, G, B)`) color
/// string cannot be turned into an [`Rgb`](crate::Rgb).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// A channel could not be parsed as a number
    InvalidNumber(ParseIntError),
    /// Fewer than three numeric channels were found
    MissingChannels {
        /// Number of channels found before the input ran out
        found: usize,
    },
    /// A channel value exceeded 255
    ChannelOutOfRange(u32),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidNumber(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidNumber(err) => {
                write!(f, "invalid color channel: {}", err)
            }
            ParseColorError::MissingChannels { found } => {
                write!(f, "expected 3 color channels, found {}", found)
            }
            ParseColorError::ChannelOutOfRange(value) => {
                write!(f, "color channel {} is out of range (0-255)", value)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidNumber(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette validation.
///
/// Duplicate colors are deliberately not an error: a palette may list the
/// same color twice and the first occurrence wins ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// More colors than fit in a `u8` index
    TooManyColors {
        /// Number of colors supplied
        count: usize,
    },
    /// A palette label could not be parsed as a color
    ParseColor {
        /// Position of the offending label
        index: usize,
        /// Underlying parse failure
        error: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyColors { count } => {
                write!(f, "palette has {} colors (max 256)", count)
            }
            PaletteError::ParseColor { index, error } => {
                write!(f, "invalid color at index {}: {}", index, error)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { error, .. } => Some(error),
            _ => None,
        }
    }
}
