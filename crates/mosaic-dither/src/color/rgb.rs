//! 8-bit RGB color type
//!
//! [`Rgb`] is the pixel type of the whole crate: pixel buffers, palette
//! entries and preview rasters all store one byte per channel.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with three 8-bit channels in sRGB encoding.
///
/// Quantization compares colors channel-wise on these integer values, so no
/// gamma handling happens here. Perceptual conversions live in
/// [`Oklab`](super::Oklab) and are only used by preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    ///
    /// # Example
    /// ```
    /// use mosaic_dither::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance across the three channels.
    ///
    /// The square root is never needed for ranking, so it is skipped.
    ///
    /// # Example
    /// ```
    /// use mosaic_dither::Rgb;
    /// let a = Rgb::new(10, 20, 30);
    /// let b = Rgb::new(13, 24, 30);
    /// assert_eq!(a.distance_squared(b), 25);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Parse a hex color string (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        match digits.len() {
            6 => Ok(Self::new(
                u8::from_str_radix(&digits[0..2], 16)?,
                u8::from_str_radix(&digits[2..4], 16)?,
                u8::from_str_radix(&digits[4..6], 16)?,
            )),
            3 => {
                let r = u8::from_str_radix(&digits[0..1], 16)?;
                let g = u8::from_str_radix(&digits[1..2], 16)?;
                let b = u8::from_str_radix(&digits[2..3], 16)?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }

    /// Parse a functional notation color such as `rgb(255, 1, 0)`.
    ///
    /// The first three runs of decimal digits are taken as the channels,
    /// so spacing and the function name are not significant.
    pub fn from_functional(text: &str) -> Result<Self, ParseColorError> {
        let mut channels = [0u8; 3];
        let mut found = 0;
        for run in text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .take(3)
        {
            let value: u32 = run.parse()?;
            channels[found] =
                u8::try_from(value).map_err(|_| ParseColorError::ChannelOutOfRange(value))?;
            found += 1;
        }
        if found < 3 {
            return Err(ParseColorError::MissingChannels { found });
        }
        Ok(Self::from_bytes(channels))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    /// Formats as `rgb(R, G, B)`, the label form used in palette output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts hex (`#ff0100`) or functional (`rgb(255, 1, 0)`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_functional(s)
        }
    }
}
