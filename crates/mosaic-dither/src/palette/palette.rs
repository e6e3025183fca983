//! Ordered palette with labelled entries and nearest-color matching.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Colors of the default mosaic palette, in matching order.
///
/// The pure red entry appears twice on purpose: the list is kept exactly as
/// published, and the duplicate only changes which index wins a tie.
pub const MOSAIC_COLORS: [[u8; 3]; 29] = [
    [255, 1, 0],
    [255, 1, 0],
    [255, 145, 140],
    [235, 123, 12],
    [254, 212, 156],
    [232, 206, 93],
    [234, 239, 175],
    [255, 224, 92],
    [243, 243, 6],
    [205, 255, 3],
    [170, 241, 29],
    [4, 255, 137],
    [31, 206, 38],
    [193, 249, 205],
    [3, 255, 163],
    [145, 255, 232],
    [24, 217, 217],
    [33, 167, 213],
    [75, 78, 255],
    [163, 121, 255],
    [156, 48, 237],
    [205, 180, 255],
    [224, 57, 224],
    [255, 121, 255],
    [255, 0, 163],
    [255, 68, 133],
    [255, 255, 255],
    [121, 121, 121],
    [79, 79, 79],
];

/// Largest palette addressable with `u8` indices.
const MAX_COLORS: usize = 256;

/// A single palette color together with the label printed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    label: String,
    color: Rgb,
}

impl PaletteEntry {
    /// Create an entry with an explicit label.
    pub fn new(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// The textual label, e.g. `rgb(255, 1, 0)`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The RGB value.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }
}

impl From<Rgb> for PaletteEntry {
    /// Label the color with its `rgb(R, G, B)` form.
    fn from(color: Rgb) -> Self {
        Self::new(color.to_string(), color)
    }
}

impl FromStr for PaletteEntry {
    type Err = crate::palette::ParseColorError;

    /// Parse a color string, keeping the string verbatim as the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = s.parse::<Rgb>()?;
        Ok(Self::new(s.trim(), color))
    }
}

/// An ordered, immutable set of candidate output colors.
///
/// Order matters: [`find_nearest`](Palette::find_nearest) resolves ties to
/// the entry that comes first, and entries are never deduplicated.
///
/// # Example
///
/// ```
/// use mosaic_dither::{Palette, Rgb};
///
/// let palette = Palette::from_labels(&["rgb(0, 0, 0)", "rgb(255, 255, 255)"]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest(Rgb::new(200, 200, 200)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from labelled entries.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than 256 entries
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if entries.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    /// Create a palette from colors, labelling each as `rgb(R, G, B)`.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, PaletteError> {
        Self::new(colors.iter().copied().map(PaletteEntry::from).collect())
    }

    /// Create a palette from color strings (`rgb(...)` or `#RRGGBB`).
    ///
    /// Each string is kept verbatim (trimmed) as the entry's label.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, PaletteError> {
        let entries = labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                label
                    .as_ref()
                    .parse::<PaletteEntry>()
                    .map_err(|error| PaletteError::ParseColor { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The 29-entry mosaic palette (see [`MOSAIC_COLORS`]).
    pub fn mosaic() -> Self {
        Self {
            entries: MOSAIC_COLORS
                .iter()
                .map(|&bytes| PaletteEntry::from(Rgb::from_bytes(bytes)))
                .collect(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// The color at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.entries[idx].color
    }

    /// The label at `idx`.
    #[inline]
    pub fn label(&self, idx: usize) -> &str {
        &self.entries[idx].label
    }

    /// Iterate entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Index of the entry closest to `color` by squared RGB distance.
    ///
    /// Linear scan; a strictly smaller distance is required to replace the
    /// current best, so the earliest of several equidistant entries wins.
    pub fn find_nearest(&self, color: Rgb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (idx, entry) in self.entries.iter().enumerate() {
            let dist = color.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }
        best_idx
    }

    /// Index of the first entry with exactly this color, if any.
    pub fn position(&self, color: Rgb) -> Option<usize> {
        self.entries.iter().position(|entry| entry.color == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::mosaic()
    }
}
