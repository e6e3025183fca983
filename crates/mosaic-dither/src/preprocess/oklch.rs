//! Oklch polar color space for brightness and saturation adjustment.
//!
//! Oklch is the polar form of Oklab: lightness, chroma (distance from the
//! neutral axis) and hue angle. Scaling chroma changes saturation without
//! shifting hue; scaling lightness changes brightness without touching
//! either.

use crate::color::Oklab;

/// Oklch: polar form of Oklab (Lightness, Chroma, Hue).
///
/// For achromatic colors hue is undefined and set to 0.0, which is harmless
/// because scaling zero chroma yields zero chroma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f32,
    /// Chroma: 0.0 = gray
    pub c: f32,
    /// Hue angle in radians
    pub h: f32,
}

impl Oklch {
    /// Scale chroma by `factor`, never below zero.
    #[inline]
    pub fn scale_chroma(self, factor: f32) -> Self {
        Self {
            c: (self.c * factor).max(0.0),
            ..self
        }
    }

    /// Scale lightness by `factor`, never below zero.
    #[inline]
    pub fn scale_lightness(self, factor: f32) -> Self {
        Self {
            l: (self.l * factor).max(0.0),
            ..self
        }
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        Self {
            l: lab.l,
            c: lab.chroma(),
            h: lab.b.atan2(lab.a),
        }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        Self::new(lch.l, lch.c * lch.h.cos(), lch.c * lch.h.sin())
    }
}
