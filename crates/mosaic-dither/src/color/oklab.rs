//! Oklab perceptual color space
//!
//! Used by preprocessing to adjust brightness and saturation without hue
//! shifts. Quantization itself never touches Oklab.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::rgb::Rgb;

/// IEC 61966-2-1 sRGB decode for a single channel in 0.0..=1.0.
#[inline]
fn srgb_to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 sRGB encode for a single channel in 0.0..=1.0.
#[inline]
fn linear_to_srgb(linear: f32) -> f32 {
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Encode a linear channel back to a byte, rounding and clamping.
#[inline]
fn linear_to_byte(linear: f32) -> u8 {
    let srgb = linear_to_srgb(linear.clamp(0.0, 1.0));
    (srgb * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A color in Oklab perceptual color space.
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis
/// - `b`: Blue-yellow axis
///
/// Values are not clamped; adjusted colors may leave the sRGB gamut and are
/// only clamped when converted back to [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Oklab {
    /// Create a new Oklab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude, `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl From<Rgb> for Oklab {
    /// Convert an 8-bit sRGB color to Oklab (2021-01-25 matrices).
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r as f32 / 255.0);
        let g = srgb_to_linear(rgb.g as f32 / 255.0);
        let b = srgb_to_linear(rgb.b as f32 / 255.0);

        let l = 0.412_221_47 * r + 0.536_332_55 * g + 0.051_445_995 * b;
        let m = 0.211_903_5 * r + 0.680_699_5 * g + 0.107_396_96 * b;
        let s = 0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.210_454_26 * l_ + 0.793_617_8 * m_ - 0.004_072_047 * s_,
            a: 1.977_998_5 * l_ - 2.428_592_2 * m_ + 0.450_593_7 * s_,
            b: 0.025_904_037 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_,
        }
    }
}

impl From<Oklab> for Rgb {
    /// Convert back to 8-bit sRGB, clamping out-of-gamut channels.
    fn from(lab: Oklab) -> Self {
        let l_ = lab.l + 0.396_337_78 * lab.a + 0.215_803_76 * lab.b;
        let m_ = lab.l - 0.105_561_346 * lab.a - 0.063_854_17 * lab.b;
        let s_ = lab.l - 0.089_484_18 * lab.a - 1.291_485_5 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s;
        let g = -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s;

        Rgb::new(linear_to_byte(r), linear_to_byte(g), linear_to_byte(b))
    }
}
