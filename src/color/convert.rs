//! Color space conversion utilities
//!
//! Provides conversions between device RGB and the OKLab family:
//! - sRGB transfer function (encoded <-> linear)
//! - RGB <-> OKLab via the LMS cone-response matrices
//! - OKLab <-> OKLCH (polar form)
//! - CSS `oklch()` string rendering
//!
//! All math is performed in `f64`; a full RGB -> OKLCH -> RGB round trip
//! reproduces the input within ±1 per 8-bit channel for in-gamut colors.

use crate::color::codec::Rgb;
use crate::constants::oklab;
use serde::{Deserialize, Serialize};

/// A color in the Cartesian OKLab space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    /// Perceptual lightness, approximately [0, 1]
    pub l: f64,
    /// Green-red axis, roughly [-0.4, 0.4]
    pub a: f64,
    /// Blue-yellow axis, roughly [-0.4, 0.4]
    pub b: f64,
}

/// A color in the polar OKLCH space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Perceptual lightness, clamped to [0, 1]
    pub l: f64,
    /// Chroma, >= 0
    pub c: f64,
    /// Hue in degrees, [0, 360); 0 when chroma vanishes
    pub h: f64,
}

/// sRGB electro-optical transfer function (encoded -> linear)
///
/// Input and output are in [0, 1].
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= oklab::SRGB_TO_LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse sRGB transfer function (linear -> encoded)
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= oklab::LINEAR_TO_SRGB_THRESHOLD {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn multiply(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Convert an 8-bit RGB color to OKLab
pub fn rgb_to_oklab(rgb: Rgb) -> Oklab {
    let [r, g, b] = rgb.to_normalized();
    let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];

    let lms = multiply(&oklab::LINEAR_SRGB_TO_LMS, linear);
    let lms_root = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];

    let [l, a, b] = multiply(&oklab::LMS_TO_OKLAB, lms_root);
    Oklab { l, a, b }
}

/// Convert an 8-bit RGB color to OKLCH
///
/// Lightness is clamped to [0, 1] and chroma to >= 0. The hue is reported
/// in degrees normalized to [0, 360); a neutral color (a = b = 0) or any
/// numerically undefined hue maps to 0.
///
/// # Example
///
/// ```
/// use okpalette::color::codec::Rgb;
/// use okpalette::color::convert::rgb_to_oklch;
///
/// let red = rgb_to_oklch(Rgb::new(255, 0, 0));
/// assert!((red.l - 0.628).abs() < 0.005);
/// ```
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    oklab_to_oklch(rgb_to_oklab(rgb))
}

/// Convert OKLab to its polar OKLCH form
pub fn oklab_to_oklch(lab: Oklab) -> Oklch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();

    let mut h = lab.b.atan2(lab.a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    if h.is_nan() || h >= 360.0 {
        h = 0.0;
    }

    Oklch {
        l: lab.l.clamp(0.0, 1.0),
        c: c.max(0.0),
        h,
    }
}

/// Convert polar OKLCH back to Cartesian OKLab
pub fn oklch_to_oklab(lch: Oklch) -> Oklab {
    let h_rad = lch.h.to_radians();
    Oklab {
        l: lch.l,
        a: lch.c * h_rad.cos(),
        b: lch.c * h_rad.sin(),
    }
}

/// Convert an OKLCH color to 8-bit RGB
///
/// Out-of-gamut inputs clip to the nearest representable channel value.
pub fn oklch_to_rgb(lch: Oklch) -> Rgb {
    oklab_to_rgb(oklch_to_oklab(lch))
}

/// Convert an OKLab color to 8-bit RGB, clipping out-of-gamut values
pub fn oklab_to_rgb(lab: Oklab) -> Rgb {
    let lms_root = multiply(&oklab::OKLAB_TO_LMS, [lab.l, lab.a, lab.b]);
    let lms = [
        lms_root[0] * lms_root[0] * lms_root[0],
        lms_root[1] * lms_root[1] * lms_root[1],
        lms_root[2] * lms_root[2] * lms_root[2],
    ];

    let [r, g, b] = multiply(&oklab::LMS_TO_LINEAR_SRGB, lms);

    Rgb::from_float(
        linear_to_srgb(r.clamp(0.0, 1.0)) * 255.0,
        linear_to_srgb(g.clamp(0.0, 1.0)) * 255.0,
        linear_to_srgb(b.clamp(0.0, 1.0)) * 255.0,
    )
}

/// Render an OKLCH color in CSS `oklch()` syntax
///
/// Lightness is shown as a percentage with one decimal, chroma with three
/// decimals, hue with one decimal: `oklch(62.8% 0.258 29.2)`.
pub fn oklch_to_css(lch: Oklch) -> String {
    format!("oklch({:.1}% {:.3} {:.1})", lch.l * 100.0, lch.c, lch.h)
}
