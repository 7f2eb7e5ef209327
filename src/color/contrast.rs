//! WCAG 2.1 relative luminance and contrast ratio
//!
//! Implements the published WCAG formulas, including the 0.03928 transfer
//! threshold from the standard (see [`crate::constants::wcag`] for why this
//! differs from the sRGB threshold used elsewhere in the crate).

use crate::color::codec::{hex_to_rgb, Rgb};
use crate::constants::wcag;
use serde::{Deserialize, Serialize};

/// WCAG conformance level reached by a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below every conformance threshold
    Fail,
    /// >= 3.0, sufficient for large text at level AA
    AaLarge,
    /// >= 4.5, sufficient for normal text at level AA
    Aa,
    /// >= 7.0, sufficient for normal text at level AAA
    Aaa,
}

impl WcagLevel {
    /// Classify a contrast ratio against the WCAG thresholds
    ///
    /// Classification only; nothing in the library enforces a level.
    pub fn classify(ratio: f64) -> Self {
        if ratio >= wcag::AAA_THRESHOLD {
            WcagLevel::Aaa
        } else if ratio >= wcag::AA_THRESHOLD {
            WcagLevel::Aa
        } else if ratio >= wcag::AA_LARGE_THRESHOLD {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }
}

/// WCAG 2.1 relative luminance of a color, in [0, 1]
///
/// Channels are normalized, linearized with the WCAG piecewise function
/// (threshold 0.03928), and weighted by the Rec. 709 coefficients.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = rgb.to_normalized().map(|v| {
        if v <= wcag::LUMINANCE_THRESHOLD {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });

    wcag::LUMINANCE_WEIGHTS[0] * linear[0]
        + wcag::LUMINANCE_WEIGHTS[1] * linear[1]
        + wcag::LUMINANCE_WEIGHTS[2] * linear[2]
}

/// WCAG contrast ratio between two colors
///
/// Computed as `(Lmax + 0.05) / (Lmin + 0.05)`; the result is always
/// >= 1.0 and symmetric in its arguments.
///
/// # Example
///
/// ```
/// use okpalette::color::codec::Rgb;
/// use okpalette::color::contrast::contrast_ratio;
///
/// let ratio = contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);

    (lighter + wcag::CONTRAST_OFFSET) / (darker + wcag::CONTRAST_OFFSET)
}

/// Contrast ratio between two hex color strings
///
/// Uses the lenient hex decoder: malformed input is treated as black.
pub fn contrast_ratio_hex(a: &str, b: &str) -> f64 {
    contrast_ratio(hex_to_rgb(a), hex_to_rgb(b))
}
