//! Color vision deficiency simulation
//!
//! Applies fixed linear approximations of dichromatic and anomalous
//! trichromatic vision to individual colors or whole palettes. The
//! transforms operate directly on gamma-encoded channel values normalized
//! to [0, 1] — a deliberate simplification over physiologically exact
//! LMS-space simulation, matching common design-tool previews.

use crate::color::codec::{hex_to_rgb, rgb_to_hex, Rgb};
use crate::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grayscale weights for complete achromatopsia
const GRAYSCALE_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Simulation matrices, row-major, applied to [r, g, b] in [0, 1]
const PROTANOPIA: [[f64; 3]; 3] = [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]];
const PROTANOMALY: [[f64; 3]; 3] = [[0.817, 0.183, 0.0], [0.333, 0.667, 0.0], [0.0, 0.125, 0.875]];
const DEUTERANOPIA: [[f64; 3]; 3] = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];
const DEUTERANOMALY: [[f64; 3]; 3] = [[0.8, 0.2, 0.0], [0.258, 0.742, 0.0], [0.0, 0.142, 0.858]];
const TRITANOPIA: [[f64; 3]; 3] = [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]];
const TRITANOMALY: [[f64; 3]; 3] = [[0.967, 0.033, 0.0], [0.0, 0.733, 0.267], [0.0, 0.183, 0.817]];
const ACHROMATOPSIA: [[f64; 3]; 3] = [GRAYSCALE_WEIGHTS, GRAYSCALE_WEIGHTS, GRAYSCALE_WEIGHTS];

/// A simulated color vision deficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvdType {
    /// Unmodified vision; simulation is the identity
    Normal,
    /// Red-blind
    Protanopia,
    /// Red-weak
    Protanomaly,
    /// Green-blind
    Deuteranopia,
    /// Green-weak
    Deuteranomaly,
    /// Blue-blind
    Tritanopia,
    /// Blue-weak
    Tritanomaly,
    /// Complete color blindness
    Achromatopsia,
    /// Partial color blindness
    Achromatomaly,
}

impl CvdType {
    /// Every deficiency type, in presentation order
    pub const ALL: [CvdType; 9] = [
        CvdType::Normal,
        CvdType::Protanopia,
        CvdType::Protanomaly,
        CvdType::Deuteranopia,
        CvdType::Deuteranomaly,
        CvdType::Tritanopia,
        CvdType::Tritanomaly,
        CvdType::Achromatopsia,
        CvdType::Achromatomaly,
    ];

    /// Human-readable label for selection menus
    pub fn label(self) -> &'static str {
        match self {
            CvdType::Normal => "Original Palette",
            CvdType::Protanopia => "Protanopia (Red-blind)",
            CvdType::Protanomaly => "Protanomaly (Red-weak)",
            CvdType::Deuteranopia => "Deuteranopia (Green-blind)",
            CvdType::Deuteranomaly => "Deuteranomaly (Green-weak)",
            CvdType::Tritanopia => "Tritanopia (Blue-blind)",
            CvdType::Tritanomaly => "Tritanomaly (Blue-weak)",
            CvdType::Achromatopsia => "Achromatopsia (Complete)",
            CvdType::Achromatomaly => "Achromatomaly (Partial)",
        }
    }

    /// The fixed transform for this type, if it is matrix-based
    ///
    /// `Normal` and `Achromatomaly` return `None`: the former is the
    /// identity, the latter a blend handled separately.
    fn matrix(self) -> Option<&'static [[f64; 3]; 3]> {
        match self {
            CvdType::Normal | CvdType::Achromatomaly => None,
            CvdType::Protanopia => Some(&PROTANOPIA),
            CvdType::Protanomaly => Some(&PROTANOMALY),
            CvdType::Deuteranopia => Some(&DEUTERANOPIA),
            CvdType::Deuteranomaly => Some(&DEUTERANOMALY),
            CvdType::Tritanopia => Some(&TRITANOPIA),
            CvdType::Tritanomaly => Some(&TRITANOMALY),
            CvdType::Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }
}

impl fmt::Display for CvdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CvdType {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "original" => Ok(CvdType::Normal),
            "protanopia" => Ok(CvdType::Protanopia),
            "protanomaly" => Ok(CvdType::Protanomaly),
            "deuteranopia" => Ok(CvdType::Deuteranopia),
            "deuteranomaly" => Ok(CvdType::Deuteranomaly),
            "tritanopia" => Ok(CvdType::Tritanopia),
            "tritanomaly" => Ok(CvdType::Tritanomaly),
            "achromatopsia" => Ok(CvdType::Achromatopsia),
            "achromatomaly" => Ok(CvdType::Achromatomaly),
            _ => Err(PaletteError::processing(format!(
                "Unknown color vision deficiency type: {}",
                s
            ))),
        }
    }
}

/// Luminance-weighted gray value of a color, rounded to the nearest integer
fn grayscale(rgb: Rgb) -> f64 {
    (GRAYSCALE_WEIGHTS[0] * f64::from(rgb.r)
        + GRAYSCALE_WEIGHTS[1] * f64::from(rgb.g)
        + GRAYSCALE_WEIGHTS[2] * f64::from(rgb.b))
    .round()
}

/// Simulate how a color appears under a color vision deficiency
///
/// A pure function of `(rgb, cvd_type)`: identical inputs always yield
/// identical outputs.
///
/// - `Normal` returns the input unchanged.
/// - Matrix types multiply the normalized channels by the type's fixed
///   3x3 matrix, clamp to [0, 1], and rescale.
/// - `Achromatomaly` blends the color 50/50 with its luminance-weighted
///   gray (the canonical variant chosen for this library; see DESIGN.md).
///
/// # Example
///
/// ```
/// use okpalette::color::codec::Rgb;
/// use okpalette::cvd::{simulate, CvdType};
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(simulate(red, CvdType::Normal), red);
/// assert_eq!(simulate(red, CvdType::Protanopia), Rgb::new(145, 142, 0));
/// ```
pub fn simulate(rgb: Rgb, cvd_type: CvdType) -> Rgb {
    match cvd_type {
        CvdType::Normal => rgb,
        CvdType::Achromatomaly => {
            let gray = grayscale(rgb);
            Rgb::from_float(
                (f64::from(rgb.r) + gray) / 2.0,
                (f64::from(rgb.g) + gray) / 2.0,
                (f64::from(rgb.b) + gray) / 2.0,
            )
        }
        _ => {
            // matrix() is Some for every remaining variant
            let m = cvd_type.matrix().unwrap_or(&ACHROMATOPSIA);
            let [r, g, b] = rgb.to_normalized();

            let apply = |row: &[f64; 3]| {
                let v = row[0] * r + row[1] * g + row[2] * b;
                v.clamp(0.0, 1.0) * 255.0
            };

            Rgb::from_float(apply(&m[0]), apply(&m[1]), apply(&m[2]))
        }
    }
}

/// Simulate a deficiency on a hex color string
///
/// Malformed input decodes to black before simulation (lenient codec).
pub fn simulate_hex(hex: &str, cvd_type: CvdType) -> String {
    rgb_to_hex(simulate(hex_to_rgb(hex), cvd_type))
}

/// Simulate a deficiency across an entire palette of hex strings
pub fn simulate_palette(colors: &[String], cvd_type: CvdType) -> Vec<String> {
    colors
        .iter()
        .map(|hex| simulate_hex(hex, cvd_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_identity() {
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(12, 200, 99),
        ] {
            assert_eq!(simulate(rgb, CvdType::Normal), rgb);
        }
    }

    #[test]
    fn test_protanopia_red() {
        // 0.567 * 255 = 144.585 -> 145, 0.558 * 255 = 142.29 -> 142
        let out = simulate(Rgb::new(255, 0, 0), CvdType::Protanopia);
        assert_eq!(out, Rgb::new(145, 142, 0));
        assert_eq!(simulate_hex("#FF0000", CvdType::Protanopia), "#918E00");
    }

    #[test]
    fn test_deuteranopia_red() {
        // 0.7 is not exactly representable: 0.7 * 255 lands just below
        // 178.5 and rounds down.
        let out = simulate(Rgb::new(255, 0, 0), CvdType::Deuteranopia);
        assert_eq!(out, Rgb::new(159, 178, 0));
    }

    #[test]
    fn test_achromatopsia_is_uniform_gray() {
        let out = simulate(Rgb::new(255, 0, 0), CvdType::Achromatopsia);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(out.r, 76);
    }

    #[test]
    fn test_achromatomaly_blend() {
        // gray(255, 0, 0) = 76; blend: (255+76)/2 = 165.5 -> 166, (0+76)/2 = 38
        let out = simulate(Rgb::new(255, 0, 0), CvdType::Achromatomaly);
        assert_eq!(out, Rgb::new(166, 38, 38));
    }

    #[test]
    fn test_white_is_fixed_point_for_all_types() {
        // Every matrix row sums to 1.0, and gray(white) = 255, so white
        // maps to itself under every simulation.
        let white = Rgb::new(255, 255, 255);
        for cvd_type in CvdType::ALL {
            assert_eq!(simulate(white, cvd_type), white, "{:?}", cvd_type);
        }
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let rgb = Rgb::new(87, 160, 43);
        for cvd_type in CvdType::ALL {
            assert_eq!(simulate(rgb, cvd_type), simulate(rgb, cvd_type));
        }
    }

    #[test]
    fn test_simulate_palette() {
        let palette = vec!["#FF0000".to_string(), "#00FF00".to_string()];
        let out = simulate_palette(&palette, CvdType::Normal);
        assert_eq!(out, palette);

        let out = simulate_palette(&palette, CvdType::Protanopia);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "#918E00");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("protanopia".parse::<CvdType>().unwrap(), CvdType::Protanopia);
        assert_eq!("Deuteranomaly".parse::<CvdType>().unwrap(), CvdType::Deuteranomaly);
        assert_eq!("original".parse::<CvdType>().unwrap(), CvdType::Normal);
        assert!("xyz".parse::<CvdType>().is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<&str> = CvdType::ALL.iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CvdType::ALL.len());
    }
}
