//! Palette export documents
//!
//! Encodes the extractor's output for design-tool consumption: a flat
//! hex list for clipboards and a structured JSON document pairing each
//! color with its hex, OKLCH string, normalized RGB, and accessibility
//! metadata. Field names follow the established camelCase document shape.

use crate::color::codec::hex_to_rgb;
use crate::constants::wcag;
use crate::{PaletteColor, PaletteError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete palette export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDocument {
    /// Document title
    pub name: String,
    /// Short human-readable description
    pub description: String,
    /// Generation timestamp
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
    /// One entry per palette color, in palette order
    pub colors: Vec<PaletteEntry>,
}

/// A single exported color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Sequential name (`Color 1`, `Color 2`, ...)
    pub name: String,
    /// Uppercase `#RRGGBB`
    pub hex: String,
    /// CSS `oklch()` string
    pub oklch: String,
    /// Channels normalized to [0, 1]
    pub rgb: [f64; 3],
    /// Contrast and WCAG conformance metadata
    pub accessibility: Accessibility,
}

/// Accessibility metadata for one color
///
/// Each WCAG flag passes when either the white or the black pairing
/// reaches the corresponding threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    /// Contrast ratio against `#FFFFFF`, rounded to 2 decimals
    #[serde(rename = "contrastWhite")]
    pub contrast_white: f64,
    /// Contrast ratio against `#000000`, rounded to 2 decimals
    #[serde(rename = "contrastBlack")]
    pub contrast_black: f64,
    #[serde(rename = "wcagAALarge")]
    pub wcag_aa_large: bool,
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl PaletteDocument {
    /// Build an export document for a palette, timestamped now
    pub fn new(name: impl Into<String>, palette: &[PaletteColor]) -> Self {
        Self {
            name: name.into(),
            description: "Color palette extracted from image".to_string(),
            generated_at: Utc::now(),
            colors: palette
                .iter()
                .enumerate()
                .map(|(index, color)| PaletteEntry::new(index, color))
                .collect(),
        }
    }

    /// Serialize the document as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ProcessingError`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::processing(format!("Failed to serialize palette: {}", e)))
    }

    /// Write the document to a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ProcessingError`] if serialization or the
    /// write fails.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::processing(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

impl PaletteEntry {
    fn new(index: usize, color: &PaletteColor) -> Self {
        let best = color.contrast_white.max(color.contrast_black);
        Self {
            name: format!("Color {}", index + 1),
            hex: color.hex.clone(),
            oklch: crate::color::convert::oklch_to_css(color.oklch),
            rgb: hex_to_rgb(&color.hex).to_normalized(),
            accessibility: Accessibility {
                contrast_white: round2(color.contrast_white),
                contrast_black: round2(color.contrast_black),
                wcag_aa_large: best >= wcag::AA_LARGE_THRESHOLD,
                wcag_aa: best >= wcag::AA_THRESHOLD,
                wcag_aaa: best >= wcag::AAA_THRESHOLD,
            },
        }
    }
}

/// Render a palette as a comma-separated hex list
///
/// The clipboard form: `#FF0000, #00FF00, #0000FF`.
pub fn hex_list(palette: &[PaletteColor]) -> String {
    palette
        .iter()
        .map(|c| c.hex.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
