//! # okpalette
//!
//! A Rust crate for extracting accessible color palettes from raster images.
//!
//! This library provides deterministic, bounded-cost color analysis:
//! - Dominant-color extraction via sampled k-means clustering
//! - Conversion between sRGB, OKLab, and OKLCH (with CSS rendering)
//! - Color-vision-deficiency simulation via fixed linear transforms
//! - WCAG 2.1 relative luminance and contrast scoring
//!
//! ## Example
//!
//! ```rust,no_run
//! use okpalette::{analyze_image_file, ExtractionConfig};
//! use std::path::Path;
//!
//! let config = ExtractionConfig::default();
//! let palette = analyze_image_file(Path::new("photo.jpg"), &config)?;
//! for color in &palette {
//!     println!("{} W:{:.1} B:{:.1}", color.hex, color.contrast_white, color.contrast_black);
//! }
//! # Ok::<(), okpalette::PaletteError>(())
//! ```
//!
//! All operations are synchronous, stateless computations over value
//! types; independent images may be analyzed concurrently without shared
//! state. The only I/O is the optional image-file entry point.

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod cvd;
pub mod error;
pub mod export;
pub mod extract;
pub mod image_loader;

pub use color::{
    contrast_ratio, contrast_ratio_hex, hex_to_rgb, oklch_to_css, oklch_to_rgb, parse_hex,
    relative_luminance, rgb_to_hex, rgb_to_oklch, Oklab, Oklch, Rgb, WcagLevel,
};
pub use config::ExtractionConfig;
pub use cvd::{simulate, simulate_hex, simulate_palette, CvdType};
pub use error::{PaletteError, Result};
pub use export::{hex_list, PaletteDocument};
pub use extract::{PaletteExtractor, PixelBuffer};

/// A palette color with its derived representations
///
/// Pairs the raw hex value with the perceptual OKLCH form and the two
/// contrast ratios an accessibility-minded caller needs most often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Uppercase `#RRGGBB`
    pub hex: String,
    /// Perceptual representation
    pub oklch: Oklch,
    /// Contrast ratio against white
    pub contrast_white: f64,
    /// Contrast ratio against black
    pub contrast_black: f64,
}

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

impl PaletteColor {
    /// Derive every representation from an RGB value
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            oklch: rgb_to_oklch(rgb),
            contrast_white: contrast_ratio(rgb, WHITE),
            contrast_black: contrast_ratio(rgb, BLACK),
        }
    }

    /// The color as seen under a color vision deficiency, as hex
    pub fn simulated_hex(&self, cvd_type: CvdType) -> String {
        simulate_hex(&self.hex, cvd_type)
    }

    /// CSS `oklch()` rendering of the perceptual form
    pub fn oklch_css(&self) -> String {
        oklch_to_css(self.oklch)
    }
}

/// Extract a palette from a decoded pixel buffer
///
/// Runs the configured extraction and derives the OKLCH and contrast
/// metadata for each resulting color. Out-of-range palette sizes and
/// zero-pixel buffers yield an empty palette (lenient behavior); use
/// [`PaletteExtractor::try_extract`] for strict validation.
pub fn analyze_pixels(buffer: &PixelBuffer, config: &ExtractionConfig) -> Vec<PaletteColor> {
    PaletteExtractor::with_config(config.clone())
        .extract(buffer)
        .into_iter()
        .map(PaletteColor::from_rgb)
        .collect()
}

/// Extract a palette from an image file
///
/// This is the main entry point for file-based analysis: the image is
/// decoded, downscaled to the sampling bound, and clustered.
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `config` - Extraction parameters
///
/// # Errors
///
/// Returns [`PaletteError::ImageLoadError`] if the file cannot be loaded
/// or decoded.
pub fn analyze_image_file(path: &Path, config: &ExtractionConfig) -> Result<Vec<PaletteColor>> {
    let buffer = image_loader::load_image(path)?;
    Ok(analyze_pixels(&buffer, config))
}
