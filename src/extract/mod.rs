//! Dominant-color palette extraction
//!
//! Samples opaque pixels from a decoded buffer and clusters them with
//! fixed-iteration k-means to produce a small palette of representative
//! colors. Ordering follows the final centroid array; no perceptual
//! sorting is applied.

pub mod kmeans;
pub mod sampler;

pub use sampler::PixelBuffer;

use crate::color::codec::{rgb_to_hex, Rgb};
use crate::config::ExtractionConfig;
use crate::constants::extraction::MAX_PALETTE_SIZE;
use crate::{PaletteError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Palette extractor implementing sampled k-means clustering
///
/// All behavior is driven by an [`ExtractionConfig`]; the extractor itself
/// holds no other state and may be reused across images.
pub struct PaletteExtractor {
    config: ExtractionConfig,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract a palette of representative colors
    ///
    /// Lenient entry point: a palette size outside [1, 20] or a zero-pixel
    /// buffer yields an empty palette rather than an error. A buffer that
    /// contains pixels but no opaque samples yields neutral gray centroids
    /// (the degenerate-initialization fallback).
    ///
    /// Initialization draws from the configured random seed when one is
    /// set, making the output reproducible; unseeded runs draw from
    /// entropy, so only the clustering structure is reproducible, not the
    /// exact colors.
    pub fn extract(&self, buffer: &PixelBuffer) -> Vec<Rgb> {
        let k = self.config.palette_size;
        if k == 0 || k > MAX_PALETTE_SIZE || buffer.pixel_count() == 0 {
            return Vec::new();
        }

        let samples =
            sampler::sample_pixels(buffer, self.config.sample_cap, self.config.min_alpha);

        debug!(
            palette_size = k,
            samples = samples.len(),
            iterations = self.config.iterations,
            "extracting palette"
        );

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        kmeans::cluster(&samples, k, self.config.iterations, &mut rng)
    }

    /// Extract a palette, rejecting invalid palette sizes
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidPaletteSize`] when the configured
    /// palette size is outside [1, 20].
    pub fn try_extract(&self, buffer: &PixelBuffer) -> Result<Vec<Rgb>> {
        let k = self.config.palette_size;
        if k == 0 || k > MAX_PALETTE_SIZE {
            return Err(PaletteError::InvalidPaletteSize {
                requested: k,
                max: MAX_PALETTE_SIZE,
            });
        }
        Ok(self.extract(buffer))
    }

    /// Extract a palette as uppercase `#RRGGBB` strings
    pub fn extract_hex(&self, buffer: &PixelBuffer) -> Vec<String> {
        self.extract(buffer).into_iter().map(rgb_to_hex).collect()
    }
}
