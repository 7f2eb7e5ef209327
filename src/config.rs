//! Configuration for the palette extraction pipeline
//!
//! All tunable parameters live in a single serde-backed struct so that
//! extraction runs are reproducible and configurations can be stored as
//! JSON alongside exported palettes.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use okpalette::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), okpalette::PaletteError>(())
//! ```

use crate::constants::extraction;
use crate::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration for a palette extraction run
///
/// Can be serialized to/from JSON for reproducible extractions. Fields
/// omitted from a JSON document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Number of palette colors to produce (accepted range 1-20)
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,

    /// Approximate upper bound on sampled pixels
    #[serde(default = "default_sample_cap")]
    pub sample_cap: usize,

    /// Fixed k-means iteration count
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Pixels with alpha at or below this value are ignored
    #[serde(default = "default_min_alpha")]
    pub min_alpha: u8,

    /// Seed for centroid initialization
    ///
    /// `None` draws from entropy, so repeated runs on the same image may
    /// produce different (equally valid) palettes. Set a seed to make the
    /// output bit-for-bit reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_palette_size() -> usize {
    extraction::DEFAULT_PALETTE_SIZE
}

fn default_sample_cap() -> usize {
    extraction::SAMPLE_CAP
}

fn default_iterations() -> usize {
    extraction::KMEANS_ITERATIONS
}

fn default_min_alpha() -> u8 {
    extraction::MIN_ALPHA
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            palette_size: default_palette_size(),
            sample_cap: default_sample_cap(),
            iterations: default_iterations(),
            min_alpha: default_min_alpha(),
            seed: None,
        }
    }
}

impl ExtractionConfig {
    /// Configuration with a specific palette size, defaults elsewhere
    pub fn with_palette_size(palette_size: usize) -> Self {
        Self {
            palette_size,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ConfigError`] if the file cannot be read
    /// or does not parse as a configuration document.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::config(format!("Failed to read {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| PaletteError::config(format!("Failed to parse {}", path.display()), e))
    }

    /// Save configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ConfigError`] if serialization or the
    /// write fails.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| PaletteError::config(format!("Failed to write {}", path.display()), e))
    }
}
