//! Error types for the okpalette library

use thiserror::Error;

/// Result type alias for okpalette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette extraction and color operations
///
/// The core conversion paths favor lenient fallbacks over errors (malformed
/// hex decodes to black, out-of-range palette sizes yield an empty palette).
/// These variants are surfaced only by the strict entry points
/// ([`parse_hex`](crate::color::codec::parse_hex),
/// [`PaletteExtractor::try_extract`](crate::extract::PaletteExtractor::try_extract))
/// and by the I/O boundary.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Color string did not match `#RRGGBB` / `RRGGBB`
    #[error("Malformed color input: {input:?}")]
    MalformedColorInput { input: String },

    /// Requested palette size outside the accepted range
    #[error("Invalid palette size: {requested} (accepted range 1-{max})")]
    InvalidPaletteSize { requested: usize, max: usize },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl PaletteError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a generic processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PaletteError::MalformedColorInput { input } => {
                format!("\"{}\" is not a valid hex color (expected #RRGGBB).", input)
            }
            PaletteError::InvalidPaletteSize { requested, max } => {
                format!(
                    "Cannot extract {} colors. Please request between 1 and {} colors.",
                    requested, max
                )
            }
            _ => "Palette extraction failed. Please try with a different image.".to_string(),
        }
    }
}
