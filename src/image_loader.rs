//! Image loading and pre-sampling downscale
//!
//! Single entry point for turning an image file into the RGBA pixel
//! buffer the extractor consumes. Decoding uses the `image` crate; large
//! images are downscaled so their longest side is at most
//! [`MAX_DIMENSION`](crate::constants::extraction::MAX_DIMENSION) pixels,
//! which together with stride sampling keeps clustering cost near-constant
//! regardless of source resolution. Images already within the bound are
//! never upscaled.

use crate::constants::extraction::MAX_DIMENSION;
use crate::extract::PixelBuffer;
use crate::{PaletteError, Result};
use std::path::Path;
use tracing::debug;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Load an image from disk as an RGBA pixel buffer
///
/// The format is detected from the file extension, the image is decoded,
/// downscaled to fit [`MAX_DIMENSION`](crate::constants::extraction::MAX_DIMENSION)
/// when larger, and converted to row-major RGBA8.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Errors
///
/// Returns [`PaletteError::ImageLoadError`] if:
/// - The extension is missing or unsupported
/// - The file cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use okpalette::image_loader::load_image;
/// use std::path::Path;
///
/// let buffer = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", buffer.width(), buffer.height());
/// # Ok::<(), okpalette::PaletteError>(())
/// ```
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(PaletteError::ImageLoadError {
            message: format!("Unknown image format for file: {}", path.display()),
            source: None,
        });
    }

    let reader = image::ImageReader::open(path).map_err(|e| {
        PaletteError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        PaletteError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let (width, height) = (img.width(), img.height());
    let img = if width.max(height) > MAX_DIMENSION {
        img.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        img
    };

    debug!(
        source_width = width,
        source_height = height,
        width = img.width(),
        height = img.height(),
        "decoded image"
    );

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}
