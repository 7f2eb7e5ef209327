//! Pixel buffer representation and stride sampling
//!
//! Clustering cost is bounded by sampling at a stride chosen so that at
//! most roughly [`SAMPLE_CAP`](crate::constants::extraction::SAMPLE_CAP)
//! opaque pixels are retained, independent of source resolution.

use crate::color::codec::Rgb;
use crate::{PaletteError, Result};
use tracing::trace;

/// A decoded image: row-major RGBA, 8 bits per channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a raw RGBA byte buffer
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ProcessingError`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PaletteError::processing(format!(
                "Pixel buffer size mismatch: {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from fully opaque RGB pixels, row-major
    ///
    /// Convenient for synthetic images in tests and benchmarks.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ProcessingError`] if the pixel count does
    /// not match the dimensions.
    pub fn from_rgb_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self> {
        let mut data = Vec::with_capacity(pixels.len() * 4);
        for p in pixels {
            data.extend_from_slice(&[p.r, p.g, p.b, 255]);
        }
        Self::new(width, height, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Sample opaque pixels at a fixed stride
///
/// The stride is `max(1, pixel_count / sample_cap)`, so at most roughly
/// `sample_cap` pixels are visited; of those, only pixels with alpha
/// strictly greater than `min_alpha` are kept.
pub fn sample_pixels(buffer: &PixelBuffer, sample_cap: usize, min_alpha: u8) -> Vec<Rgb> {
    let total = buffer.pixel_count();
    if total == 0 || sample_cap == 0 {
        return Vec::new();
    }

    let step = (total / sample_cap).max(1);
    let data = buffer.data();

    let mut samples = Vec::with_capacity(total.div_ceil(step).min(sample_cap + 1));
    for i in (0..total).step_by(step) {
        let offset = i * 4;
        let alpha = data[offset + 3];
        if alpha > min_alpha {
            samples.push(Rgb::new(data[offset], data[offset + 1], data[offset + 2]));
        }
    }

    trace!(
        total_pixels = total,
        stride = step,
        retained = samples.len(),
        "sampled pixel buffer"
    );

    samples
}
