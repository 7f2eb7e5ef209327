//! Color codec, conversion, and contrast module
//!
//! This module handles hex encoding/decoding, color space conversions
//! between sRGB and the OKLab family, and WCAG contrast evaluation.

pub mod codec;
pub mod contrast;
pub mod convert;

pub use codec::{hex_to_rgb, parse_hex, rgb_to_hex, Rgb};
pub use contrast::{contrast_ratio, contrast_ratio_hex, relative_luminance, WcagLevel};
pub use convert::{oklch_to_css, oklch_to_rgb, rgb_to_oklch, Oklab, Oklch};
