//! Integration tests for the complete palette extraction pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Image decoding and downscaling
//! - Pixel sampling and k-means clustering
//! - OKLCH conversion and contrast metadata
//! - CVD simulation over extracted palettes
//! - Export document generation
//! - Error handling for edge cases
//!
//! Image-file tests write small synthetic PNGs to the system temp
//! directory; everything else runs on in-memory buffers.

use okpalette::{
    analyze_image_file, analyze_pixels, hex_list, hex_to_rgb, CvdType, ExtractionConfig,
    PaletteDocument, PaletteError, PixelBuffer, Rgb,
};
use std::path::PathBuf;

fn seeded_config(palette_size: usize) -> ExtractionConfig {
    ExtractionConfig {
        palette_size,
        seed: Some(11),
        ..ExtractionConfig::default()
    }
}

/// Write a synthetic PNG split into four solid quadrants.
fn write_quadrant_png(name: &str) -> PathBuf {
    let colors = [
        image::Rgba([255u8, 0, 0, 255]),
        image::Rgba([0, 255, 0, 255]),
        image::Rgba([0, 0, 255, 255]),
        image::Rgba([255, 255, 0, 255]),
    ];
    let img = image::RgbaImage::from_fn(64, 64, |x, y| {
        let quadrant = (y / 32) as usize * 2 + (x / 32) as usize;
        colors[quadrant]
    });

    let path = std::env::temp_dir().join(name);
    img.save(&path).expect("failed to write test image");
    path
}

// ============================================================================
// End-to-End Pipeline Tests
// ============================================================================

#[test]
fn test_analyze_image_file_quadrants() {
    let path = write_quadrant_png("okpalette_quadrants.png");

    let palette = analyze_image_file(&path, &seeded_config(4)).unwrap();
    assert_eq!(palette.len(), 4);

    for color in &palette {
        // Hex format
        assert!(color.hex.starts_with('#'));
        assert_eq!(color.hex.len(), 7);

        // OKLCH invariants
        assert!(color.oklch.l >= 0.0 && color.oklch.l <= 1.0);
        assert!(color.oklch.c >= 0.0);
        assert!(color.oklch.h >= 0.0 && color.oklch.h < 360.0);

        // Contrast ratios are within WCAG bounds (tolerance covers the
        // floating-point sum of the luminance weights)
        assert!(color.contrast_white >= 1.0 && color.contrast_white <= 21.0 + 1e-9);
        assert!(color.contrast_black >= 1.0 && color.contrast_black <= 21.0 + 1e-9);
    }
}

#[test]
fn test_analyze_image_file_is_reproducible_with_seed() {
    let path = write_quadrant_png("okpalette_reproducible.png");
    let config = seeded_config(4);

    let first = analyze_image_file(&path, &config).unwrap();
    let second = analyze_image_file(&path, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analyze_uniform_image_converges_to_single_color() {
    let img = image::RgbaImage::from_pixel(16, 16, image::Rgba([40, 80, 120, 255]));
    let path = std::env::temp_dir().join("okpalette_uniform.png");
    img.save(&path).unwrap();

    let palette = analyze_image_file(&path, &seeded_config(3)).unwrap();
    assert_eq!(palette.len(), 3);
    // Every centroid lands on the only color present.
    for color in &palette {
        assert_eq!(color.hex, "#285078");
    }
}

#[test]
fn test_analyze_pixels_black_and_white_buffer() {
    let pixels = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
    ];
    let buffer = PixelBuffer::from_rgb_pixels(2, 2, &pixels).unwrap();

    let mut palette = analyze_pixels(&buffer, &seeded_config(2));
    palette.sort_by(|a, b| a.hex.cmp(&b.hex));

    let hexes: Vec<&str> = palette.iter().map(|c| c.hex.as_str()).collect();
    assert_eq!(hexes, ["#000000", "#FFFFFF"]);
}

// ============================================================================
// CVD Simulation over Extracted Palettes
// ============================================================================

#[test]
fn test_cvd_simulation_over_palette() {
    let path = write_quadrant_png("okpalette_cvd.png");
    let palette = analyze_image_file(&path, &seeded_config(4)).unwrap();

    for color in &palette {
        // Normal vision preserves the palette exactly.
        assert_eq!(color.simulated_hex(CvdType::Normal), color.hex);

        // Achromatopsia produces a uniform gray for any input.
        let gray = hex_to_rgb(&color.simulated_hex(CvdType::Achromatopsia));
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }
}

// ============================================================================
// Export Document Tests
// ============================================================================

#[test]
fn test_export_document_end_to_end() {
    let path = write_quadrant_png("okpalette_export.png");
    let palette = analyze_image_file(&path, &seeded_config(4)).unwrap();

    let doc = PaletteDocument::new("Accessible Color Palette", &palette);
    let json = doc.to_json_pretty().unwrap();

    assert!(json.contains("\"Accessible Color Palette\""));
    assert!(json.contains("\"Color 1\""));
    assert!(json.contains("\"generatedAt\""));
    assert!(json.contains("\"contrastWhite\""));

    let flat = hex_list(&palette);
    assert_eq!(flat.split(", ").count(), 4);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_analyze_file_not_found() {
    let result = analyze_image_file(
        std::path::Path::new("nonexistent_file.png"),
        &ExtractionConfig::default(),
    );

    assert!(result.is_err());
    match result.unwrap_err() {
        PaletteError::ImageLoadError { .. } => {}
        err => panic!("Expected ImageLoadError, got: {:?}", err),
    }
}

#[test]
fn test_analyze_unsupported_extension() {
    let result = analyze_image_file(
        std::path::Path::new("palette.txt"),
        &ExtractionConfig::default(),
    );

    assert!(result.is_err());
}

#[test]
fn test_out_of_range_palette_size_yields_empty() {
    let path = write_quadrant_png("okpalette_bad_k.png");

    for k in [0, 21] {
        let palette = analyze_image_file(&path, &seeded_config(k)).unwrap();
        assert!(palette.is_empty(), "k = {}", k);
    }
}

#[test]
fn test_fully_transparent_image_yields_gray_palette() {
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([200, 10, 10, 0]));
    let path = std::env::temp_dir().join("okpalette_transparent.png");
    img.save(&path).unwrap();

    let palette = analyze_image_file(&path, &seeded_config(2)).unwrap();
    assert_eq!(palette.len(), 2);
    for color in &palette {
        assert_eq!(color.hex, "#808080");
    }
}
