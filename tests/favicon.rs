use image::Rgb;
use placeholder_gen::placeholders::{create_favicon, draw_favicon, FAVICON_SIZES};
use placeholder_gen::typeface::Typeface;
use placeholder_gen::FontPaths;
use std::path::PathBuf;
use tempfile::TempDir;

fn missing_fonts() -> FontPaths {
    FontPaths {
        bold: PathBuf::from("/nonexistent/bold.ttf"),
        regular: PathBuf::from("/nonexistent/regular.ttf"),
    }
}

#[test]
fn test_favicon_holds_three_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("favicon.ico");

    let sizes = create_favicon(&path, 32, &missing_fonts()).expect("favicon generation failed");
    assert_eq!(sizes, FAVICON_SIZES.to_vec());

    let bytes = std::fs::read(&path).expect("Failed to read favicon");
    // ICONDIR: reserved, type 1 (icon), entry count
    assert_eq!(&bytes[0..4], &[0, 0, 1, 0]);
    assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 3);

    let widths: Vec<u8> = (0..3).map(|i| bytes[6 + i * 16]).collect();
    let heights: Vec<u8> = (0..3).map(|i| bytes[7 + i * 16]).collect();
    assert_eq!(widths, vec![16, 32, 48]);
    assert_eq!(heights, vec![16, 32, 48]);

    // The decoder picks the largest frame
    let decoded = image::open(&path).expect("Failed to decode favicon").to_rgb8();
    assert_eq!(decoded.dimensions(), (48, 48));
    assert_eq!(*decoded.get_pixel(47, 47), Rgb([0x00, 0x52, 0xFF]));
}

#[test]
fn test_unusual_nominal_size_is_added() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("favicon.ico");

    let sizes = create_favicon(&path, 24, &missing_fonts()).expect("favicon generation failed");
    assert_eq!(sizes, vec![16, 24, 32, 48]);
}

#[test]
fn test_every_frame_keeps_background_corners() {
    for size in FAVICON_SIZES {
        let frame = draw_favicon(size, &Typeface::fallback()).expect("favicon frame");
        assert_eq!((frame.width(), frame.height()), (size, size));
        assert_eq!(frame.pixel(size - 1, size - 1), Rgb([0x00, 0x52, 0xFF]));
        assert_eq!(frame.pixel(size - 1, 0), Rgb([0x00, 0x52, 0xFF]));
    }
}

#[test]
fn test_truetype_letter_lands_inside_every_frame() {
    let fonts = FontPaths::default();
    if !fonts.bold.exists() {
        eprintln!("skipping: {} not installed", fonts.bold.display());
        return;
    }

    let font = Typeface::load(&fonts.bold, 28.0);
    assert!(!font.is_fallback());

    for size in FAVICON_SIZES {
        let frame = draw_favicon(size, &font).expect("favicon frame");
        // The background has no red, so a strong red channel means letter ink
        let letter_pixels = frame.as_image().pixels().filter(|p| p[0] >= 128).count();
        assert!(letter_pixels > 0, "{size}x{size} frame has no white letter pixels");
        assert_eq!(frame.pixel(size - 1, size - 1), Rgb([0x00, 0x52, 0xFF]));
    }
}
