//! PNG and ICO writers

use crate::canvas::Canvas;
use anyhow::{ensure, Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    ColorType, DynamicImage, ImageEncoder,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Write `canvas` as an RGB PNG. The parent directory must already exist.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let mut out_file = create_file(path)?;

    write_png(
        canvas.as_image().as_raw(),
        &mut out_file,
        canvas.width(),
        canvas.height(),
        ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    Ok(())
}

/// Write every canvas as one PNG-compressed entry of a single ICO file
pub fn write_ico(frames: &[Canvas], path: &Path) -> Result<()> {
    ensure!(!frames.is_empty(), "An ICO file needs at least one frame");

    let mut encoded = Vec::with_capacity(frames.len());
    for frame in frames {
        ensure!(
            frame.width() <= 256 && frame.height() <= 256,
            "ICO frames are limited to 256x256, got {}x{}",
            frame.width(),
            frame.height()
        );

        let rgba_image = DynamicImage::ImageRgb8(frame.as_image().clone()).to_rgba8();
        encoded.push(IcoFrame::as_png(
            rgba_image.as_raw(),
            frame.width(),
            frame.height(),
            ColorType::Rgba8,
        )?);
    }

    let mut out_file = create_file(path)?;
    let encoder = IcoEncoder::new(&mut out_file);
    encoder
        .encode_images(&encoded)
        .with_context(|| format!("Failed to write ICO {}", path.display()))?;
    out_file.flush()?;

    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_png<W: Write>(
    image_data: &[u8],
    w: W,
    width: u32,
    height: u32,
    color_type: ColorType,
) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, color_type)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_save_png_roundtrips_pixels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solid.png");

        let mut canvas = Canvas::new(8, 4, Rgb([0x00, 0x52, 0xFF]));
        canvas.blend_pixel(7, 3, image::Rgba([1, 2, 3, 255]));
        save_png(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (8, 4));
        assert_eq!(*decoded.get_pixel(0, 0), Rgb([0x00, 0x52, 0xFF]));
        assert_eq!(*decoded.get_pixel(7, 3), Rgb([1, 2, 3]));
    }

    #[test]
    fn test_save_png_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("solid.png");

        let err = save_png(&Canvas::new(2, 2, Rgb([0, 0, 0])), &path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create"));
    }

    #[test]
    fn test_write_ico_rejects_oversized_frames() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.ico");

        assert!(write_ico(&[], &path).is_err());
        assert!(write_ico(&[Canvas::new(512, 512, Rgb([0, 0, 0]))], &path).is_err());
        assert!(!path.exists());
    }
}
