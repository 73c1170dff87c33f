//! Text rendering with a TrueType face, or the built-in bitmap face when the
//! font file is unavailable.

use crate::bitmap_font::{self, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
use crate::canvas::Canvas;
use anyhow::{Context, Result};
use image::Rgba;
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

/// Each bitmap dot is drawn as a square of this many pixels
const BITMAP_SCALE: u32 = 2;

pub enum Typeface {
    Outline { font: Font<'static>, scale: Scale },
    Bitmap,
}

impl Typeface {
    /// Load a TrueType face at `size` pixels per em, falling back to the
    /// built-in bitmap face if the file can't be used.
    pub fn load(path: &Path, size: f32) -> Self {
        let [face] = Self::load_set([(path, size)]);
        face
    }

    /// Load several faces as a unit. If any of them fails, all of them fall
    /// back to the bitmap face so a single image never mixes the two.
    pub fn load_set<const N: usize>(faces: [(&Path, f32); N]) -> [Self; N] {
        let loaded = faces.map(|(path, size)| Self::outline(path, size));

        if let Some(err) = loaded.iter().find_map(|face| face.as_ref().err()) {
            eprintln!("⚠ {err:#}; using the built-in bitmap font");
            return std::array::from_fn(|_| Self::fallback());
        }

        loaded.map(|face| face.unwrap_or_else(|_| Self::fallback()))
    }

    pub fn outline(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Can't read font file {}", path.display()))?;
        let font = Font::try_from_vec(data)
            .with_context(|| format!("{} is not a usable TrueType font", path.display()))?;
        let scale = em_scale(&font, size);

        Ok(Self::Outline { font, scale })
    }

    pub fn fallback() -> Self {
        Self::Bitmap
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// The same face at a different size. The bitmap face has a single size.
    pub fn resized(&self, size: f32) -> Self {
        match self {
            Self::Outline { font, .. } => Self::Outline {
                font: font.clone(),
                scale: em_scale(font, size),
            },
            Self::Bitmap => Self::Bitmap,
        }
    }

    /// Horizontal extent of the inked pixels of `text`
    pub fn text_width(&self, text: &str) -> u32 {
        self.ink_extent(text).1
    }

    /// Offset of the first inked column from the pen origin, and the ink width
    pub fn ink_extent(&self, text: &str) -> (i32, u32) {
        match self {
            Self::Outline { font, scale } => {
                let glyphs = layout(font, *scale, 0, 0, text);
                let mut boxes = glyphs.iter().filter_map(|glyph| glyph.pixel_bounding_box());
                let Some(first) = boxes.next() else {
                    return (0, 0);
                };
                let (left, right) = boxes.fold((first.min.x, first.max.x), |(left, right), bb| {
                    (left.min(bb.min.x), right.max(bb.max.x))
                });
                (left, (right - left).max(0) as u32)
            }
            Self::Bitmap => {
                let count = text.chars().count() as u32;
                let advance = (GLYPH_WIDTH + GLYPH_SPACING) * BITMAP_SCALE;
                (0, (count * advance).saturating_sub(GLYPH_SPACING * BITMAP_SCALE))
            }
        }
    }

    /// Draw `text` with its line box's top-left corner at `(x, y)`.
    /// Glyph coverage scales the alpha of `color`.
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        match self {
            Self::Outline { font, scale } => {
                for glyph in layout(font, *scale, x, y, text) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let alpha = (color[3] as f32 * coverage).round() as u8;
                        canvas.blend_pixel(
                            bb.min.x + gx as i32,
                            bb.min.y + gy as i32,
                            Rgba([color[0], color[1], color[2], alpha]),
                        );
                    });
                }
            }
            Self::Bitmap => draw_bitmap_text(canvas, x, y, text, color),
        }
    }
}

/// rusttype scales by the ascent-to-descent height; convert so `size` is the em size
fn em_scale(font: &Font<'static>, size: f32) -> Scale {
    let metrics = font.v_metrics_unscaled();
    let units_per_em = font.units_per_em().max(1) as f32;
    Scale::uniform(size * (metrics.ascent - metrics.descent) / units_per_em)
}

fn layout<'f>(
    font: &'f Font<'static>,
    scale: Scale,
    x: i32,
    y: i32,
    text: &str,
) -> Vec<PositionedGlyph<'f>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x as f32, y as f32 + ascent))
        .collect()
}

fn draw_bitmap_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba<u8>) {
    let dot = BITMAP_SCALE as i32;
    let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * BITMAP_SCALE) as i32;

    for (index, c) in text.chars().enumerate() {
        let origin_x = x + index as i32 * advance;
        for column in 0..GLYPH_WIDTH {
            for row in 0..GLYPH_HEIGHT {
                if bitmap_font::is_set(c, column, row) {
                    let left = origin_x + column as i32 * dot;
                    let top = y + row as i32 * dot;
                    canvas.fill_rect(left, top, left + dot - 1, top + dot - 1, color);
                }
            }
        }
    }
}
