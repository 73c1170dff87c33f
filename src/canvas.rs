//! Pixel buffer and the 2D primitives the placeholder artwork is drawn with.
//!
//! Every bounding box is inclusive on both ends, so `fill_rect(0, 0, 9, 9, ..)`
//! covers a 10x10 block. Coordinates are signed and anything outside the
//! buffer is clipped, which lets shapes hang off an edge without special cases.

use anyhow::{anyhow, Result};
use image::{Rgb, RgbImage, Rgba};
use std::str::FromStr;

/// Parse a CSS color literal such as `#0052FF` into an RGB pixel
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let srgb =
        css_color::Srgb::from_str(color).map_err(|_| anyhow!("Invalid color: {}", color))?;

    Ok(Rgb([
        unit_to_channel(srgb.red),
        unit_to_channel(srgb.green),
        unit_to_channel(srgb.blue),
    ]))
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    with_alpha(color, 255)
}

pub fn with_alpha(color: Rgb<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// An RGB drawing surface.
///
/// Colors are passed as `Rgba` and composited source-over, so a fully opaque
/// color simply replaces the pixel.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            buffer: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.buffer.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    pub fn into_image(self) -> RgbImage {
        self.buffer
    }

    /// Composite `color` over the pixel at `(x, y)`; a no-op outside the buffer
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }

        let alpha = color[3] as u32;
        if alpha == 0 {
            return;
        }

        let pixel = self.buffer.get_pixel_mut(x as u32, y as u32);
        if alpha == 255 {
            *pixel = Rgb([color[0], color[1], color[2]]);
            return;
        }

        for channel in 0..3 {
            let src = color[channel] as u32;
            let dst = pixel[channel] as u32;
            pixel[channel] = ((src * alpha + dst * (255 - alpha) + 127) / 255) as u8;
        }
    }

    /// One full-width row
    pub fn horizontal_line(&mut self, y: i32, color: Rgba<u8>) {
        let right = self.width() as i32 - 1;
        self.fill_rect(0, y, right, y, color);
    }

    /// Linear interpolation from `top` on the first row towards `bottom`.
    ///
    /// Row `i` gets `p = i / height` and each channel is truncated from
    /// `top * (1 - p) + bottom * p`, so the last row stops one step short of
    /// `bottom`.
    pub fn vertical_gradient(&mut self, top: Rgb<u8>, bottom: Rgb<u8>) {
        let height = self.height();
        for row in 0..height {
            let progress = row as f64 / height as f64;
            let mix = |channel: usize| {
                (top[channel] as f64 * (1.0 - progress) + bottom[channel] as f64 * progress) as u8
            };
            self.horizontal_line(row as i32, opaque(Rgb([mix(0), mix(1), mix(2)])));
        }
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (x0, x1) = clip_span(x0, x1, self.width());
        let (y0, y1) = clip_span(y0, y1, self.height());

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Rectangle border `width` pixels thick, growing inward from the box
    pub fn outline_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba<u8>,
        width: i32,
    ) {
        for inset in 0..width.max(0) {
            let (left, top, right, bottom) = (x0 + inset, y0 + inset, x1 - inset, y1 - inset);
            if left > right || top > bottom {
                break;
            }
            self.fill_rect(left, top, right, top, color);
            self.fill_rect(left, bottom, right, bottom, color);
            // Skip the corner pixels already painted by the horizontal edges
            self.fill_rect(left, top + 1, left, bottom - 1, color);
            self.fill_rect(right, top + 1, right, bottom - 1, color);
        }
    }

    /// Ellipse inscribed in the box
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let shape = Ellipse::inscribed(x0, y0, x1, y1);
        self.paint_region(x0, y0, x1, y1, color, |px, py| shape.contains(px, py, 0.0));
    }

    /// Ring of `width` pixels along the inside of the inscribed ellipse
    pub fn outline_ellipse(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba<u8>,
        width: i32,
    ) {
        let shape = Ellipse::inscribed(x0, y0, x1, y1);
        let width = width.max(0) as f64;
        self.paint_region(x0, y0, x1, y1, color, |px, py| {
            shape.contains(px, py, 0.0) && !shape.contains(px, py, width)
        });
    }

    /// Even-odd scanline fill, sampling at pixel centres
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }

        let top = points.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let bottom = points.iter().map(|&(_, y)| y).max().unwrap_or(0);
        let (top, bottom) = clip_span(top, bottom, self.height());

        for y in top..=bottom {
            let scan_y = y as f64 + 0.5;
            let mut crossings: Vec<f64> = Vec::new();

            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                let (ay, by) = (ay as f64, by as f64);
                if (ay <= scan_y && by > scan_y) || (by <= scan_y && ay > scan_y) {
                    let t = (scan_y - ay) / (by - ay);
                    crossings.push(ax as f64 + t * (bx - ax) as f64);
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil() as i32;
                let end = (span[1] - 0.5).floor() as i32;
                if start <= end {
                    self.fill_rect(start, y, end, y, color);
                }
            }
        }
    }

    /// Rectangle whose corners are quarter circles of `radius`
    pub fn fill_rounded_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: i32,
        color: Rgba<u8>,
    ) {
        let (left, top) = (x0 as f64, y0 as f64);
        let (right, bottom) = ((x1 + 1) as f64, (y1 + 1) as f64);
        let radius = (radius.max(0) as f64)
            .min((right - left) / 2.0)
            .min((bottom - top) / 2.0);

        self.paint_region(x0, y0, x1, y1, color, |px, py| {
            let cx = px.clamp(left + radius, right - radius);
            let cy = py.clamp(top + radius, bottom - radius);
            (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius
        });
    }

    /// Blend `color` into every pixel of the box whose centre passes `inside`
    fn paint_region(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba<u8>,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        let (x0, x1) = clip_span(x0, x1, self.width());
        let (y0, y1) = clip_span(y0, y1, self.height());

        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(x as f64 + 0.5, y as f64 + 0.5) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }
}

/// Clamp an inclusive span to `0..limit`. An empty result comes back as `(1, 0)`.
fn clip_span(start: i32, end: i32, limit: u32) -> (i32, i32) {
    let start = start.max(0);
    let end = end.min(limit as i32 - 1);
    if start > end {
        (1, 0)
    } else {
        (start, end)
    }
}

struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    fn inscribed(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            cx: (x0 + x1 + 1) as f64 / 2.0,
            cy: (y0 + y1 + 1) as f64 / 2.0,
            rx: (x1 - x0 + 1) as f64 / 2.0,
            ry: (y1 - y0 + 1) as f64 / 2.0,
        }
    }

    /// Whether `(px, py)` lies inside the ellipse shrunk by `inset` on both radii
    fn contains(&self, px: f64, py: f64, inset: f64) -> bool {
        let rx = self.rx - inset;
        let ry = self.ry - inset;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        let dx = (px - self.cx) / rx;
        let dy = (py - self.cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}
