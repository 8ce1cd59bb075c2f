//! Software raster canvas
//!
//! [`PixelCanvas`] owns an RGBA8 buffer. A pixel is painted when its center
//! falls inside the drawn rectangle, and colors replace what was there.

use super::{Canvas, Point, Rect};
use crate::color::{Color, Rgba, Rgba8};

/// An owned, row-major RGBA8 raster.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba8>,
}

impl PixelCanvas {
    /// A transparent canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgba::CLEAR)
    }

    pub fn filled(width: usize, height: usize, background: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::from_rgba(background); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Interleaved `RGBA` bytes, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Pixel indices whose centers lie in `[start, start + length)`, clipped to `limit`.
    fn covered(start: f64, length: f64, limit: usize) -> std::ops::Range<usize> {
        let first = (start - 0.5).ceil().max(0.0);
        let end = (start + length - 0.5).ceil().max(0.0);
        let first = (first as usize).min(limit);
        let end = (end as usize).min(limit);
        first..end.max(first)
    }
}

impl Canvas for PixelCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return;
        }
        let pixel = Rgba8::from_rgba(color);
        let columns = Self::covered(rect.x, rect.width, self.width);
        for y in Self::covered(rect.y, rect.height, self.height) {
            let row = y * self.width;
            self.pixels[row + columns.start..row + columns.end].fill(pixel);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        let half = width / 2.0;
        if from.y == to.y || from.x == to.x {
            let rect = Rect::new(
                from.x.min(to.x) - if from.x == to.x { half } else { 0.0 },
                from.y.min(to.y) - if from.y == to.y { half } else { 0.0 },
                if from.x == to.x { width } else { (to.x - from.x).abs() },
                if from.y == to.y { width } else { (to.y - from.y).abs() },
            );
            self.fill_rect(rect, color);
            return;
        }

        // Diagonal strokes are stamped with a square brush.
        let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil() as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.fill_rect(Rect::new(x - half, y - half, width, width), color);
        }
    }
}
