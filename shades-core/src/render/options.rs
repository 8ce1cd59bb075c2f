//! Rendering configuration

use crate::color::Rgba;

/// How a bitmap is drawn onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Draw one canvas unit per cell and skip grid lines.
    pub pixel_perfect: bool,
    /// Grid line thickness as a fraction of the cell size.
    pub line_width_ratio: Option<f64>,
    /// Grid line color.
    pub line_color: Option<Rgba>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixel_perfect: false,
            line_width_ratio: Some(0.05),
            line_color: Some(Rgba::WHITE),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pixel_perfect(mut self, pixel_perfect: bool) -> Self {
        self.pixel_perfect = pixel_perfect;
        self
    }

    /// Sets the grid line thickness ratio; negative ratios are treated as zero.
    pub fn with_line_width_ratio(mut self, ratio: f64) -> Self {
        self.line_width_ratio = Some(ratio.max(0.0));
        self
    }

    pub fn with_line_color(mut self, color: Rgba) -> Self {
        self.line_color = Some(color);
        self
    }

    pub fn without_grid_lines(mut self) -> Self {
        self.line_width_ratio = None;
        self.line_color = None;
        self
    }

    /// Grid line settings, if both ratio and color are set.
    pub fn grid_lines(&self) -> Option<(f64, Rgba)> {
        match (self.line_width_ratio, self.line_color) {
            (Some(ratio), Some(color)) if !self.pixel_perfect => Some((ratio, color)),
            _ => None,
        }
    }
}
