//! Drawing bitmaps onto canvases
//!
//! [`BitmapRenderer`] walks a [`Bitmap`] and asks a [`Canvas`] to fill one
//! rectangle per cell, then optionally strokes grid lines between cells.
//! [`PixelCanvas`] is the raster canvas that ships with the crate; other
//! surfaces plug in by implementing [`Canvas`].

mod options;
mod pixel;

pub use options::RenderOptions;
pub use pixel::PixelCanvas;

use crate::bitmap::{Bitmap, Position};
use crate::color::{Color, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A drawing surface.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba);
}

/// Grid lines are only drawn along a dimension with more cells than this.
const MIN_CELLS_FOR_GRID_LINES: usize = 2;

/// Height over width of a `W` by `H` grid; `1.0` for a grid without columns.
pub fn aspect_ratio<const W: usize, const H: usize>() -> f64 {
    if W == 0 {
        1.0
    } else {
        H as f64 / W as f64
    }
}

/// Draws bitmaps onto canvases according to [`RenderOptions`].
#[derive(Debug, Clone, Default)]
pub struct BitmapRenderer {
    options: RenderOptions,
}

impl BitmapRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Largest size with the grid's aspect ratio that fits in `available`.
    pub fn fitted_size<const W: usize, const H: usize>(available: Size) -> Size {
        let ratio = aspect_ratio::<W, H>();
        if available.width * ratio <= available.height {
            Size::new(available.width, available.width * ratio)
        } else {
            Size::new(available.height / ratio, available.height)
        }
    }

    /// Draws `bitmap` into a `size` area of `canvas`.
    ///
    /// In pixel-perfect mode `size` is ignored and every cell covers one
    /// canvas unit.
    pub fn render<C, K, const W: usize, const H: usize>(
        &self,
        bitmap: &Bitmap<C, W, H>,
        canvas: &mut K,
        size: Size,
    ) where
        C: Color,
        K: Canvas + ?Sized,
    {
        tracing::debug!(
            width = W,
            height = H,
            pixel_perfect = self.options.pixel_perfect,
            "rendering bitmap"
        );

        if self.options.pixel_perfect {
            Self::render_cells(bitmap, canvas, Size::new(1.0, 1.0));
            return;
        }
        if W == 0 || H == 0 {
            return;
        }

        let cell = Size::new(size.width / W as f64, size.height / H as f64);
        Self::render_cells(bitmap, canvas, cell);

        if let Some((ratio, color)) = self.options.grid_lines() {
            Self::render_lines::<K, W, H>(canvas, cell, size, ratio, color);
        }
    }

    /// Rasterizes `bitmap` with one pixel per cell.
    pub fn to_pixels<C, const W: usize, const H: usize>(bitmap: &Bitmap<C, W, H>) -> PixelCanvas
    where
        C: Color,
    {
        let mut canvas = PixelCanvas::new(W, H);
        Self::render_cells(bitmap, &mut canvas, Size::new(1.0, 1.0));
        canvas
    }

    fn cell_rect(position: Position, cell: Size) -> Rect {
        Rect::new(
            position.column as f64 * cell.width,
            position.row as f64 * cell.height,
            cell.width,
            cell.height,
        )
    }

    fn render_cells<C, K, const W: usize, const H: usize>(
        bitmap: &Bitmap<C, W, H>,
        canvas: &mut K,
        cell: Size,
    ) where
        C: Color,
        K: Canvas + ?Sized,
    {
        for (position, color) in bitmap.iter() {
            canvas.fill_rect(Self::cell_rect(position, cell), color.to_rgba());
        }
    }

    fn render_lines<K, const W: usize, const H: usize>(
        canvas: &mut K,
        cell: Size,
        size: Size,
        ratio: f64,
        color: Rgba,
    ) where
        K: Canvas + ?Sized,
    {
        if H > MIN_CELLS_FOR_GRID_LINES {
            let thickness = ratio * cell.height;
            for row in 1..H {
                let y = row as f64 * cell.height;
                canvas.stroke_line(Point::new(0.0, y), Point::new(size.width, y), thickness, color);
            }
        }

        if W > MIN_CELLS_FOR_GRID_LINES {
            let thickness = ratio * cell.width;
            for column in 1..W {
                let x = column as f64 * cell.width;
                canvas.stroke_line(Point::new(x, 0.0), Point::new(x, size.height), thickness, color);
            }
        }
    }
}
