//! Fixed-size grids of colors
//!
//! A [`Bitmap`] stores `W * H` cells of any [`Color`] representation in
//! row-major order. Filters never mutate a bitmap; each one builds a new grid.

use crate::color::{Color, Filters, Mixable, RandomSource, Rgba};
use crate::error::{Result, ShadesError};
use std::ops::Index;

/// A cell address inside a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// A `W` columns by `H` rows grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap<C, const W: usize, const H: usize> {
    cells: Vec<C>,
}

impl<C: Color, const W: usize, const H: usize> Bitmap<C, W, H> {
    /// Builds a bitmap by asking `f` for the color at every position.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Position) -> C,
    {
        let cells = Self::positions().map(&mut f).collect();
        Self { cells }
    }

    /// Builds a bitmap from row-major cells.
    pub fn from_cells(cells: Vec<C>) -> Result<Self> {
        if cells.len() != W * H {
            return Err(ShadesError::DimensionMismatch {
                expected: W * H,
                actual: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// Every cell set to `color`.
    pub fn fill(color: C) -> Self
    where
        C: Clone,
    {
        Self::from_fn(|_| color.clone())
    }

    pub fn filled_with_white() -> Self {
        Self::from_fn(|_| C::from_rgba(Rgba::WHITE))
    }

    /// Alternates `even` and `odd` by the parity of `row + column`.
    pub fn checkered(even: C, odd: C) -> Self
    where
        C: Clone,
    {
        Self::from_fn(|p| {
            if (p.row + p.column) % 2 == 0 {
                even.clone()
            } else {
                odd.clone()
            }
        })
    }

    /// White and black checkerboard, white in the top-left corner.
    pub fn checkered_black_and_white() -> Self {
        Self::from_fn(|p| {
            let rgba = if (p.row + p.column) % 2 == 0 {
                Rgba::WHITE
            } else {
                Rgba::BLACK
            };
            C::from_rgba(rgba)
        })
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..H).flat_map(|row| (0..W).map(move |column| Position { row, column }))
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < H && position.column < W
    }

    fn offset(position: Position) -> usize {
        position.row * W + position.column
    }

    pub fn get(&self, position: Position) -> Option<&C> {
        if self.contains(position) {
            self.cells.get(Self::offset(position))
        } else {
            None
        }
    }

    /// Replaces the color at `position`.
    pub fn set(&mut self, position: Position, color: C) -> Result<()> {
        if !self.contains(position) {
            return Err(ShadesError::OutOfBounds {
                row: position.row,
                column: position.column,
                width: W,
                height: H,
            });
        }
        self.cells[Self::offset(position)] = color;
        Ok(())
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<C> {
        self.cells
    }

    /// Cells paired with their positions, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &C)> {
        Self::positions().zip(self.cells.iter())
    }

    /// Builds a new bitmap of the same size from each cell.
    pub fn map<D, F>(&self, mut f: F) -> Bitmap<D, W, H>
    where
        D: Color,
        F: FnMut(Position, &C) -> D,
    {
        Bitmap {
            cells: self.iter().map(|(p, c)| f(p, c)).collect(),
        }
    }

    /// Converts every cell to another representation.
    pub fn convert<D: Color>(&self) -> Bitmap<D, W, H> {
        self.map(|_, c| c.convert())
    }

    pub fn greyed_out(&self) -> Self {
        tracing::trace!(width = W, height = H, "greying bitmap");
        self.map(|_, c| c.greyed_out())
    }

    /// Old-photo effect applied cell by cell.
    pub fn aged<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        tracing::trace!(width = W, height = H, "aging bitmap");
        self.map(|_, c| c.aged(&mut *rng))
    }

    /// Mixes each cell toward the matching cell of `target` by `t(position)`.
    pub fn cross_fade<F>(&self, target: &Self, mut t: F) -> Self
    where
        C: Mixable<Mix = C>,
        F: FnMut(Position) -> f64,
    {
        tracing::trace!(width = W, height = H, "cross-fading bitmap");
        self.map(|p, c| c.mix(&target[p], t(p)))
    }

    /// Scales red, green and blue of each cell by `t(position)`; alpha is kept.
    ///
    /// `t = 1` leaves a cell as is and `t = 0` turns it black.
    pub fn fade<F>(&self, mut t: F) -> Self
    where
        F: FnMut(Position) -> f64,
    {
        tracing::trace!(width = W, height = H, "fading bitmap");
        self.map(|p, c| {
            let factor = t(p);
            c.map_channels(|channel| channel * factor, false)
        })
    }
}

impl<C: Color, const W: usize, const H: usize> Index<Position> for Bitmap<C, W, H> {
    type Output = C;

    fn index(&self, position: Position) -> &C {
        match self.get(position) {
            Some(color) => color,
            None => panic!(
                "position ({}, {}) out of bounds for {}x{} bitmap",
                position.row, position.column, W, H
            ),
        }
    }
}

impl<C: Color, const W: usize, const H: usize> Index<(usize, usize)> for Bitmap<C, W, H> {
    type Output = C;

    fn index(&self, (row, column): (usize, usize)) -> &C {
        &self[Position { row, column }]
    }
}
