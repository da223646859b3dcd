//! Map data module.
//!
//! This module contains the [`MazeGrid`] structure holding the typed cells of a labyrinth, along with
//! its validation on construction and the derivation of solved grids.

use crate::types::{CellType, Coord, Malformation, MazeError};

/// Rectangular labyrinth made of typed cells.
///
/// The grid is validated on construction and never mutated afterwards. Solved views are produced by
/// [`MazeGrid::with_path_marked`] as fresh grids, so the loaded maze can be solved again from any
/// other start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells stored row by row, `width * height` entries long.
    cells: Vec<CellType>,
}

impl MazeGrid {
    /// Builds a grid from a raw character matrix.
    ///
    /// The matrix must hold exactly `height` rows of exactly `width` symbols each, every symbol
    /// taken from the input alphabet (see [`CellType::from_symbol`]).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MalformedGrid`] if:
    /// - either dimension is zero
    /// - the number of rows differs from `height`
    /// - a row length differs from `width`
    /// - a symbol is not part of the input alphabet
    pub fn new(width: usize, height: usize, raw: &[Vec<char>]) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(Malformation::ZeroDimension { width, height }.into());
        }
        if raw.len() != height {
            return Err(Malformation::RowCount {
                expected: height,
                found: raw.len(),
            }
            .into());
        }

        // Every row length is checked before any cell is stored.
        if let Some((y, row)) = raw.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(Malformation::RowLength {
                row: y,
                expected: width,
                found: row.len(),
            }
            .into());
        }

        let cells = raw
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &symbol)| (x, y, symbol)))
            .map(|(x, y, symbol)| {
                CellType::from_symbol(symbol).ok_or(Malformation::UnknownSymbol { symbol, x, y })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `coord` lies inside the grid.
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Returns the kind of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when the coordinate falls outside the grid.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<CellType, MazeError> {
        self.index((x, y))
            .and_then(|index| self.cells.get(index).copied())
            .ok_or(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.cells.chunks(self.width)
    }

    /// Iterates over the exit coordinates in row-major order.
    pub fn exits(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == CellType::Exit)
            .map(|(index, _)| (index % self.width, index / self.width))
    }

    /// Returns a copy of the grid with the open cells of `path` marked as [`CellType::Path`].
    ///
    /// Walls and exits keep their kind, so the exit stays visible in the solved view. Coordinates
    /// outside the grid are ignored.
    #[must_use]
    pub fn with_path_marked(&self, path: &[Coord]) -> Self {
        let mut marked = self.clone();
        for &coord in path {
            if let Some(cell) = marked.index(coord).and_then(|index| marked.cells.get_mut(index)) {
                if *cell == CellType::Open {
                    *cell = CellType::Path;
                }
            }
        }

        marked
    }

    /// Row-major index of `coord`, if it lies inside the grid.
    pub(crate) const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.1 * self.width + coord.0)
        } else {
            None
        }
    }
}
