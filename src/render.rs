//! Rendering module.
//!
//! This module turns a [`MazeGrid`] into something drawable. Renderers are pure functions of the
//! grid; the grid itself knows nothing about how it is shown.

use color_eyre::eyre::Result;

use crate::{
    map::MazeGrid,
    types::{CellType, Coord},
};

/// Pure conversion from a grid into a drawable representation.
pub trait Renderer {
    /// Drawable representation produced by this renderer.
    type Output;

    /// Renders `grid`.
    fn render(&self, grid: &MazeGrid) -> Self::Output;
}

/// Renders a grid as one line of symbols per row.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = Vec<String>;

    fn render(&self, grid: &MazeGrid) -> Self::Output {
        grid.rows()
            .map(|row| row.iter().copied().map(CellType::symbol).collect())
            .collect()
    }
}

/// Screen coordinates of the cells drawn on the terminal canvas, grouped by color.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CanvasLayers {
    /// Wall cells.
    pub(crate) walls: Vec<(f64, f64)>,
    /// Exit cells.
    pub(crate) exits: Vec<(f64, f64)>,
    /// Path cells.
    pub(crate) path: Vec<(f64, f64)>,
}

/// Renders a grid as point layers for a [`Canvas`](ratatui::widgets::canvas::Canvas) centered on
/// the origin.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CanvasRenderer;

impl Renderer for CanvasRenderer {
    type Output = Result<CanvasLayers>;

    fn render(&self, grid: &MazeGrid) -> Self::Output {
        let mut walls = Vec::new();
        let mut exits = Vec::new();
        let mut path = Vec::new();
        for (y, row) in grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    CellType::Wall => walls.push((x, y)),
                    CellType::Exit => exits.push((x, y)),
                    CellType::Path => path.push((x, y)),
                    CellType::Open => {}
                }
            }
        }

        Ok(CanvasLayers {
            walls: to_screen_coords(&walls, grid)?,
            exits: to_screen_coords(&exits, grid)?,
            path: to_screen_coords(&path, grid)?,
        })
    }
}

/// Half of the canvas extent along an axis of `cells` cells.
///
/// Canvas bounds of `[-half, half]` map every cell center onto exactly one terminal cell. The extent
/// never drops below half a cell, as the canvas draws nothing on a zero-width axis.
pub(crate) fn half_extent(cells: usize) -> Result<f64> {
    Ok(((f64::from(u16::try_from(cells)?) - 1.) / 2.).max(0.5))
}

/// Transforms grid coordinates to canvas coordinates.
///
/// Columns map to `x - (width - 1) / 2` and rows to `(height - 1) / 2 - y`, which centers the grid
/// on the origin with row `0` at the top.
///
/// # Errors
///
/// This function may return errors if a coordinate or dimension does not fit a terminal axis.
pub(crate) fn to_screen_coords(coords: &[Coord], grid: &MazeGrid) -> Result<Vec<(f64, f64)>> {
    let half_width = half_extent(grid.width())?;
    let half_height = half_extent(grid.height())?;

    coords
        .iter()
        .map(|&(x, y)| {
            let screen_x = f64::from(u16::try_from(x)?) - half_width;
            let screen_y = half_height - f64::from(u16::try_from(y)?);

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a grid from string rows.
    fn grid(rows: &[&str]) -> MazeGrid {
        let raw: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        let width = raw.first().map_or(0, Vec::len);
        MazeGrid::new(width, raw.len(), &raw).expect("test grid should be valid")
    }

    #[test]
    fn test_text_renderer_reproduces_input() {
        let rows = ["#####", "#..E#", "#.#.#", "#####"];
        let lines = TextRenderer.render(&grid(&rows));

        assert_eq!(lines, rows);
    }

    #[test]
    fn test_text_renderer_draws_path() {
        let marked = grid(&["###", "..E", "###"]).with_path_marked(&[(0, 1), (1, 1), (2, 1)]);

        assert_eq!(TextRenderer.render(&marked), ["###", "**E", "###"]);
    }

    #[test]
    fn test_to_screen_coords_centers_grid() {
        let grid = grid(&["...", "...", "..."]);

        let coords = to_screen_coords(&[(0, 0), (1, 1), (2, 2)], &grid).expect("coords fit");

        assert_eq!(coords, vec![(-1., 1.), (0., 0.), (1., -1.)]);
    }

    #[test]
    fn test_to_screen_coords_even_dimensions() {
        let grid = grid(&["....", "...."]);

        let coords = to_screen_coords(&[(0, 0), (3, 1)], &grid).expect("coords fit");

        assert_eq!(coords, vec![(-1.5, 0.5), (1.5, -0.5)]);
    }

    #[test]
    fn test_to_screen_coords_too_large() {
        let grid = grid(&["..."]);

        assert!(
            to_screen_coords(&[(usize::from(u16::MAX) + 1, 0)], &grid).is_err(),
            "coordinates past the terminal range cannot be drawn"
        );
    }

    #[test]
    fn test_canvas_renderer_layers() {
        let marked = grid(&["#.E", "..#"]).with_path_marked(&[(1, 0), (2, 0)]);

        let layers = CanvasRenderer.render(&marked).expect("layers fit");

        assert_eq!(layers.walls, vec![(-1., 0.5), (1., -0.5)]);
        assert_eq!(layers.exits, vec![(1., 0.5)]);
        assert_eq!(layers.path, vec![(0., 0.5)]);
    }
}
