//! Labyrinth escape finder.
//!
//! This crate loads a rectangular labyrinth from a text file, lets the user pick a start cell in a
//! terminal viewer and looks for the shortest route from that cell to the nearest exit.
//!
//! The core is usable on its own:
//!
//! ```
//! use labyrinth_escape::{parse_file_contents, solve, CellType, Renderer as _, TextRenderer};
//!
//! let grid = parse_file_contents("3 3\n###\n..E\n###\n")?;
//! let solution = solve(&grid, (0, 1))?;
//! assert_eq!(solution.path(), Some(&[(0, 1), (1, 1), (2, 1)][..]));
//!
//! let solved = solution.marked_grid(&grid).expect("route was found");
//! assert_eq!(solved.cell_at(1, 1)?, CellType::Path);
//! assert_eq!(TextRenderer.render(&solved), ["###", "**E", "###"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod file_loader;
mod map;
mod pathfinding;
mod render;
mod types;
mod ui;

pub use app::App;
pub use config::{init_logging, Config, LOG_ENV, LOG_STYLE_ENV};
pub use file_loader::{load_file, parse_file_contents};
pub use map::MazeGrid;
pub use pathfinding::{solve, Direction, PathSearch, SearchState, Solution};
pub use render::{Renderer, TextRenderer};
pub use types::{
    CellType, Coord, LoadError, Malformation, MazeError, StartRejection, EXIT_SYMBOL,
    OPEN_SYMBOL, PATH_SYMBOL, WALL_SYMBOL,
};
