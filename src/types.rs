//! Type definitions shared across the crate: cell kinds, coordinates, error kinds and the viewer
//! status.

use std::{fmt, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Grid coordinate as a `(x, y)` pair.
///
/// The first component is the column and the second the row. Row `0` is the top row of the maze.
pub type Coord = (usize, usize);

/// Symbol used for wall cells in maze files.
pub const WALL_SYMBOL: char = '#';
/// Symbol used for open cells in maze files.
pub const OPEN_SYMBOL: char = '.';
/// Symbol used for exit cells in maze files.
pub const EXIT_SYMBOL: char = 'E';
/// Symbol used to draw path cells. Never accepted as input.
pub const PATH_SYMBOL: char = '*';

/// Kind of a single maze cell.
///
/// This enumeration represents what occupies a position in the grid. The [`Path`](CellType::Path)
/// variant only ever shows up in grids derived from a solution, never in a grid built from a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Impassable cell.
    Wall,
    /// Traversable cell that is not an exit.
    Open,
    /// Traversable cell that ends the escape.
    Exit,
    /// Open cell lying on a discovered escape route.
    Path,
}

impl CellType {
    /// Maps an input symbol to its cell kind.
    ///
    /// Only the wall, open and exit symbols are recognized; the path symbol is output-only and
    /// yields `None` like any other unknown character.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            WALL_SYMBOL => Some(Self::Wall),
            OPEN_SYMBOL => Some(Self::Open),
            EXIT_SYMBOL => Some(Self::Exit),
            _ => None,
        }
    }

    /// Returns the symbol used to draw this cell kind.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => WALL_SYMBOL,
            Self::Open => OPEN_SYMBOL,
            Self::Exit => EXIT_SYMBOL,
            Self::Path => PATH_SYMBOL,
        }
    }

    /// Whether a walker may step onto a cell of this kind.
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Structural defect found while building a grid.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Malformation {
    /// One of the declared dimensions is zero.
    #[error("dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// The number of rows differs from the declared height.
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Declared height.
        expected: usize,
        /// Rows actually supplied.
        found: usize,
    },
    /// A row is shorter or longer than the declared width.
    #[error("row {row} has {found} symbols, expected {expected}")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Declared width.
        expected: usize,
        /// Symbols actually present in the row.
        found: usize,
    },
    /// A symbol outside of the input alphabet.
    #[error("unrecognized symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Column of the symbol.
        x: usize,
        /// Row of the symbol.
        y: usize,
    },
}

/// Reason a start coordinate was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRejection {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate is a wall.
    Wall,
}

impl fmt::Display for StartRejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => formatter.write_str("it lies outside the labyrinth"),
            Self::Wall => formatter.write_str("it is a wall"),
        }
    }
}

/// Errors raised by the maze core.
///
/// Unsolvable mazes are not errors; they are reported through
/// [`Solution::Unsolvable`](crate::Solution::Unsolvable).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// The raw structure does not describe a valid rectangular grid.
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] Malformation),
    /// A coordinate falls outside the grid.
    #[error("({x}, {y}) is outside the {width}x{height} labyrinth")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// The search cannot begin from the requested cell.
    #[error("cannot start at ({x}, {y}): {reason}")]
    InvalidStart {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Why the start was refused.
        reason: StartRejection,
    },
}

/// Errors raised while loading a maze file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The input holds no header line.
    #[error("missing width and height header")]
    MissingHeader,
    /// The header is not made of one or two integers per line.
    #[error("invalid header line {0:?}")]
    InvalidHeader(String),
    /// A dimension could not be parsed as an integer.
    #[error("invalid dimension {value:?}: {source}")]
    InvalidDimension {
        /// Raw token from the header.
        value: String,
        /// Parse failure.
        source: ParseIntError,
    },
    /// The rows do not form a valid grid for the declared dimensions.
    #[error(transparent)]
    Grid(#[from] MazeError),
}

/// Status line of the viewer.
///
/// This enumeration holds the outcome of the last user request, which drives the message rendered
/// next to the controls.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Status {
    /// Nothing has been requested since the last reset or cursor move.
    Prompt,
    /// The last solve found an escape route of the given number of steps.
    Solved(usize),
    /// The last solve exhausted the reachable cells without meeting an exit.
    Unsolvable,
    /// The last solve was refused because of its start coordinate.
    Rejected(MazeError),
    /// Reloading the maze file failed; the previous grid is still shown.
    ReloadFailed(String),
}

impl Status {
    /// Returns the message shown to the user for this status.
    pub(crate) fn message(&self) -> String {
        match self {
            Self::Prompt => "Choose a start position!".to_owned(),
            Self::Solved(steps) => format!("Could solve labyrinth! ({steps} steps)"),
            Self::Unsolvable => "Cannot solve labyrinth!".to_owned(),
            Self::Rejected(err) => err.to_string(),
            Self::ReloadFailed(reason) => format!("Reset failed: {reason}"),
        }
    }
}
