//! Pathfinding module.
//!
//! This module contains the breadth-first search used to find the shortest escape route from a
//! start cell to the nearest exit, along with the parent bookkeeping needed to rebuild that route.

use std::collections::VecDeque;

use crate::{
    map::MazeGrid,
    types::{CellType, Coord, MazeError, StartRejection},
};

/// Movement direction on the 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row `0`.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column `0`.
    Left,
}

impl Direction {
    /// Neighbor expansion order of the search.
    ///
    /// Among exits at equal distance, the one first reached under this order wins.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Column and row offsets of a single step.
    const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Returns the coordinate one step away from `coord`.
    ///
    /// Yields `None` when the step would go below zero on either axis. Upper bounds are the
    /// caller's to check against its grid.
    pub const fn step(self, coord: Coord) -> Option<Coord> {
        let (dx, dy) = self.offset();
        let Some(x) = coord.0.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = coord.1.checked_add_signed(dy) else {
            return None;
        };

        Some((x, y))
    }
}

/// Lifecycle of a [`PathSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Constructed, not yet run to completion.
    Initialized,
    /// Frontier non-empty, cells being expanded.
    Running,
    /// The last run reached an exit.
    Solved,
    /// The last run exhausted the frontier without reaching an exit.
    Unsolvable,
}

/// Outcome of a search.
///
/// Unsolvability is a regular outcome rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// An exit was reached; the coordinates run from the start to that exit, both included.
    Solved(Vec<Coord>),
    /// No exit is reachable from the start.
    Unsolvable,
}

impl Solution {
    /// Whether an escape route exists.
    pub const fn is_solvable(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The escape route, start first.
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable => None,
        }
    }

    /// Consumes the solution and returns the escape route, if any.
    pub fn into_path(self) -> Option<Vec<Coord>> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable => None,
        }
    }

    /// Derives the solved view of `grid`, with the route marked.
    pub fn marked_grid(&self, grid: &MazeGrid) -> Option<MazeGrid> {
        self.path().map(|path| grid.with_path_marked(path))
    }
}

/// How a visited cell was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    /// Not discovered yet.
    Unvisited,
    /// The cell the search started from.
    Start,
    /// Discovered while expanding the given neighbor.
    From(Coord),
}

/// Visited set and parent links of a single search run.
struct Trail<'grid> {
    /// Grid being searched, used for indexing.
    grid: &'grid MazeGrid,
    /// One link per cell, row-major.
    links: Vec<Link>,
    /// Number of cells discovered so far.
    visited: usize,
}

impl<'grid> Trail<'grid> {
    /// Creates a trail with every cell unvisited.
    fn new(grid: &'grid MazeGrid) -> Self {
        Self {
            grid,
            links: vec![Link::Unvisited; grid.width() * grid.height()],
            visited: 0,
        }
    }

    /// Returns the link recorded for `coord`.
    fn link(&self, coord: Coord) -> Link {
        self.grid
            .index(coord)
            .and_then(|index| self.links.get(index).copied())
            .unwrap_or(Link::Unvisited)
    }

    /// Records how `coord` was reached, marking it visited.
    fn record(&mut self, coord: Coord, link: Link) {
        if let Some(slot) = self
            .grid
            .index(coord)
            .and_then(|index| self.links.get_mut(index))
        {
            if *slot == Link::Unvisited && link != Link::Unvisited {
                self.visited += 1;
            }
            *slot = link;
        }
    }

    /// Number of cells discovered so far.
    const fn visited(&self) -> usize {
        self.visited
    }

    /// Walks the parent links from `exit` back to the start and returns the route start first.
    fn path_to(&self, exit: Coord) -> Vec<Coord> {
        let mut path = vec![exit];
        let mut current = exit;
        while let Link::From(parent) = self.link(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();

        path
    }
}

/// Breadth-first escape search over a borrowed grid.
///
/// The search keeps no bookkeeping between runs: every call to [`PathSearch::solve`] allocates its
/// own frontier and trail, so calling it again with the same start gives the same answer.
#[derive(Debug)]
pub struct PathSearch<'grid> {
    /// Grid being searched.
    grid: &'grid MazeGrid,
    /// Where the search stands.
    state: SearchState,
}

impl<'grid> PathSearch<'grid> {
    /// Creates a search over `grid`.
    pub const fn new(grid: &'grid MazeGrid) -> Self {
        Self {
            grid,
            state: SearchState::Initialized,
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Searches for the shortest route from `start` to any exit.
    ///
    /// Cells are expanded in breadth-first order with neighbors visited in [`Direction::ALL`]
    /// order, so the route found has the minimum number of steps and, among equally close exits,
    /// leads to the one discovered first. A start placed on an exit yields a route of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidStart`] if `start` lies outside the grid or is a wall. The
    /// search is left [`SearchState::Initialized`] in that case.
    pub fn solve(&mut self, start: Coord) -> Result<Solution, MazeError> {
        let rejection = if self.grid.contains(start) {
            (self.grid.cell_at(start.0, start.1)? == CellType::Wall).then_some(StartRejection::Wall)
        } else {
            Some(StartRejection::OutOfBounds)
        };
        if let Some(reason) = rejection {
            self.state = SearchState::Initialized;
            return Err(MazeError::InvalidStart {
                x: start.0,
                y: start.1,
                reason,
            });
        }

        log::debug!("searching escape route from ({}, {})", start.0, start.1);
        self.state = SearchState::Running;

        let mut trail = Trail::new(self.grid);
        let mut frontier = VecDeque::from([start]);
        trail.record(start, Link::Start);

        while let Some(current) = frontier.pop_front() {
            if self.grid.cell_at(current.0, current.1)? == CellType::Exit {
                let path = trail.path_to(current);
                log::info!(
                    "escape route of {} steps found from ({}, {}) to ({}, {}), {} cells visited",
                    path.len() - 1,
                    start.0,
                    start.1,
                    current.0,
                    current.1,
                    trail.visited()
                );
                self.state = SearchState::Solved;
                return Ok(Solution::Solved(path));
            }

            for direction in Direction::ALL {
                let Some(next) = direction.step(current) else {
                    continue;
                };
                if !self.grid.contains(next) || trail.link(next) != Link::Unvisited {
                    continue;
                }
                if self.grid.cell_at(next.0, next.1)?.is_traversable() {
                    trail.record(next, Link::From(current));
                    frontier.push_back(next);
                }
            }
        }

        log::info!(
            "no escape route from ({}, {}), {} cells visited",
            start.0,
            start.1,
            trail.visited()
        );
        self.state = SearchState::Unsolvable;

        Ok(Solution::Unsolvable)
    }
}

/// Runs a one-shot [`PathSearch`] over `grid` from `start`.
///
/// # Errors
///
/// See [`PathSearch::solve`].
pub fn solve(grid: &MazeGrid, start: Coord) -> Result<Solution, MazeError> {
    PathSearch::new(grid).solve(start)
}
