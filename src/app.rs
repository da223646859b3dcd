//! Core application state and logic for the labyrinth viewer.

use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    events,
    file_loader,
    map::MazeGrid,
    pathfinding::{Direction, PathSearch, Solution},
    render::{Renderer as _, TextRenderer},
    types::{Coord, LoadError, Status},
    ui,
};

/// Application state container for the labyrinth viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the viewer and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Labyrinth file the grid was loaded from, read again on reset.
    pub(crate) path: PathBuf,
    /// Labyrinth as loaded from the file.
    ///
    /// This grid is never modified; every solve runs against it, whatever start was chosen before.
    pub(crate) grid: MazeGrid,
    /// Solved view of the labyrinth from the last successful solve.
    pub(crate) solved: Option<MazeGrid>,
    /// Start position currently selected by the user.
    ///
    /// The cursor always lies inside the grid, which restricts the choices offered to valid
    /// coordinates.
    pub(crate) cursor: Coord,
    /// Outcome of the last request, rendered next to the controls.
    pub(crate) status: Status,
}

impl App {
    /// Loads the labyrinth at `path` and prepares a fresh viewer for it.
    ///
    /// The dimensions and the rows of the loaded labyrinth are logged at `info` level.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read or does not describe a valid labyrinth.
    pub fn new(path: &Path) -> Result<Self, LoadError> {
        let grid = file_loader::load_file(path)?;
        log::info!("labyrinth width: {}", grid.width());
        log::info!("labyrinth height: {}", grid.height());
        for line in TextRenderer.render(&grid) {
            log::info!("{line}");
        }

        Ok(Self::from_grid(path.to_path_buf(), grid))
    }

    /// Builds a viewer over an already loaded grid.
    pub(crate) const fn from_grid(path: PathBuf, grid: MazeGrid) -> Self {
        Self {
            exit: false,
            path,
            grid,
            solved: None,
            cursor: (0, 0),
            status: Status::Prompt,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Moves the start cursor one step, staying inside the grid.
    ///
    /// Any previous solution is dropped since it no longer matches the selected start.
    pub(crate) fn move_cursor(&mut self, direction: Direction) {
        if let Some(next) = direction
            .step(self.cursor)
            .filter(|&next| self.grid.contains(next))
        {
            self.cursor = next;
            self.solved = None;
            self.status = Status::Prompt;
        }
    }

    /// Solves the labyrinth from the cursor and stores the outcome.
    pub(crate) fn solve(&mut self) {
        log::info!("solving labyrinth from ({}, {})", self.cursor.0, self.cursor.1);

        match PathSearch::new(&self.grid).solve(self.cursor) {
            Ok(Solution::Solved(path)) => {
                self.status = Status::Solved(path.len() - 1);
                self.solved = Some(self.grid.with_path_marked(&path));
            }
            Ok(Solution::Unsolvable) => {
                self.status = Status::Unsolvable;
                self.solved = None;
            }
            Err(err) => {
                log::warn!("solve request rejected: {err}");
                self.status = Status::Rejected(err);
                self.solved = None;
            }
        }
    }

    /// Reloads the labyrinth file and starts over.
    ///
    /// On failure the current grid stays in place and the failure is reported in the status line.
    pub(crate) fn reset(&mut self) {
        log::info!("resetting from {}", self.path.display());

        match Self::new(&self.path) {
            Ok(fresh) => *self = fresh,
            Err(err) => {
                log::error!("reset failed: {err}");
                self.status = Status::ReloadFailed(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;
    use crate::types::{CellType, MazeError, StartRejection};

    /// Builds a viewer over a grid given as string rows.
    fn app(rows: &[&str]) -> App {
        let raw: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        let width = raw.first().map_or(0, Vec::len);
        let grid = MazeGrid::new(width, raw.len(), &raw).expect("test grid should be valid");
        App::from_grid(PathBuf::from("unused.maze"), grid)
    }

    #[test]
    fn test_from_grid_defaults() {
        let app = app(&["..E"]);

        assert!(!app.exit);
        assert_eq!(app.cursor, (0, 0));
        assert_eq!(app.status, Status::Prompt);
        assert!(app.solved.is_none());
    }

    #[test]
    fn test_move_cursor_stays_in_bounds() {
        let mut app = app(&["...", "..E"]);

        app.move_cursor(Direction::Up);
        app.move_cursor(Direction::Left);
        assert_eq!(app.cursor, (0, 0), "cursor cannot leave through the top-left corner");

        for _ in 0..5 {
            app.move_cursor(Direction::Right);
            app.move_cursor(Direction::Down);
        }
        assert_eq!(app.cursor, (2, 1), "cursor cannot leave through the bottom-right corner");
    }

    #[test]
    fn test_solve_marks_path() {
        let mut app = app(&["###", "..E", "###"]);
        app.cursor = (0, 1);

        app.solve();

        assert_eq!(app.status, Status::Solved(2));
        let solved = app.solved.as_ref().expect("solved grid should be stored");
        assert_eq!(solved.cell_at(0, 1), Ok(CellType::Path));
        assert_eq!(solved.cell_at(2, 1), Ok(CellType::Exit));
        assert_eq!(app.grid.cell_at(0, 1), Ok(CellType::Open), "input grid is untouched");
    }

    #[test]
    fn test_solve_unsolvable() {
        let mut app = app(&[".#E"]);

        app.solve();

        assert_eq!(app.status, Status::Unsolvable);
        assert!(app.solved.is_none());
    }

    #[test]
    fn test_solve_from_wall_is_rejected() {
        let mut app = app(&["#.E"]);

        app.solve();

        assert_eq!(
            app.status,
            Status::Rejected(MazeError::InvalidStart {
                x: 0,
                y: 0,
                reason: StartRejection::Wall
            })
        );
    }

    #[test]
    fn test_move_cursor_clears_solution() {
        let mut app = app(&["..E"]);
        app.solve();
        assert!(app.solved.is_some(), "solve from (0, 0) should succeed");

        app.move_cursor(Direction::Right);

        assert!(app.solved.is_none());
        assert_eq!(app.status, Status::Prompt);
    }

    #[test]
    fn test_reset_reloads_file() {
        let path = env::temp_dir().join(format!("labyrinth-escape-app-{}.maze", std::process::id()));
        fs::write(&path, "3 1\n..E\n").expect("temporary file should be writable");
        let mut app = App::new(&path).expect("temporary labyrinth should load");
        app.move_cursor(Direction::Right);
        app.solve();

        app.reset();
        fs::remove_file(&path).expect("temporary file should be removable");

        assert_eq!(app.cursor, (0, 0));
        assert_eq!(app.status, Status::Prompt);
        assert!(app.solved.is_none());
    }

    #[test]
    fn test_reset_failure_keeps_grid() {
        let mut app = app(&["..E"]);
        app.path = PathBuf::from("this/labyrinth/does/not/exist.maze");

        app.reset();

        assert!(matches!(app.status, Status::ReloadFailed(_)));
        assert_eq!(app.grid.width(), 3, "previous grid should still be shown");
    }
}
