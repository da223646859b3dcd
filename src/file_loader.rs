//! File loading and validation utilities for labyrinth files.
//!
//! A labyrinth file starts with its width and height, either on a single line (`7 5`) or on two
//! lines, followed by one line per row written with the symbols `#` (wall), `.` (open) and `E`
//! (exit).

use std::{fs, path::Path};

use crate::{map::MazeGrid, types::LoadError};

/// Reads and parses the labyrinth file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read, or any error of
/// [`parse_file_contents`].
pub fn load_file(path: &Path) -> Result<MazeGrid, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_file_contents(&contents)
}

/// Parses the textual contents of a labyrinth file.
///
/// Trailing whitespace is stripped from every line and blank lines after the last row are ignored.
/// Row and symbol validation is left to [`MazeGrid::new`].
///
/// # Errors
///
/// This function may return errors if:
/// - The input is empty ([`LoadError::MissingHeader`])
/// - The header holds anything other than one or two tokens per line
///   ([`LoadError::InvalidHeader`])
/// - A dimension is not a non-negative integer ([`LoadError::InvalidDimension`])
/// - The rows do not match the dimensions or hold unknown symbols ([`LoadError::Grid`])
pub fn parse_file_contents(input: &str) -> Result<MazeGrid, LoadError> {
    let mut lines = input.lines().map(str::trim_end);

    let header = lines.next().ok_or(LoadError::MissingHeader)?;
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let (width, height) = match tokens.as_slice() {
        [width, height] => (parse_dimension(width)?, parse_dimension(height)?),
        [width] => {
            let second = lines.next().ok_or(LoadError::MissingHeader)?;
            let height = match second.split_whitespace().collect::<Vec<_>>().as_slice() {
                [height] => parse_dimension(height)?,
                _ => return Err(LoadError::InvalidHeader(second.to_owned())),
            };
            (parse_dimension(width)?, height)
        }
        _ => return Err(LoadError::InvalidHeader(header.to_owned())),
    };

    let mut rows: Vec<Vec<char>> = lines.map(|line| line.chars().collect()).collect();
    while rows.last().is_some_and(Vec::is_empty) {
        let _ = rows.pop();
    }

    log::debug!("parsed header {width}x{height} with {} rows", rows.len());

    Ok(MazeGrid::new(width, height, &rows)?)
}

/// Parses a single header token.
fn parse_dimension(token: &str) -> Result<usize, LoadError> {
    token
        .parse()
        .map_err(|source| LoadError::InvalidDimension {
            value: token.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::types::{CellType, Malformation, MazeError};

    /// Labyrinth shipped with the repository.
    const SAMPLE: &str = include_str!("../mazes/sample.maze");

    #[test]
    fn test_parse_file_contents_single_line_header() {
        let grid = parse_file_contents("4 3\n####\n#..E\n####\n").expect("valid labyrinth");

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_at(3, 1), Ok(CellType::Exit));
    }

    #[test]
    fn test_parse_file_contents_two_line_header() {
        let grid = parse_file_contents("3\n2\n.#E\n...").expect("valid labyrinth");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_at(1, 0), Ok(CellType::Wall));
    }

    #[test]
    fn test_parse_file_contents_windows_line_endings() {
        let grid = parse_file_contents("2 2\r\n.E\r\n##\r\n").expect("valid labyrinth");

        assert_eq!(grid.cell_at(1, 0), Ok(CellType::Exit));
    }

    #[test]
    fn test_parse_file_contents_trailing_blank_lines() {
        let result = parse_file_contents("2 1\n.E\n\n\n");
        assert!(result.is_ok(), "blank lines after the last row are ignored");
    }

    #[test]
    fn test_parse_file_contents_empty_input() {
        assert!(matches!(
            parse_file_contents(""),
            Err(LoadError::MissingHeader)
        ));
    }

    #[test]
    fn test_parse_file_contents_missing_height() {
        assert!(matches!(
            parse_file_contents("3"),
            Err(LoadError::MissingHeader)
        ));
    }

    #[test]
    fn test_parse_file_contents_invalid_header() {
        assert!(matches!(
            parse_file_contents("3 3 3\n...\n...\n..E"),
            Err(LoadError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_file_contents("3\n1 1\n..E"),
            Err(LoadError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_parse_file_contents_invalid_dimension() {
        let result = parse_file_contents("three 1\n..E");
        assert!(
            matches!(result, Err(LoadError::InvalidDimension { ref value, .. }) if value == "three"),
            "non-numeric width should be reported, got {result:?}"
        );
        assert!(matches!(
            parse_file_contents("-3 1\n..E"),
            Err(LoadError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_parse_file_contents_row_count_mismatch() {
        let result = parse_file_contents("3 3\n###\n#.E");
        assert!(matches!(
            result,
            Err(LoadError::Grid(MazeError::MalformedGrid(
                Malformation::RowCount {
                    expected: 3,
                    found: 2
                }
            )))
        ));
    }

    #[test]
    fn test_parse_file_contents_width_mismatch() {
        let result = parse_file_contents("4 2\n####\n#.E");
        assert!(matches!(
            result,
            Err(LoadError::Grid(MazeError::MalformedGrid(
                Malformation::RowLength { row: 1, .. }
            )))
        ));
    }

    #[test]
    fn test_parse_file_contents_oversized_header() {
        for contents in ["18446744073709551615 1\n.E\n", "100000000000 1\n.E\n"] {
            let result = parse_file_contents(contents);
            assert!(
                matches!(
                    result,
                    Err(LoadError::Grid(MazeError::MalformedGrid(
                        Malformation::RowLength {
                            row: 0,
                            found: 2,
                            ..
                        }
                    )))
                ),
                "{contents:?} declares a width its rows do not have"
            );
        }
    }

    #[test]
    fn test_parse_file_contents_unknown_symbol() {
        let result = parse_file_contents("3 1\n.1E");
        assert!(matches!(
            result,
            Err(LoadError::Grid(MazeError::MalformedGrid(
                Malformation::UnknownSymbol { symbol: '1', .. }
            )))
        ));
    }

    #[test]
    fn test_parse_file_contents_zero_dimension() {
        assert!(matches!(
            parse_file_contents("0 0\n"),
            Err(LoadError::Grid(MazeError::MalformedGrid(
                Malformation::ZeroDimension { .. }
            )))
        ));
    }

    #[test]
    fn test_sample_labyrinth() {
        let grid = parse_file_contents(SAMPLE).expect("sample labyrinth should parse");

        assert_eq!(grid.width(), 21);
        assert_eq!(grid.height(), 11);
        assert!(grid.exits().count() >= 1, "sample labyrinth has an exit");
    }

    #[test]
    fn test_load_file() {
        let path = env::temp_dir().join(format!("labyrinth-escape-{}.maze", std::process::id()));
        fs::write(&path, "3 1\n..E\n").expect("temporary file should be writable");

        let result = load_file(&path);
        fs::remove_file(&path).expect("temporary file should be removable");

        let grid = result.expect("temporary labyrinth should load");
        assert_eq!(grid.cell_at(2, 0), Ok(CellType::Exit));
    }

    #[test]
    fn test_load_file_missing() {
        let path = Path::new("this/labyrinth/does/not/exist.maze");

        let result = load_file(path);

        assert!(
            matches!(result, Err(LoadError::Read { ref path, .. }) if path.ends_with("exist.maze")),
            "missing files should report their path"
        );
    }
}
