//! User interface rendering functions for the viewer screen.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    map::MazeGrid,
    render::{half_extent, to_screen_coords, CanvasRenderer, Renderer as _},
    types::{Coord, Status},
    App,
};

/// Draws the whole viewer from the application state.
///
/// The screen is split into the control bar, the two labyrinth panels (input and solution) and the
/// key tooltip at the bottom.
///
/// # Errors
///
/// This function may return errors if the labyrinth does not fit the terminal coordinate range.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let [controls_area, body_area, tooltip_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [labyrinth_area, solution_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(body_area);

    controls(app, frame, controls_area);

    let labyrinth_inner = panel(frame, labyrinth_area, "Labyrinth");
    maze(frame, labyrinth_inner, &app.grid, Some(app.cursor))?;

    let solution_inner = panel(frame, solution_area, "Solution");
    match &app.solved {
        Some(solved) => maze(frame, solution_inner, solved, None)?,
        None => {
            let placeholder = Paragraph::new("No escape route to show")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, solution_inner);
        }
    }

    tooltip(frame, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders the start position selectors, the action hints and the status message.
fn controls(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title("Escaping a Labyrinth")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let status_style = match app.status {
        Status::Prompt => Style::default().fg(Color::Green),
        Status::Solved(_) => Style::default().fg(Color::White).bg(Color::Green),
        Status::Unsolvable | Status::Rejected(_) | Status::ReloadFailed(_) => {
            Style::default().fg(Color::Red)
        }
    };
    let line = Line::from(vec![
        Span::raw(format!(" X-Pos {:<4}", app.cursor.0)),
        Span::raw(format!("Y-Pos {:<4}", app.cursor.1)),
        Span::raw("(s) Solve  (r) Reset   "),
        Span::styled(app.status.message(), status_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Renders a bordered panel and returns its inner area.
fn panel(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Returns the area of one terminal cell per labyrinth cell, centered in `area`.
fn maze_space(area: Rect, grid: &MazeGrid) -> Result<Rect> {
    let [column] = Layout::horizontal([Constraint::Length(u16::try_from(grid.width())?)])
        .flex(Flex::Center)
        .areas(area);
    let [space] = Layout::vertical([Constraint::Length(u16::try_from(grid.height())?)])
        .flex(Flex::Center)
        .areas(column);

    Ok(space)
}

/// Draws `grid` on a [`Canvas`] centered in `area`, with an optional start cursor.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn maze(frame: &mut Frame, area: Rect, grid: &MazeGrid, cursor: Option<Coord>) -> Result<()> {
    let space = maze_space(area, grid)?;
    let layers = CanvasRenderer.render(grid)?;
    let cursor = cursor
        .map(|coord| to_screen_coords(&[coord], grid))
        .transpose()?
        .unwrap_or_default();
    let half_width = half_extent(grid.width())?;
    let half_height = half_extent(grid.height())?;

    let canvas = Canvas::default()
        .x_bounds([-half_width, half_width])
        .y_bounds([-half_height, half_height])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &layers.walls,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &layers.exits,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &layers.path,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &cursor,
                color: Color::Cyan,
            });
        });
    frame.render_widget(canvas, space);

    Ok(())
}

/// Renders the key bindings as a tooltip line at the bottom of the screen.
fn tooltip(frame: &mut Frame, area: Rect) {
    let tooltip_block = Block::default()
        .title("(h/l) x-pos / (j/k) y-pos / (s) solve / (r) reset / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, area);
}
