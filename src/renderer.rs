use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    GLYPH_FOOD, GLYPH_MAZE_GOAL, GLYPH_MAZE_START, GLYPH_REFERENCE_PATH, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD, GLYPH_WALL, GridSize, THEME,
};
use crate::game::{GameState, PlayMode};
use crate::grid::Cell;
use crate::ui::hud::{HudInfo, render_hud};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, hud_info);

    let block = Block::bordered().border_style(Style::new().fg(THEME.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if state.play_mode() == PlayMode::Maze {
        render_maze(frame, inner, state);
    }
    render_food(frame, inner, state);
    render_snake(frame, inner, state);
}

fn render_maze(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let bounds = state.bounds();
    let maze = state.maze();
    let buffer = frame.buffer_mut();

    // Informational only: the autopilot replans from live obstacles.
    for cell in maze.reference_path() {
        if let Some((x, y)) = logical_to_terminal(inner, bounds, *cell) {
            buffer.set_string(x, y, GLYPH_REFERENCE_PATH, Style::new().fg(THEME.reference_path));
        }
    }

    for wall in maze.walls() {
        if let Some((x, y)) = logical_to_terminal(inner, bounds, *wall) {
            buffer.set_string(x, y, GLYPH_WALL, Style::new().fg(THEME.wall));
        }
    }

    if let Some((x, y)) = logical_to_terminal(inner, bounds, maze.start()) {
        buffer.set_string(
            x,
            y,
            GLYPH_MAZE_START,
            Style::new().fg(THEME.maze_start).add_modifier(Modifier::BOLD),
        );
    }
    if let Some((x, y)) = logical_to_terminal(inner, bounds, maze.goal()) {
        buffer.set_string(
            x,
            y,
            GLYPH_MAZE_GOAL,
            Style::new().fg(THEME.maze_goal).add_modifier(Modifier::BOLD),
        );
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(THEME.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let buffer = frame.buffer_mut();

    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(THEME.snake_head).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(THEME.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
