use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_COLUMNS, GLYPH_HEAD_DOWN, GLYPH_HEAD_LEFT, GLYPH_HEAD_RIGHT, GLYPH_HEAD_UP, GLYPH_ORB,
    GridSize,
};
use crate::game::GameState;
use crate::input::Direction;
use crate::palette::{BOARD_BG, EYE_COLOR, FOOD_COLOR, snake_color};
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::overlay::{centered_popup, render_game_over, render_too_small};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let board_size = board_size(state.bounds());

    if !board_fits(Size::from(area), state.bounds()) {
        render_too_small(
            frame,
            area,
            board_size.width,
            board_size.height + HUD_HEIGHT,
        );
        return;
    }

    let play_area = render_hud(frame, area, state);
    let board = centered_popup(play_area, board_size.width, board_size.height);

    let block = Block::bordered()
        .title(" snake ")
        .style(Style::new().bg(BOARD_BG));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    if state.is_over() {
        render_game_over(frame, board, state);
    }
}

/// Terminal size of the bordered board for `bounds`.
#[must_use]
pub fn board_size(bounds: GridSize) -> Size {
    Size {
        width: bounds.width.saturating_mul(CELL_COLUMNS).saturating_add(2),
        height: bounds.height.saturating_add(2),
    }
}

/// Returns true when a terminal of `available` size shows the whole board and HUD.
#[must_use]
pub fn board_fits(available: Size, bounds: GridSize) -> bool {
    let needed = board_size(bounds);
    available.width >= needed.width && available.height >= needed.height.saturating_add(HUD_HEIGHT)
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), state.food()) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_ORB, Style::new().fg(FOOD_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let color = snake_color(state.level());
    let head = state.head();

    let buffer = frame.buffer_mut();
    for segment in state.segments().skip(1) {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        buffer.set_string(x, y, GLYPH_ORB, Style::new().fg(color));
    }

    // Drawn last so the head stays visible on the fatal frame.
    if let Some((x, y)) = cell_to_terminal(inner, state.bounds(), head) {
        buffer.set_string(
            x,
            y,
            head_glyph(state.direction()),
            Style::new()
                .fg(EYE_COLOR)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
