use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::palette::snake_color;

/// Rows reserved for the HUD below the board.
pub const HUD_HEIGHT: u16 = 1;

const CONTROLS_HINT: &str = "arrows/WASD move │ q quit";

/// Renders the status row and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(status_area);

    frame.render_widget(
        Paragraph::new(status_line(state))
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::Gray)),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(CONTROLS_HINT))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        right,
    );

    play_area
}

/// `Score: 7 │ Level: 1 │ Length: 10`, with the level tinted like the snake.
fn status_line(state: &GameState) -> Line<'static> {
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let level = Style::default()
        .fg(snake_color(state.level()))
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(state.score().to_string(), value),
        Span::raw(" │ "),
        Span::raw("Level: "),
        Span::styled(state.level().to_string(), level),
        Span::raw(" │ "),
        Span::raw("Length: "),
        Span::styled(state.snake().len().to_string(), value),
    ])
}
