use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::GameState;

const POPUP_WIDTH: u16 = 30;
const POPUP_HEIGHT: u16 = 9;

/// Draws the final result as a centered popup over the frozen board.
pub fn render_game_over(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {}", state.score())),
        Line::from(format!("Level: {}", state.level())),
        Line::from(format!("Length: {}", state.snake().len())),
        Line::from(""),
        Line::from("[Q]/[Enter] Quit").style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Tells the player how large the terminal must be to fit the board.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed_width: u16, needed_height: u16) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {needed_width}x{needed_height}, have {}x{}",
            area.width, area.height
        )),
    ];
    let popup = centered_popup(area, area.width, 2);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        popup,
    );
}

/// Returns a `width` x `height` rectangle centred in `area`, shrunk to fit.
#[must_use]
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}
