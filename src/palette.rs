use ratatui::style::Color;

/// Food colour, independent of level.
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);

/// Eye colour drawn on the snake head.
pub const EYE_COLOR: Color = Color::Rgb(255, 255, 255);

/// Board background.
pub const BOARD_BG: Color = Color::Black;

/// Snake colours for levels 1 to 5, in order.
const LEVEL_COLORS: [Color; 5] = [
    Color::Rgb(0, 255, 0),
    Color::Rgb(0, 0, 255),
    Color::Rgb(255, 255, 0),
    Color::Rgb(255, 0, 255),
    Color::Rgb(255, 165, 0),
];

/// Colour for every level past the table.
const FALLBACK_COLOR: Color = Color::Rgb(255, 0, 0);

/// Returns the snake colour for `level`.
///
/// Levels beyond the table clamp to the fallback red rather than cycling.
#[must_use]
pub fn snake_color(level: u32) -> Color {
    level
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| LEVEL_COLORS.get(index).copied())
        .unwrap_or(FALLBACK_COLOR)
}
