use crate::snake::Position;

/// Default board width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;

/// Default board height in pixels.
pub const DEFAULT_HEIGHT: u32 = 800;

/// Default edge length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Snake length at the start of a game.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Redraw/input polling interval in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Score needed per level increase.
pub const POINTS_PER_LEVEL: u32 = 10;

/// Terminal columns used to draw one grid cell.
pub const CELL_COLUMNS: u16 = 2;

/// Filled circle used for snake segments and food.
pub const GLYPH_ORB: &str = "●";

/// Head cells: two eye dots on the side the snake is heading.
pub const GLYPH_HEAD_UP: &str = "⠈⠁";
pub const GLYPH_HEAD_DOWN: &str = "⢀⡀";
pub const GLYPH_HEAD_LEFT: &str = "⠅ ";
pub const GLYPH_HEAD_RIGHT: &str = " ⠨";

/// Logical grid dimensions in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the centre cell, rounding toward the top-left.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Immutable board configuration handed to `GameState` on construction.
///
/// Dimensions are expressed in pixels so that a pixel-based renderer can map
/// cells back onto the surface it draws on. The simulation itself only ever
/// sees the derived [`GridSize`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            initial_length: DEFAULT_INITIAL_LENGTH,
        }
    }
}

impl GameConfig {
    /// Returns the grid dimensions in cells.
    ///
    /// Degenerate inputs still yield at least a 1×1 grid.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        let cell = self.cell_size.max(1);
        GridSize {
            width: cells_along(self.width, cell),
            height: cells_along(self.height, cell),
        }
    }

    /// Returns the top-left pixel of a cell.
    #[must_use]
    pub fn cell_origin(&self, position: Position) -> (i64, i64) {
        let cell = i64::from(self.cell_size);
        (i64::from(position.x) * cell, i64::from(position.y) * cell)
    }

    /// Returns the centre pixel of a cell, as used for circle drawing.
    #[must_use]
    pub fn cell_center(&self, position: Position) -> (i64, i64) {
        let (x, y) = self.cell_origin(position);
        let half = i64::from(self.cell_size / 2);
        (x + half, y + half)
    }
}

fn cells_along(pixels: u32, cell: u32) -> u16 {
    u16::try_from(pixels / cell).unwrap_or(u16::MAX).max(1)
}
