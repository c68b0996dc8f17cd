use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit step `(dx, dy)` on the grid; `y` grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
    Confirm,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates terminal key events into [`GameInput`].
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains every event that is ready right now, in arrival order.
    ///
    /// Never blocks; frame pacing belongs to the caller.
    pub fn drain(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = self.map_key(key) {
                    inputs.push(input);
                }
            }
        }

        Ok(inputs)
    }

    /// Maps one key event; key releases are dropped.
    #[must_use]
    pub fn map_key(&self, key: KeyEvent) -> Option<GameInput> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(GameInput::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s' | 'S') => {
                Some(GameInput::Direction(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a' | 'A') => {
                Some(GameInput::Direction(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d' | 'D') => {
                Some(GameInput::Direction(Direction::Right))
            }
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
            _ => None,
        }
    }
}
