use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::{AppError, Result};

/// Prefix placed before the score text in the window title.
pub const WINDOW_TITLE_PREFIX: &str = "Snake Game - ";

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    title: String,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(AppError::Terminal)?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(AppError::Terminal(error));
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                title: String::new(),
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(AppError::Terminal(error))
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Sets the window title to `text` behind the game prefix.
    ///
    /// Unchanged titles are not re-sent.
    pub fn set_title(&mut self, text: &str) -> Result<()> {
        let title = window_title(text);
        if title == self.title {
            return Ok(());
        }

        let backend = self.terminal.backend_mut();
        execute!(backend, SetTitle(&title)).map_err(AppError::Terminal)?;
        self.title = title;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Builds the full window title, e.g. `Snake Game - Score: 7 | Level: 1`.
#[must_use]
pub fn window_title(text: &str) -> String {
    format!("{WINDOW_TITLE_PREFIX}{text}")
}

/// Leaves raw mode and the alternate screen, ignoring individual failures.
pub fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
