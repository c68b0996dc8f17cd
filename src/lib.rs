//! Arcade Snake on a wraparound grid.
//!
//! [`game::GameState`] is the whole rule set: a deterministic state machine
//! advanced one tick at a time. Everything else draws it in a terminal or
//! feeds it keyboard input.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod palette;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
