use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, info};
use orb_snake::config::{FRAME_INTERVAL_MS, GameConfig, TICK_INTERVAL_MS};
use orb_snake::error::{AppError, Result};
use orb_snake::game::GameState;
use orb_snake::input::{GameInput, InputHandler};
use orb_snake::logging::init_file_logger;
use orb_snake::renderer;
use orb_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};

#[derive(Debug, Parser)]
#[command(version, about = "Arcade Snake on a wraparound grid")]
struct Cli {
    /// Seed for food placement, for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write log records to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Minimum level of records written to the log file.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    install_panic_hook();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("orb-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let config = GameConfig::default();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    info!(
        "starting {}x{} board, seed {:?}",
        state.bounds().width,
        state.bounds().height,
        cli.seed
    );

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    session.set_title(&state.title())?;

    'game: loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state))
            .map_err(AppError::Terminal)?;

        for game_input in input.drain().map_err(AppError::Input)? {
            match game_input {
                GameInput::Quit => break 'game,
                GameInput::Confirm if state.is_over() => break 'game,
                GameInput::Direction(direction) => state.set_direction(direction),
                GameInput::Confirm => {}
            }
        }

        let size = session.terminal_mut().size().map_err(AppError::Terminal)?;
        if !renderer::board_fits(size, state.bounds()) {
            // Paused while the board is hidden behind the too-small notice.
            last_tick = Instant::now();
        } else if !state.is_over() && last_tick.elapsed() >= tick_interval {
            let effects = state.tick();
            last_tick = Instant::now();

            if effects.ate_food {
                session.set_title(&state.title())?;
            }
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    info!(
        "session ended: score {}, level {}",
        state.score(),
        state.level()
    );
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
