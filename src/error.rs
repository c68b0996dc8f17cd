use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Failures of the terminal front end. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal setup or drawing failed: {0}")]
    Terminal(#[source] io::Error),

    #[error("reading keyboard input failed: {0}")]
    Input(#[source] io::Error),

    #[error("cannot create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a logger is already installed")]
    Logger(#[from] SetLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
