use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::{AppError, Result};

/// Routes `log` output into `path`.
///
/// The terminal belongs to the game while it runs, so records never go to
/// stdout or stderr. Without a call to this function the log macros are no-ops.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
