//! Logging module for debug mode
//!
//! Provides logging module that writes to a file in the temp directory
//! with timestamps when --debug is specified

use crate::constants::LOG_FILE_NAME;
use log::{debug, error, info, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

// the logger can only be installed once per process
static INIT: Once = Once::new();

/// Initializes logging in the system temp directory
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    init_debug_logging_in(&std::env::temp_dir())
}

/// Initializes logging to `LOG_FILE_NAME` inside `dir`
/// The file is truncated; the TUI never sees log output
pub fn init_debug_logging_in(dir: &Path) -> crate::Result<PathBuf> {
    let log_path = dir.join(LOG_FILE_NAME);

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| {
            crate::RentCalcError::file_access_error(
                &log_path.to_string_lossy(),
                &format!("Failed to create log file: {}", e),
            )
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug) // debug and above
            .filter_module("crossterm", log::LevelFilter::Warn)
            .filter_module("ratatui", log::LevelFilter::Warn)
            .target(env_logger::Target::Pipe(Box::new(log_file))) // pipe console to file
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

/// Log a debug message if debug mode is enabled
pub fn debug_log(msg: &str) {
    debug!("{}", msg);
}

/// Log an info message if debug mode is enabled
pub fn info_log(msg: &str) {
    info!("{}", msg);
}

/// Log a warning message if debug mode is enabled
pub fn warn_log(msg: &str) {
    warn!("{}", msg);
}

/// Log an error message if debug mode is enabled
pub fn error_log(msg: &str) {
    error!("{}", msg);
}
