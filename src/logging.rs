//! Log setup.
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one is configured.

use crate::config::LogConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown log level: {0}")]
    Level(String),

    #[error("Failed to install logger: {0}")]
    Install(String),
}

/// Install the global subscriber. Returns whether logging is active.
pub fn init(config: &LogConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let level: tracing::Level = config
        .level
        .parse()
        .map_err(|_| LoggingError::Level(config.level.clone()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(true)
}
