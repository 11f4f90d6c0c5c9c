//! Program-level errors
//!
//! Form validation never fails this way; see [`crate::validation::ValidationFailure`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but is not valid JSON for [`crate::config::Config`].
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, event polling or log file access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
