//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::error::AppError;
use crate::ui::UIConfig;
use std::path::{Path, PathBuf};

/// Settings for an interactive session, after merging config file and CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// Display settings handed to the form
    pub ui_config: UIConfig,
    /// Destination of diagnostic logs, if any
    pub log_file: Option<PathBuf>,
}

/// Loads `$HOME/.teacher-login/config.json`, falling back to defaults when absent.
pub fn load_config() -> Result<Config, AppError> {
    load_config_from(&get_config_path()?)
}

fn load_config_from(path: &Path) -> Result<Config, AppError> {
    Ok(Config::load_or_default(path)?)
}

/// Merges the loaded config with command-line overrides.
///
/// A set flag always wins; an unset flag leaves the file's value.
pub fn setup_session(
    config: Config,
    with_background: bool,
    log_file: Option<PathBuf>,
) -> SessionData {
    SessionData {
        ui_config: UIConfig::new(
            with_background || config.with_background_color,
            config.mask_char,
        ),
        log_file: log_file.or(config.log_file),
    }
}
