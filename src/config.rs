//! Application configuration.

use crate::consts::form_consts::input::DEFAULT_MASK_CHAR;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Directory under `$HOME` holding the config file.
const CONFIG_DIR: &str = ".teacher-login";
const CONFIG_FILE: &str = "config.json";

/// Display preferences. Never holds form contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Paint the form panel with the light background.
    #[serde(default)]
    pub with_background_color: bool,

    /// Character drawn for each character of the secret.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Where diagnostic logs go in interactive mode.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_mask_char() -> char {
    DEFAULT_MASK_CHAR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_background_color: false,
            mask_char: DEFAULT_MASK_CHAR,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    /// The program itself never writes its config.
    #[cfg(test)]
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Path of the config file: `$HOME/.teacher-login/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}
