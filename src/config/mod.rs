//! Configuration loading
//!
//! Reads `~/.config/kodama/config.toml`. A missing file means defaults; an
//! unreadable or invalid file is logged and also falls back to defaults.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::KodamaError;

pub use types::Config;

const CONFIG_DIR: &str = "kodama";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn parse_config(content: &str) -> Result<Config, KodamaError> {
    Ok(toml::from_str(content)?)
}

/// Strict load. A file that does not exist yields the default config.
pub fn load_config_from_path(path: &Path) -> Result<Config, KodamaError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

/// Lenient load from `path`, or the default location when `None`.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return Config::default(),
        },
    };

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            Config::default()
        }
    }
}
