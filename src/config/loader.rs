use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::MentionsError;

const CONFIG_DIR: &str = "textarea-mentions";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's configuration, falling back to defaults when the file is
/// missing or unreadable
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, MentionsError> {
    let contents = fs::read_to_string(path).map_err(|source| MentionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, MentionsError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
