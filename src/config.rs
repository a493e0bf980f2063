use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RelverError, Result};

/// Complete configuration for relver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Returns the commit types included in changelogs by default.
fn default_changelog_types() -> Vec<String> {
    vec!["feat".to_string(), "fix".to_string()]
}

/// Configuration for changelog generation.
///
/// `types` lists the commit types included (and their order) when the
/// caller does not request specific categories.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_types")]
    pub types: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            types: default_changelog_types(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relver.toml` in the current directory
/// 3. `relver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|err| RelverError::config(format!("cannot read '{}': {}", path, err)))?
    } else if Path::new("./relver.toml").exists() {
        fs::read_to_string("./relver.toml")
            .map_err(|err| RelverError::config(format!("cannot read './relver.toml': {}", err)))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("relver.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|err| {
                RelverError::config(format!("cannot read '{}': {}", config_path.display(), err))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|err| RelverError::config(err.to_string()))
}
