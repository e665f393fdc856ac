//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. `.sql-review.toml` in current directory
//! 3. `~/.config/sql-review/config.toml`
//! 4. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [rules]
//! disabled = ["SQL001"]
//!
//! [rules.severity]
//! SQL040 = "error"
//! SQL042 = "info"
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig
}

/// Rules configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesConfig {
    /// Disabled rule IDs
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Severity overrides (rule_id -> severity), kept in file order
    #[serde(default)]
    pub severity: IndexMap<String, String>
}

impl Config {
    /// Load configuration from config files.
    ///
    /// Priority (highest to lowest):
    /// 1. Config file in current directory (.sql-review.toml)
    /// 2. Config file in home directory (~/.config/sql-review/config.toml)
    /// 3. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-review")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sql-review.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
