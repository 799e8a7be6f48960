//! Application configuration, read from TOML.
//!
//! ```
//! use sokoban_engine::config::AppConfig;
//! use sokoban_engine::core::VoidPolicy;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [rules]
//!     void_policy = "blocked"
//!
//!     [logging]
//!     filter = "debug"
//! "#).unwrap();
//!
//! assert_eq!(config.rules.void_policy, VoidPolicy::Blocked);
//! assert_eq!(config.logging.filter, "debug");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::RulesConfig;
use crate::level::SymbolSet;

pub const DEFAULT_CONFIG_FILE: &str = "sokoban.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub levels: LevelsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelsConfig {
    /// JSON catalog replacing the built-in levels.
    pub file: Option<PathBuf>,
    pub symbols: SymbolSet,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("sokoban.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Missing file means defaults; a file that exists must parse.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty".to_string()));
        }
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("logging.file must not be empty".to_string()));
        }
        Ok(())
    }
}
