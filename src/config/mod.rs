//! # Configuration Management Module
//!
//! Session defaults, logging and game options for the `termquest` binary,
//! loaded from a TOML file with every section optional.
//!
//! ## Configuration Structure
//!
//! - [`SessionConfig`] - initial username, hostname and "last command" seed
//! - [`LoggingConfig`] - log level and optional log file
//! - [`GameConfig`] - verb dispatch policy, starting room, help banner
//!
//! ## Usage
//!
//! ```rust,no_run
//! use termquest::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("termquest.toml").await?;
//!     config.validate()?;
//!     println!("Prompt user: {}", config.session.username);
//!
//!     Config::create_default("termquest.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [session]
//! username = "player"
//! hostname = "termquest"
//!
//! [logging]
//! level = "info"
//!
//! [game]
//! dispatch = "leading_token"
//! show_banner = true
//! ```
//!
//! Precedence: CLI args > Config file > Defaults

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tokio::fs;

use crate::game::{canonical_world_seed, DispatchMode};
use crate::terminal::IdentityField;
use crate::validation::validate_identity;

/// Default config file name used by the binary.
pub const DEFAULT_CONFIG_PATH: &str = "termquest.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_hostname")]
    pub hostname: String,
    /// Initial value of the interpreter's "last command" field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

fn default_username() -> String {
    "player".to_string()
}

fn default_hostname() -> String {
    "termquest".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            hostname: default_hostname(),
            command: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace, off.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub dispatch: DispatchMode,
    /// Room id to start in. Defaults to the clearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<String>,
    /// Include the ASCII banner at the top of `help`.
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_show_banner() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dispatch: DispatchMode::default(),
            start_location: None,
            show_banner: default_show_banner(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => Self::from_toml_str(&content)
                .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Write the default configuration to `path`.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Apply command-line identity overrides on top of the file values.
    pub fn apply_overrides(&mut self, username: Option<String>, hostname: Option<String>) {
        if let Some(username) = username {
            self.session.username = username;
        }
        if let Some(hostname) = hostname {
            self.session.hostname = hostname;
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_identity(IdentityField::Username, &self.session.username)?;
        validate_identity(IdentityField::Hostname, &self.session.hostname)?;

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(anyhow!("Invalid log level: {}", self.logging.level));
        }

        if let Some(start) = &self.game.start_location {
            if !canonical_world_seed().contains_room(start) {
                return Err(anyhow!("Unknown start_location: {}", start));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.session.username, "player");
        assert_eq!(config.session.hostname, "termquest");
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Info);
        assert_eq!(config.game.dispatch, DispatchMode::LeadingToken);
        assert!(config.game.show_banner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [game]
            dispatch = "exact_line"
            "#,
        )
        .unwrap();
        assert_eq!(config.game.dispatch, DispatchMode::ExactLine);
        assert_eq!(config.session, SessionConfig::default());
        assert!(config.game.show_banner);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.session.username = "two words".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.game.start_location = Some("moon".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::default();
        config.apply_overrides(Some("alice".to_string()), None);
        assert_eq!(config.session.username, "alice");
        assert_eq!(config.session.hostname, "termquest");
    }
}
