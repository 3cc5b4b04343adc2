//! Board configuration.
//!
//! Loaded from a TOML file; every field has a default so an empty file (or no
//! file at all) yields the standard 15/30 minute thresholds.
//!
//! ```toml
//! [priority]
//! medium_after_minutes = 15
//! high_after_minutes = 30
//!
//! [actor]
//! buffer_size = 32
//! ```

use crate::board::PriorityPolicy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub priority: PriorityPolicy,
    pub actor: ActorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Capacity of the order actor's request channel.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl BoardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let priority = &self.priority;
        if priority.medium_after_minutes < 0 {
            return Err(ConfigError::Validation(
                "priority.medium_after_minutes cannot be negative".into(),
            ));
        }
        if priority.medium_after_minutes >= priority.high_after_minutes {
            return Err(ConfigError::Validation(format!(
                "priority.medium_after_minutes ({}) must be below priority.high_after_minutes ({})",
                priority.medium_after_minutes, priority.high_after_minutes
            )));
        }
        if self.actor.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "actor.buffer_size must be positive".into(),
            ));
        }
        Ok(())
    }
}
