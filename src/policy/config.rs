//! TOML configuration file.
//!
//! Loading only reads and parses. The policy is validated once it has
//! been merged with any command-line overrides, by
//! [`PasswordGenerator::new`](crate::PasswordGenerator::new).

use super::Policy;
use crate::rng::EntropySource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileRead(String),
    /// The file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Password policy; unset fields take [`Policy::default`] values.
    #[serde(default)]
    pub policy: Policy,
    /// How many passwords to produce and from which source.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of passwords to print.
    pub count: usize,
    /// Random source used for generation.
    pub source: EntropySource,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: 1,
            source: EntropySource::Os,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
