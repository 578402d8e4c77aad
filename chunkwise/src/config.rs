//! Chunking configuration

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Default maximum number of elements per chunk
    pub const MAX_SIZE: i64 = 1024;
}

/// Chunking configuration
///
/// `max_size` is signed because it usually comes from user input or a TOML
/// file. Any value below 1 is accepted and means "produce no chunks".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Upper bound on chunk length
    pub max_size: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: defaults::MAX_SIZE,
        }
    }
}

/// Shape of a configuration document
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    chunking: Config,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML document with a `[chunking]` table.
    ///
    /// ```rust
    /// use chunkwise::Config;
    ///
    /// let config = Config::from_toml_str("[chunking]\nmax_size = 64\n").unwrap();
    /// assert_eq!(config.max_size, 64);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.chunking)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Whether this configuration can ever produce a chunk
    pub fn is_degenerate(&self) -> bool {
        self.max_size < 1
    }

    /// Maximum size as the core algorithm takes it.
    ///
    /// Non-positive values map to 0. Values too large for `usize` saturate,
    /// which is equivalent since no slice can be longer.
    pub(crate) fn effective_max_size(&self) -> usize {
        effective_max_size(self.max_size)
    }
}

pub(crate) fn effective_max_size(max_size: i64) -> usize {
    if max_size < 1 {
        return 0;
    }
    usize::try_from(max_size).unwrap_or(usize::MAX)
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_size: Option<i64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk size
    pub fn max_size(mut self, max_size: i64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let mut config = Config::default();

        if let Some(max_size) = self.max_size {
            config.max_size = max_size;
        }

        config
    }
}
