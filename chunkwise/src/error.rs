//! API error types
//!
//! Splitting itself never fails. These errors cover loading configuration
//! and serializing layouts. Failures raised by chunk visitors are returned
//! to the caller as-is and never pass through [`ApiError`].

use std::path::PathBuf;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration file could not be read
    #[error("failed to read configuration from {path}: {source}")]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration document is not valid TOML or has the wrong shape
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "json")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
