//! Configuration loading errors.

use thiserror::Error;

/// Errors that can occur while reading or writing a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be read, is not valid JSON, or does not match
    /// the configuration format. `serde_json::Error::classify` tells which.
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}
