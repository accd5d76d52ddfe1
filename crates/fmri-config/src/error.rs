//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A config file passed explicitly does not exist.
    #[error("Configuration file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn empty(field: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        }
    }
}
