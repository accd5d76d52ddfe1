//! Rule set configuration.

use fmri_core::RuleSet;
use fmri_core::rules::{
    DEFAULT_REQUIRED_FILES, DEFAULT_REQUIRED_KEY, DEFAULT_RUN_MARKER, DEFAULT_SIDECAR_EXTENSION,
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_required_files() -> Vec<String> {
    DEFAULT_REQUIRED_FILES
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_run_marker() -> String {
    DEFAULT_RUN_MARKER.to_string()
}

fn default_sidecar_extension() -> String {
    DEFAULT_SIDECAR_EXTENSION.to_string()
}

fn default_required_key() -> String {
    DEFAULT_REQUIRED_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Filename fragments that must each appear in some `func/` file.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,

    /// Fragment marking run files that need a metadata companion.
    #[serde(default = "default_run_marker")]
    pub run_marker: String,

    /// Companion extension, without the leading dot.
    #[serde(default = "default_sidecar_extension")]
    pub sidecar_extension: String,

    /// Metadata key every companion must contain.
    #[serde(default = "default_required_key")]
    pub required_key: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            required_files: default_required_files(),
            run_marker: default_run_marker(),
            sidecar_extension: default_sidecar_extension(),
            required_key: default_required_key(),
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.required_files.is_empty() {
            return Err(ConfigError::empty("rules.required_files"));
        }
        if self.required_files.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "rules.required_files".to_string(),
                reason: "entries must not be empty".to_string(),
            });
        }
        if self.run_marker.is_empty() {
            return Err(ConfigError::empty("rules.run_marker"));
        }
        if self.sidecar_extension.is_empty() {
            return Err(ConfigError::empty("rules.sidecar_extension"));
        }
        if self.sidecar_extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "rules.sidecar_extension".to_string(),
                reason: "omit the leading dot (use \"json\", not \".json\")".to_string(),
            });
        }
        if self.required_key.is_empty() {
            return Err(ConfigError::empty("rules.required_key"));
        }
        Ok(())
    }
}

impl From<&RulesConfig> for RuleSet {
    fn from(config: &RulesConfig) -> Self {
        Self {
            required_files: config.required_files.clone(),
            run_marker: config.run_marker.clone(),
            sidecar_extension: config.sidecar_extension.clone(),
            required_key: config.required_key.clone(),
        }
    }
}
