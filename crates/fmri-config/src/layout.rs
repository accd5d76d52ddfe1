//! Cohort directory naming.

use fmri_core::Layout;
use fmri_core::rules::{DEFAULT_FUNC_DIR, DEFAULT_SESSION_PREFIX, DEFAULT_SUBJECT_PREFIX};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_subject_prefix() -> String {
    DEFAULT_SUBJECT_PREFIX.to_string()
}

fn default_session_prefix() -> String {
    DEFAULT_SESSION_PREFIX.to_string()
}

fn default_func_dir() -> String {
    DEFAULT_FUNC_DIR.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Prefix of subject directories (e.g., `sub-`).
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,

    /// Prefix of session directories (e.g., `ses-`).
    #[serde(default = "default_session_prefix")]
    pub session_prefix: String,

    /// Functional-data directory inside each session.
    #[serde(default = "default_func_dir")]
    pub func_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            subject_prefix: default_subject_prefix(),
            session_prefix: default_session_prefix(),
            func_dir: default_func_dir(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subject_prefix.is_empty() {
            return Err(ConfigError::empty("layout.subject_prefix"));
        }
        if self.session_prefix.is_empty() {
            return Err(ConfigError::empty("layout.session_prefix"));
        }
        if self.func_dir.is_empty() {
            return Err(ConfigError::empty("layout.func_dir"));
        }
        if self.func_dir.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "layout.func_dir".to_string(),
                reason: "must be a single directory name".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&LayoutConfig> for Layout {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            subject_prefix: config.subject_prefix.clone(),
            session_prefix: config.session_prefix.clone(),
            func_dir: config.func_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_layout() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(Layout::from(&config), Layout::default());
    }

    #[test]
    fn rejects_nested_func_dir() {
        let config = LayoutConfig {
            func_dir: "func/bold".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "layout.func_dir"
        ));
    }
}
