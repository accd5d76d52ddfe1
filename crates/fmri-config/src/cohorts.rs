//! Multi-cohort discovery settings.

use fmri_core::DEFAULT_COHORT_SUFFIX;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_suffix() -> String {
    DEFAULT_COHORT_SUFFIX.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CohortsConfig {
    /// Directory-name suffix identifying cohorts under a parent directory.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for CohortsConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

impl CohortsConfig {
    /// An empty suffix would match every child directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::empty("cohorts.suffix"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(CohortsConfig::default().suffix, "_fmriprep");
        assert!(CohortsConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let config = CohortsConfig {
            suffix: String::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "cohorts.suffix"
        ));
    }
}
