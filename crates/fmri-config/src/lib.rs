//! # fmri-config
//!
//! Layered configuration loading for fmri-check using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FMRI_CHECK_*` prefix, `__` as separator)
//! 2. A file passed explicitly with `--config`
//! 3. Project-level `.fmri-check/config.toml`
//! 4. User-level `~/.config/fmri-check/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FMRI_CHECK_RULES__REQUIRED_KEY` -> `rules.required_key`,
//! `FMRI_CHECK_COHORTS__SUFFIX` -> `cohorts.suffix`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fmri_config::FmriConfig;
//!
//! fmri_config::load_dotenv();
//! let config = FmriConfig::load(None).expect("config");
//! let validator = fmri_core::CohortValidator::new(config.layout(), config.rule_set());
//! ```

mod cohorts;
mod error;
mod layout;
mod rules;

pub use cohorts::CohortsConfig;
pub use error::ConfigError;
pub use layout::LayoutConfig;
pub use rules::RulesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use fmri_core::{Layout, RuleSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read `.env` from the current directory into the process environment.
///
/// Call before anything that reads `FMRI_CHECK_*` variables, including the
/// log filter. A missing `.env` is normal.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "FMRI_CHECK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FmriConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub cohorts: CohortsConfig,
}

impl FmriConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT read `.env`; call [`load_dotenv`] first for that.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit)?.extract()?;
        config.validate()?;
        Ok(config)
    }


    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".fmri-check/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.rules.validate()?;
        self.cohorts.validate()
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::from(&self.layout)
    }

    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::from(&self.rules)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fmri-check").join("config.toml"))
    }
}
