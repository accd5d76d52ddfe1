//! Resolution of command-line arguments into the cohort(s) to validate.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, ensure};
use fmri_config::FmriConfig;

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CohortSource {
    /// One cohort root.
    Single(PathBuf),
    /// A parent folder scanned for child cohorts ending in `suffix`.
    Parent { path: PathBuf, suffix: String },
    /// The sample dataset compiled into the binary.
    Demo,
}

pub fn resolve(cli: &Cli, config: &FmriConfig) -> anyhow::Result<CohortSource> {
    if cli.demo {
        if cli.path.is_some() {
            tracing::debug!("--demo given; ignoring PATH");
        }
        return Ok(CohortSource::Demo);
    }

    let raw = cli
        .path
        .as_deref()
        .context("a cohort PATH is required unless --demo is used")?;
    let path = expand_path(raw)?;

    if cli.multi {
        let suffix = cli
            .suffix
            .clone()
            .unwrap_or_else(|| config.cohorts.suffix.clone());
        ensure!(!suffix.is_empty(), "--suffix must not be empty");
        return Ok(CohortSource::Parent { path, suffix });
    }

    Ok(CohortSource::Single(path))
}

/// Expand a leading `~` and make the path absolute without touching the disk.
pub fn expand_path(raw: &Path) -> anyhow::Result<PathBuf> {
    let expanded = match raw.components().next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir().context("cannot expand '~': home directory unknown")?;
            home.join(raw.strip_prefix("~").unwrap_or(raw))
        }
        _ => raw.to_path_buf(),
    };

    std::path::absolute(&expanded)
        .with_context(|| format!("failed to resolve path {}", expanded.display()))
}
