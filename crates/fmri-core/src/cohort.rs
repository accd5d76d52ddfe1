//! Cohort identities and multi-cohort discovery.

use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::walk;

/// Directory-name suffix marking a cohort when scanning a parent directory.
pub const DEFAULT_COHORT_SUFFIX: &str = "_fmriprep";

/// A named cohort root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub name: String,
    pub root: PathBuf,
}

impl Cohort {
    #[must_use]
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Cohort named after the last component of `root`.
    #[must_use]
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            name: walk::entry_name(&root),
            root,
        }
    }
}

/// Direct child directories of `parent` whose names end in `suffix`, sorted.
pub fn discover_cohorts(parent: &Path, suffix: &str) -> Result<Vec<Cohort>, CoreError> {
    walk::ensure_directory(parent)?;
    let cohorts: Vec<Cohort> = walk::child_dirs(parent, |name| name.ends_with(suffix))?
        .into_iter()
        .map(Cohort::from_root)
        .collect();

    tracing::info!(
        parent = %parent.display(),
        suffix,
        found = cohorts.len(),
        "discovered cohorts"
    );
    Ok(cohorts)
}
