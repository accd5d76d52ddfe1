//! Bundled sample cohort for offline demonstration.
//!
//! The files are compiled into the binary and written to a fresh temporary
//! directory per run, so the demo works from any install location and never
//! mutates shared data.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::TempDir;

/// Cohort name used for the materialized sample.
pub const SAMPLE_COHORT_NAME: &str = "sample_data";

macro_rules! sample_file {
    ($rel:literal) => {
        ($rel, include_bytes!(concat!("../sample_data/", $rel)) as &[u8])
    };
}

const SAMPLE_FILES: &[(&str, &[u8])] = &[
    sample_file!("dataset_description.json"),
    sample_file!("sub-01/ses-01/func/sub-01_ses-01_task-rest_bold.nii"),
    sample_file!("sub-01/ses-01/func/sub-01_ses-01_task-rest_bold.json"),
    sample_file!("sub-01/ses-01/func/sub-01_ses-01_task-rest_desc-confounds_regressors.tsv"),
    sample_file!("sub-02/ses-01/func/sub-02_ses-01_task-rest_bold.nii"),
    sample_file!("sub-02/ses-01/func/sub-02_ses-01_task-rest_bold.json"),
    sample_file!("sub-02/ses-01/func/sub-02_ses-01_task-rest_desc-confounds_regressors.tsv"),
];

/// The sample cohort on disk; removed when dropped.
pub struct DemoCohort {
    _dir: TempDir,
    root: PathBuf,
}

impl DemoCohort {
    pub fn materialize() -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("fmri-check-demo-")
            .tempdir()
            .context("failed to create temporary directory for sample data")?;
        let root = dir.path().join(SAMPLE_COHORT_NAME);

        for (rel, bytes) in SAMPLE_FILES {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }

        tracing::debug!(root = %root.display(), files = SAMPLE_FILES.len(), "materialized sample data");
        Ok(Self { _dir: dir, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
