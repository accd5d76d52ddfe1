//! Directory layout and rule set values consumed by the walker and checker.
//!
//! Defaults follow fMRIPrep derivative naming. Both structs are plain data so
//! configuration layers and tests can substitute their own values.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT_PREFIX: &str = "sub-";
pub const DEFAULT_SESSION_PREFIX: &str = "ses-";
pub const DEFAULT_FUNC_DIR: &str = "func";

/// Filename fragments that must each match at least one file in `func/`.
pub const DEFAULT_REQUIRED_FILES: [&str; 2] = ["bold.nii", "desc-confounds_regressors.tsv"];
pub const DEFAULT_RUN_MARKER: &str = "bold.nii";
pub const DEFAULT_SIDECAR_EXTENSION: &str = "json";
pub const DEFAULT_REQUIRED_KEY: &str = "RepetitionTime";

/// Naming convention of the cohort hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Prefix of subject directories directly under the cohort root.
    pub subject_prefix: String,
    /// Prefix of session directories directly under a subject.
    pub session_prefix: String,
    /// Name of the functional-data directory inside a session.
    pub func_dir: String,
}

impl Layout {
    /// `file` value reported when a session has no functional-data directory.
    #[must_use]
    pub fn func_dir_label(&self) -> String {
        format!("{} dir", self.func_dir)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            subject_prefix: DEFAULT_SUBJECT_PREFIX.to_string(),
            session_prefix: DEFAULT_SESSION_PREFIX.to_string(),
            func_dir: DEFAULT_FUNC_DIR.to_string(),
        }
    }
}

/// Presence and metadata rules applied to every functional-data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Case-sensitive filename fragments; one issue per fragment with no match.
    pub required_files: Vec<String>,
    /// Fragment identifying functional run files that need a metadata companion.
    pub run_marker: String,
    /// Extension substituted for the run file's last extension.
    pub sidecar_extension: String,
    /// Key that must be present in every companion document.
    pub required_key: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            required_files: DEFAULT_REQUIRED_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
            run_marker: DEFAULT_RUN_MARKER.to_string(),
            sidecar_extension: DEFAULT_SIDECAR_EXTENSION.to_string(),
            required_key: DEFAULT_REQUIRED_KEY.to_string(),
        }
    }
}
