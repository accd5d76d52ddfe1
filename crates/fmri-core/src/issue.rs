use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Problem;

/// One detected problem inside a cohort.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    /// Name of the enclosing `sub-*` directory.
    pub subject: String,
    /// Name of the enclosing `ses-*` directory.
    pub session: String,
    /// Logical file or directory the check concerns; need not exist on disk.
    pub file: String,
    pub problem: Problem,
    /// Source cohort, only set in multi-cohort runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        session: impl Into<String>,
        file: impl Into<String>,
        problem: Problem,
    ) -> Self {
        Self {
            subject: subject.into(),
            session: session.into(),
            file: file.into(),
            problem,
            cohort: None,
        }
    }

    /// Tag the issue with the cohort it was found in.
    #[must_use]
    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = Some(cohort.into());
        self
    }
}

/// Combined result of validating one or more cohorts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
    pub cohorts_scanned: usize,
}

impl ValidationReport {
    /// Report for a single, untagged cohort.
    #[must_use]
    pub const fn single(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            cohorts_scanned: 1,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether any issue carries a cohort tag.
    #[must_use]
    pub fn has_cohorts(&self) -> bool {
        self.issues.iter().any(|issue| issue.cohort.is_some())
    }
}
