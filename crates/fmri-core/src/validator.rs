//! Cohort-level composition of the walker and the rule checker.

use std::path::Path;

use crate::checker::RuleChecker;
use crate::cohort::Cohort;
use crate::errors::CoreError;
use crate::issue::{Issue, ValidationReport};
use crate::rules::{Layout, RuleSet};
use crate::walk;

/// Validate `cohort_root` with the default layout and rule set.
///
/// Issues come back in walk order: subjects, then sessions, then rules in
/// their fixed order. An existing directory with no subjects yields an empty
/// list; a missing or non-directory root is an error.
pub fn validate(cohort_root: &Path) -> Result<Vec<Issue>, CoreError> {
    CohortValidator::default().validate(cohort_root)
}

#[derive(Debug, Clone, Default)]
pub struct CohortValidator {
    layout: Layout,
    rules: RuleSet,
}

impl CohortValidator {
    #[must_use]
    pub const fn new(layout: Layout, rules: RuleSet) -> Self {
        Self { layout, rules }
    }

    pub fn validate(&self, cohort_root: &Path) -> Result<Vec<Issue>, CoreError> {
        walk::ensure_directory(cohort_root)?;

        let checker = RuleChecker::new(&self.layout, &self.rules);
        let mut issues = Vec::new();
        for session in walk::session_dirs(cohort_root, &self.layout)? {
            issues.extend(checker.check_session(&session)?);
        }

        tracing::info!(
            root = %cohort_root.display(),
            issues = issues.len(),
            "validated cohort"
        );
        Ok(issues)
    }

    /// Validate one cohort and tag every issue with its name.
    pub fn validate_cohort(&self, cohort: &Cohort) -> Result<Vec<Issue>, CoreError> {
        Ok(self
            .validate(&cohort.root)?
            .into_iter()
            .map(|issue| issue.with_cohort(cohort.name.clone()))
            .collect())
    }

    /// Validate cohorts one after another and concatenate their issues.
    pub fn validate_all(&self, cohorts: &[Cohort]) -> Result<ValidationReport, CoreError> {
        let mut report = ValidationReport::default();
        for cohort in cohorts {
            let _span = tracing::info_span!("cohort", name = %cohort.name).entered();
            report.issues.extend(self.validate_cohort(cohort)?);
            report.cohorts_scanned += 1;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::enums::Problem;

    #[test]
    fn empty_root_has_no_issues() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(validate(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn file_root_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("cohort");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            validate(&file),
            Err(CoreError::NotADirectory { .. })
        ));
    }

    #[test]
    fn validate_cohort_tags_issues() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("site_fmriprep/sub-01/ses-01")).unwrap();

        let cohort = Cohort::from_root(tmp.path().join("site_fmriprep"));
        let issues = CohortValidator::default().validate_cohort(&cohort).unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].problem, Problem::Missing);
        assert_eq!(issues[0].cohort.as_deref(), Some("site_fmriprep"));
    }

    #[test]
    fn validate_all_stops_on_missing_cohort() {
        let tmp = tempfile::tempdir().unwrap();
        let cohorts = [Cohort::new("gone", tmp.path().join("gone"))];

        let result = CohortValidator::default().validate_all(&cohorts);
        assert!(matches!(result, Err(CoreError::CohortNotFound { .. })));
    }
}
