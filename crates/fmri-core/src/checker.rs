//! Per-session rule evaluation.
//!
//! Rules run in a fixed order so output is deterministic:
//!
//! ```text
//! func dir present? ── no ──> [func dir: missing]   (stop)
//!        │ yes
//!        ├─> each required fragment matched by some file?   [<fragment>: missing]
//!        └─> each run file: companion present?               [<companion>: missing]
//!                           companion parses?                [<companion>: unreadable]
//!                           required key present?            [<companion>: no TR]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::enums::Problem;
use crate::errors::CoreError;
use crate::issue::Issue;
use crate::rules::{Layout, RuleSet};
use crate::walk::{self, SessionDir};

/// Applies a [`RuleSet`] to individual session directories.
#[derive(Debug, Clone, Copy)]
pub struct RuleChecker<'a> {
    layout: &'a Layout,
    rules: &'a RuleSet,
}

impl<'a> RuleChecker<'a> {
    #[must_use]
    pub const fn new(layout: &'a Layout, rules: &'a RuleSet) -> Self {
        Self { layout, rules }
    }

    /// Evaluate every rule for one session.
    ///
    /// Only a failing `func/` listing is an error; all findings are issues.
    pub fn check_session(&self, session: &SessionDir) -> Result<Vec<Issue>, CoreError> {
        let func_dir = session.path.join(&self.layout.func_dir);
        if !func_dir.is_dir() {
            tracing::debug!(
                subject = %session.subject,
                session = %session.session,
                "functional directory missing"
            );
            return Ok(vec![issue(
                session,
                self.layout.func_dir_label(),
                Problem::Missing,
            )]);
        }

        let files = walk::files_in(&func_dir)?;
        let names: Vec<String> = files.iter().map(|path| walk::entry_name(path)).collect();

        let mut issues = self.check_required_files(session, &names);
        issues.extend(self.check_run_metadata(session, &files, &names));
        Ok(issues)
    }

    fn check_required_files(&self, session: &SessionDir, names: &[String]) -> Vec<Issue> {
        self.rules
            .required_files
            .iter()
            .filter(|fragment| !names.iter().any(|name| name.contains(fragment.as_str())))
            .map(|fragment| issue(session, fragment.clone(), Problem::Missing))
            .collect()
    }

    fn check_run_metadata(
        &self,
        session: &SessionDir,
        files: &[PathBuf],
        names: &[String],
    ) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (run, name) in files.iter().zip(names) {
            if !name.contains(&self.rules.run_marker) {
                continue;
            }

            let companion = self.companion_path(run);
            if let Some(problem) = self.inspect_companion(&companion) {
                issues.push(issue(session, walk::entry_name(&companion), problem));
            }
        }
        issues
    }

    /// Run file with its last extension swapped for the sidecar extension.
    #[must_use]
    pub fn companion_path(&self, run: &Path) -> PathBuf {
        run.with_extension(&self.rules.sidecar_extension)
    }

    fn inspect_companion(&self, path: &Path) -> Option<Problem> {
        if !path.exists() {
            return Some(Problem::Missing);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read metadata companion");
                return Some(Problem::Unreadable);
            }
        };

        let document: serde_json::Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "malformed metadata companion");
                return Some(Problem::Unreadable);
            }
        };

        let has_key = document
            .as_object()
            .is_some_and(|map| map.contains_key(&self.rules.required_key));
        if has_key { None } else { Some(Problem::NoTr) }
    }
}

fn issue(session: &SessionDir, file: impl Into<String>, problem: Problem) -> Issue {
    Issue::new(session.subject.clone(), session.session.clone(), file, problem)
}
