use std::path::{Path, PathBuf};

use anyhow::Context;
use fmri_core::{Issue, ValidationReport};

use crate::cli::OutputFormat;
use crate::ui;

pub mod csv;
pub mod markdown;
pub mod table;

pub const SUCCESS_MARKER: &str = "✅ No issues found!";

/// Where a non-empty report ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    Markdown(PathBuf),
    Csv(PathBuf),
    Console(OutputFormat),
}

impl ReportTarget {
    /// `--md` beats `--out`; any file beats the console.
    #[must_use]
    pub fn choose(md: Option<&Path>, out: Option<&Path>, format: OutputFormat) -> Self {
        match (md, out) {
            (Some(path), _) => Self::Markdown(path.to_path_buf()),
            (None, Some(path)) => Self::Csv(path.to_path_buf()),
            (None, None) => Self::Console(format),
        }
    }
}

#[must_use]
pub fn columns(with_cohort: bool) -> Vec<&'static str> {
    let mut headers = vec!["subject", "session", "file", "problem"];
    if with_cohort {
        headers.push("cohort");
    }
    headers
}

#[must_use]
pub fn issue_rows(issues: &[Issue], with_cohort: bool) -> Vec<Vec<String>> {
    issues
        .iter()
        .map(|issue| {
            let mut row = vec![
                issue.subject.clone(),
                issue.session.clone(),
                issue.file.clone(),
                issue.problem.to_string(),
            ];
            if with_cohort {
                row.push(issue.cohort.clone().unwrap_or_default());
            }
            row
        })
        .collect()
}

/// Render issues for stdout in the requested format.
pub fn render_console(
    issues: &[Issue],
    format: OutputFormat,
    with_cohort: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(issues)?),
        OutputFormat::Raw => Ok(serde_json::to_string(issues)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(table::render_table(
                &columns(with_cohort),
                &issue_rows(issues, with_cohort),
                options,
            ))
        }
    }
}

/// Write the report file for `target`; console targets are a no-op.
pub fn write_report(
    target: &ReportTarget,
    issues: &[Issue],
    with_cohort: bool,
) -> anyhow::Result<()> {
    let headers = columns(with_cohort);
    let rows = issue_rows(issues, with_cohort);

    let (path, body) = match target {
        ReportTarget::Markdown(path) => (path, markdown::render_markdown(&headers, &rows)),
        ReportTarget::Csv(path) => (path, csv::render_csv(&headers, &rows)?),
        ReportTarget::Console(_) => return Ok(()),
    };

    std::fs::write(path, body)
        .with_context(|| format!("failed to write report to {}", path.display()))
}

#[must_use]
pub fn summary_line(report: &ValidationReport, multi: bool) -> String {
    if report.is_clean() {
        return SUCCESS_MARKER.to_string();
    }
    let count = report.issues.len();
    if multi {
        format!(
            "❌ Found {count} issues across {} cohorts.",
            report.cohorts_scanned
        )
    } else {
        format!("❌ Found {count} issues.")
    }
}
