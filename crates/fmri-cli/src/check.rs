use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, bail};
use fmri_config::FmriConfig;
use fmri_core::{CohortValidator, Issue, ValidationReport, discover_cohorts};

use crate::cli::{Cli, GlobalFlags, OutputFormat};
use crate::demo::DemoCohort;
use crate::output::{self, ReportTarget};
use crate::progress::Progress;
use crate::sources::{self, CohortSource};

/// Validate the requested cohort(s), then print or save the report.
pub fn handle(
    cli: &Cli,
    config: &FmriConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ValidationReport> {
    let source = sources::resolve(cli, config)?;
    let validator = CohortValidator::new(config.layout(), config.rule_set());

    let progress = Progress::spinner("Validating cohort...");
    let report = match scan(&source, &validator) {
        Ok(report) => {
            progress.finish_clear();
            report
        }
        Err(error) => {
            progress.finish_err("validation failed");
            return Err(error);
        }
    };

    let target = ReportTarget::choose(cli.md.as_deref(), cli.out.as_deref(), flags.format);
    emit(&report, &target, &mut io::stdout(), &mut io::stderr())?;
    Ok(report)
}

fn scan(source: &CohortSource, validator: &CohortValidator) -> anyhow::Result<ValidationReport> {
    match source {
        CohortSource::Single(root) => {
            let issues = validator
                .validate(root)
                .with_context(|| format!("failed to validate {}", root.display()))?;
            Ok(ValidationReport::single(issues))
        }
        CohortSource::Demo => {
            let demo = DemoCohort::materialize()?;
            let issues = validator
                .validate(demo.root())
                .context("failed to validate sample data")?;
            Ok(ValidationReport::single(issues))
        }
        CohortSource::Parent { path, suffix } => {
            let cohorts = discover_cohorts(path, suffix)
                .with_context(|| format!("failed to scan {} for cohorts", path.display()))?;
            if cohorts.is_empty() {
                bail!(
                    "no cohorts ending in '{suffix}' found under {}",
                    path.display()
                );
            }
            Ok(validator.validate_all(&cohorts)?)
        }
    }
}

/// Print the summary and the report.
///
/// JSON console formats keep stdout pure JSON, so their summary goes to `err`.
fn emit(
    report: &ValidationReport,
    target: &ReportTarget,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    let multi = report.has_cohorts();
    let summary = output::summary_line(report, multi);

    if let ReportTarget::Console(format @ (OutputFormat::Json | OutputFormat::Raw)) = target {
        writeln!(out, "{}", output::render_console(&report.issues, *format, multi)?)?;
        writeln!(err, "{summary}")?;
        return Ok(());
    }

    writeln!(out, "{summary}")?;
    if report.is_clean() {
        return Ok(());
    }

    match target {
        ReportTarget::Markdown(path) => {
            output::write_report(target, &report.issues, multi)?;
            writeln!(out, "Markdown report saved to: {}", path.display())?;
        }
        ReportTarget::Csv(path) => {
            output::write_report(target, &report.issues, multi)?;
            writeln!(out, "CSV report saved to: {}", path.display())?;
        }
        ReportTarget::Console(format) => {
            writeln!(out, "{}", output::render_console(&report.issues, *format, multi)?)?;
        }
    }
    Ok(())
}

/// Process exit status: failure only for `--strict` runs that found issues.
#[must_use]
pub fn exit_status(report: &ValidationReport, strict: bool) -> ExitCode {
    if strict && !report.is_clean() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print the JSON Schema describing one issue record.
pub fn print_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Issue);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
