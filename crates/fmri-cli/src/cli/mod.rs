use std::path::PathBuf;

use clap::{ArgGroup, Parser};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `fmri-check` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fmri-check",
    version,
    about = "Validate an fMRIPrep cohort directory",
    after_help = "Examples:\n  fmri-check /data/study_fmriprep -o issues.csv\n  fmri-check --multi /data --md report.md\n  fmri-check --demo"
)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["path", "demo", "schema"])
))]
pub struct Cli {
    /// Path to a cohort folder (omit if you use --demo)
    pub path: Option<PathBuf>,

    /// Run validation on the built-in sample data (ignores PATH)
    #[arg(long, conflicts_with = "multi")]
    pub demo: bool,

    /// Treat PATH as a parent folder and validate every child cohort in it
    #[arg(long, requires = "path")]
    pub multi: bool,

    /// Folder-name suffix marking cohorts in --multi mode
    #[arg(long, value_name = "SUFFIX", requires = "multi", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Save issues as a Markdown table
    #[arg(long, value_name = "REPORT.md")]
    pub md: Option<PathBuf>,

    /// Save issues as a CSV file
    #[arg(short, long, value_name = "REPORT.csv")]
    pub out: Option<PathBuf>,

    /// Console output format: table, json, raw
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Extra TOML config layered over the project config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    pub strict: bool,

    /// Print the JSON Schema of an issue record and exit
    #[arg(long)]
    pub schema: bool,

    /// Quiet mode (errors only in logs, no progress)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn path_with_csv_output() {
        let cli = Cli::try_parse_from(["fmri-check", "/data/cohort", "-o", "issues.csv"])
            .expect("cli should parse");

        assert_eq!(cli.path, Some(PathBuf::from("/data/cohort")));
        assert_eq!(cli.out, Some(PathBuf::from("issues.csv")));
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(!cli.demo);
    }

    #[test]
    fn demo_without_path() {
        let cli = Cli::try_parse_from(["fmri-check", "--demo", "--md", "report.md"])
            .expect("cli should parse");

        assert!(cli.demo);
        assert!(cli.path.is_none());
        assert_eq!(cli.md, Some(PathBuf::from("report.md")));
    }

    #[test]
    fn demo_alongside_path_is_accepted() {
        let cli = Cli::try_parse_from(["fmri-check", "--demo", "/ignored"]).expect("cli should parse");
        assert!(cli.demo);
    }

    #[test]
    fn path_or_demo_is_required() {
        assert!(Cli::try_parse_from(["fmri-check"]).is_err());
        assert!(Cli::try_parse_from(["fmri-check", "-o", "issues.csv"]).is_err());
    }

    #[test]
    fn schema_needs_no_path() {
        let cli = Cli::try_parse_from(["fmri-check", "--schema"]).expect("cli should parse");
        assert!(cli.schema);
    }

    #[test]
    fn multi_requires_path_and_rejects_demo() {
        assert!(Cli::try_parse_from(["fmri-check", "--multi", "--demo"]).is_err());
        let cli = Cli::try_parse_from(["fmri-check", "--multi", "/data", "--suffix", "-prep"])
            .expect("cli should parse");
        assert!(cli.multi);
        assert_eq!(cli.suffix.as_deref(), Some("-prep"));
    }

    #[test]
    fn strict_and_config_flags() {
        let cli = Cli::try_parse_from(["fmri-check", "/data", "--strict", "-c", "rules.toml"])
            .expect("cli should parse");
        assert!(cli.strict);
        assert_eq!(cli.config, Some(PathBuf::from("rules.toml")));
    }

    #[test]
    fn suffix_requires_multi() {
        assert!(Cli::try_parse_from(["fmri-check", "/data", "--suffix", "-prep"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["fmri-check", "/data", "--format", "xml"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["fmri-check", "/data", "-q", "-v"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["fmri-check", "/data", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.quiet);
        assert!(!flags.verbose);
    }
}
