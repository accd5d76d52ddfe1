use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

mod check;
mod cli;
mod config_warnings;
mod demo;
mod output;
mod progress;
mod sources;
mod ui;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("fmri-check error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    // `.env` may carry FMRI_CHECK_LOG, so it must land before the subscriber.
    fmri_config::load_dotenv();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if cli.schema {
        check::print_schema()?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = fmri_config::FmriConfig::load(cli.config.as_deref())
        .context("failed to load fmri-check configuration")?;
    config_warnings::warn_mistyped_env();

    let report = check::handle(&cli, &config, &flags)?;
    Ok(check::exit_status(&report, cli.strict))
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FMRI_CHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
