use clap::ValueEnum;

/// Console rendering used when no report file is requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Raw,
}

/// Flags that shape output and logging rather than what gets validated.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
