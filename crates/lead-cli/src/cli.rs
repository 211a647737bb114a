//! CLI argument definitions for the lead seeder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lead-seeder",
    version,
    about = "Lead Seeder - Convert a lead CSV export into JSON seed data",
    long_about = "Convert a tabular lead/contact export (CSV) into the normalized\n\
                  JSON seed file consumed by the downstream application.\n\n\
                  Field coercion is best-effort: missing or malformed cells degrade\n\
                  to documented defaults. Missing input or an unwritable output path\n\
                  aborts the run."
)]
pub struct Cli {
    /// Path to the lead export CSV.
    #[arg(value_name = "INPUT", default_value = "initial_data.csv")]
    pub input: PathBuf,

    /// Output path for the JSON seed file (overwritten if present).
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "src/data/initial_data.json"
    )]
    pub output: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
