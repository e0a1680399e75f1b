//! CLI argument definitions for the zone-data converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "zonec",
    version,
    about = "Zone-data converter - merge stellar model output into zone documents",
    long_about = "Convert fixed-format stellar model output into zone-data XML.\n\n\
                  Merges a per-zone structure file with pre-collapse and/or\n\
                  post-explosion composition files, keyed against an external\n\
                  nuclide reference table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one stellar model into zone-data documents.
    Model(ModelArgs),

    /// Print the declared structure-file column schema.
    Schema,
}

#[derive(Parser)]
pub struct ModelArgs {
    /// Path to the structure file (one row of properties per zone).
    #[arg(value_name = "STRUCTURE_FILE")]
    pub structure: PathBuf,

    /// Path to the nuclide reference listing (symbol, z, a per line).
    #[arg(long = "nuclides", value_name = "PATH")]
    pub nuclides: PathBuf,

    /// Pre-collapse composition file.
    #[arg(long = "pre", value_name = "PATH")]
    pub pre_composition: Option<PathBuf>,

    /// Post-explosion composition file.
    #[arg(long = "post", value_name = "PATH")]
    pub post_composition: Option<PathBuf>,

    /// Output directory (default: <STRUCTURE_FILE dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Embed the full nuclide reference table in each output document.
    #[arg(long = "embed-nuclides")]
    pub embed_nuclides: bool,

    /// Omit the creation timestamp for byte-reproducible output.
    #[arg(long = "no-timestamp")]
    pub no_timestamp: bool,
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
