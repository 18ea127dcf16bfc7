//! CLI argument definitions for the rail map tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "railmap",
    version,
    about = "Rail map tool - create, validate, and export rail network maps",
    long_about = "Work with rail network map files outside the editor.\n\n\
                  Validates station/track structure and connectivity, and exports\n\
                  maps as JSON, station CSV, or TypeScript map modules."
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
    /// Write a fresh default map file.
    New(NewArgs),

    /// Validate a map file and print the full report.
    Validate(ValidateArgs),

    /// Summarize a map: entity counts, connectivity, derived attributes.
    Info(InfoArgs),

    /// Export a map as JSON, station CSV, or a TypeScript module.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct NewArgs {
    /// Path of the map file to create.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the map file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct InfoArgs {
    /// Path to the map file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the map file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ExportFormatArg,

    /// Output path (default: stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    /// Lossless JSON wire form.
    Json,
    /// Stations-only CSV projection.
    Csv,
    /// Generated TypeScript map module.
    Ts,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
