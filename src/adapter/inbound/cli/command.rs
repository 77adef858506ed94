//! Command-line interface definitions.
//!
//! Subcommands build the top-league report, look up a single market, manage
//! configuration, and compare the sequential and concurrent build modes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::ExecutionMode;

/// Top-league market report for a sportsbook betline
#[derive(Parser, Debug)]
#[command(name = "betline-report")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and print the report
    Report(ReportArgs),

    /// Print one market of one event
    Market(MarketArgs),

    /// Build the report in both modes and compare timings
    Compare(CompareArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `betline-report config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Sport to include (repeatable); overrides the configured list
    #[arg(short, long = "sport", value_name = "NAME")]
    pub sports: Vec<String>,

    /// Include every sport in the catalog
    #[arg(long, conflicts_with = "sports")]
    pub all: bool,

    /// Build mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Worker budget for concurrent mode
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Pre-match events per league
    #[arg(short, long)]
    pub events: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct MarketArgs {
    /// Event id
    #[arg(long)]
    pub event_id: u64,

    /// Market name (case-insensitive)
    #[arg(long)]
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Sport to include (repeatable); overrides the configured list
    #[arg(short, long = "sport", value_name = "NAME")]
    pub sports: Vec<String>,

    /// Include every sport in the catalog
    #[arg(long, conflicts_with = "sports")]
    pub all: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Bounded worker pool
    Concurrent,
    /// One fetch at a time, in order
    Sequential,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Concurrent => Self::Concurrent,
            ModeArg::Sequential => Self::Sequential,
        }
    }
}
