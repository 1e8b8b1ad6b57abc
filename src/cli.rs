use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_SCRIPT_NAME;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "tree-guard")]
#[command(author, version, about = "Directory tree guard - validate a tree against a layout script")]
#[command(long_about = "Validates the files and directories under a root against the \
    assertions of a TOML layout script and reports missing and unexpected items.\n\n\
    Exit codes:\n  \
    0 - Tree matches the script\n  \
    1 - Warnings found\n  \
    2 - Script, usage or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the report on stdout and all logs below errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a directory tree against a layout script
    Check(CheckArgs),

    /// Write a starter layout script
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Root of the tree to validate (defaults to the script's `root`)
    pub root: Option<PathBuf>,

    /// Layout script (defaults to .tree-guard.toml in the current directory)
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Report format [possible values: csv, json, text]
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with 0 even when warnings are found
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the script
    #[arg(short, long, default_value = LOCAL_SCRIPT_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
