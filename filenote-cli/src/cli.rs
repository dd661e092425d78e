//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, DescribeCommand, ResolveCommand, ShowConfigCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving path-like notations.
#[derive(Parser)]
#[command(name = "filenote")]
#[command(
    version,
    about = "Resolve path, URI, URL and text notations to filesystem paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Override filesystem case sensitivity for root matching
    #[arg(long, value_name = "BOOL", global = true)]
    pub case_sensitive: Option<bool>,

    /// Filesystem root to match text against (repeatable)
    #[arg(long = "root", value_name = "PATH", global = true)]
    pub roots: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve notations to filesystem paths
    Resolve(ResolveCommand),

    /// Show the supported notation formats
    Describe(DescribeCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
