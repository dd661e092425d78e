//! Main entry point for the filenote CLI.
//!
//! This is the command-line interface for the filenote notation resolver.
//! It provides commands for:
//! - `resolve`: Resolve notations to filesystem paths
//! - `describe`: Show the supported notation formats
//! - `show-config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = filenote::init_logger(cli.verbose, cli.quiet);
    logger.debug(&format!("Log level: {}", logger.level()));

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        case_sensitive: cli.case_sensitive,
        roots: cli.roots,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Describe(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
