//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and resolver construction.

use crate::error::CliError;
use filenote::{Config, ConfigBuilder, LogLevel, NotationResolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Override filesystem case sensitivity.
    pub case_sensitive: Option<bool>,

    /// Override filesystem roots.
    pub roots: Vec<String>,
}

impl GlobalOptions {
    /// Configuration values set directly on the command line.
    pub fn overrides(&self) -> Config {
        let log_mode = if self.verbose {
            Some(LogLevel::Verbose.to_string())
        } else if self.quiet {
            Some(LogLevel::Quiet.to_string())
        } else {
            None
        };

        Config {
            case_sensitive: self.case_sensitive,
            roots: (!self.roots.is_empty()).then(|| self.roots.clone()),
            log_mode,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Project and user configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(global.overrides());

    if let Some(ref path) = global.config {
        if !path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver from the effective configuration.
pub fn build_resolver(global: &GlobalOptions) -> Result<NotationResolver, CliError> {
    let config = load_configuration(global)?;
    Ok(NotationResolver::from_config(&config))
}
