//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve notations to filesystem paths
//! - `describe`: Show the supported notation formats
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod describe;
pub mod resolve;
pub mod show_config;

pub use completions::CompletionsCommand;
pub use describe::DescribeCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
