//! Configuration system for filenote.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `filenote.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (FILENOTE_*)
//! 3. An explicit configuration file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `filenote.yaml`)
//! 5. User config (`~/.filenote/config.yaml`)
//! 6. Built-in defaults (the native platform)
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use filenote::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use filenote::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     roots: Some(vec!["/".to_string(), "/Volumes/build".to_string()]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.roots.unwrap().len(), 2);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
