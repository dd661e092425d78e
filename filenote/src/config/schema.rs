//! Configuration schema definitions.
//!
//! This module defines the configuration structure for filenote: overrides
//! for the two platform collaborators and the log level.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Complete configuration structure.
///
/// Every field is optional; an unset field means "use the platform".
///
/// # Examples
///
/// ```
/// use filenote::config::Config;
///
/// let config: Config = serde_yaml::from_str("case_sensitive: false\nroots: [/, /Volumes]\n").unwrap();
/// assert_eq!(config.case_sensitive, Some(false));
/// assert_eq!(config.roots.as_ref().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Treat the filesystem as case-sensitive when matching roots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Filesystem roots to match text against, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roots: Option<Vec<String>>,

    /// Log level: `quiet`, `normal` or `verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<String>,
}

impl Config {
    /// The configured log level, or `Normal` when unset or unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use filenote::{Config, LogLevel};
    ///
    /// let config = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
    /// assert_eq!(config.log_level(), LogLevel::Quiet);
    /// assert_eq!(Config::default().log_level(), LogLevel::Normal);
    /// ```
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
            .unwrap_or(LogLevel::Normal)
    }
}
