//! Environment variable handling for configuration overrides.
//!
//! This module provides support for FILENOTE_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use std::env;

/// Overrides case sensitivity.
pub const CASE_SENSITIVE_ENV: &str = "FILENOTE_CASE_SENSITIVE";

/// Overrides the root list, separated like `PATH`.
pub const ROOTS_ENV: &str = "FILENOTE_ROOTS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use filenote::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unrecognized boolean or log mode).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(CASE_SENSITIVE_ENV) {
            config.case_sensitive = Some(Self::parse_bool(CASE_SENSITIVE_ENV, &val)?);
        }

        if let Some(val) = env::var_os(ROOTS_ENV) {
            let roots: Vec<String> = env::split_paths(&val)
                .filter(|root| !root.as_os_str().is_empty())
                .map(|root| root.to_string_lossy().into_owned())
                .collect();
            if roots.is_empty() {
                return Err(Error::Validation {
                    field: ROOTS_ENV.into(),
                    message: "Must list at least one root".into(),
                });
            }
            config.roots = Some(roots);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(mode);
        }

        Ok(())
    }

    /// Parse boolean from environment variable string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(CASE_SENSITIVE_ENV);
        env::remove_var(ROOTS_ENV);
        env::remove_var(LOG_MODE_ENV);
    }

    #[test]
    fn test_parse_bool() {
        assert!(EnvironmentConfig::parse_bool("X", "true").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "YES").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "1").unwrap());
        assert!(!EnvironmentConfig::parse_bool("X", "off").unwrap());
        assert!(!EnvironmentConfig::parse_bool("X", "No").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config() {
        clear_env();
        let mut config = Config {
            case_sensitive: Some(true),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.case_sensitive, Some(true));
        assert_eq!(config.roots, None);
    }

    #[test]
    #[serial]
    fn test_case_sensitive_override() {
        clear_env();
        env::set_var(CASE_SENSITIVE_ENV, "false");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.case_sensitive, Some(false));

        env::set_var(CASE_SENSITIVE_ENV, "sometimes");
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_roots_override() {
        clear_env();
        let joined = env::join_paths(["/srv", "/mnt/data"]).unwrap();
        env::set_var(ROOTS_ENV, &joined);

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(
            config.roots,
            Some(vec!["/srv".to_string(), "/mnt/data".to_string()])
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_roots_rejected() {
        clear_env();
        env::set_var(ROOTS_ENV, "");

        let mut config = Config::default();
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_log_mode_override() {
        clear_env();
        env::set_var(LOG_MODE_ENV, "verbose");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.log_mode, Some("verbose".to_string()));

        env::set_var(LOG_MODE_ENV, "shouting");
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        clear_env();
    }
}
