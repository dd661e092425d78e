//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use filenote::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for an empty or non-absolute root, an empty
    /// root list, or an unrecognized log mode.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref roots) = config.roots {
            Self::validate_roots(roots)?;
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }

    /// Check that the root list is usable for prefix matching.
    ///
    /// An empty root would match every string, so it is rejected. Roots must
    /// be absolute on this platform, or start with `/`.
    fn validate_roots(roots: &[String]) -> Result<()> {
        if roots.is_empty() {
            return Err(Error::Validation {
                field: "roots".into(),
                message: "At least one root is required when roots are configured".into(),
            });
        }

        for root in roots {
            if root.trim().is_empty() {
                return Err(Error::Validation {
                    field: "roots".into(),
                    message: "Roots must not be empty".into(),
                });
            }
            if !(root.starts_with('/') || Path::new(root).is_absolute()) {
                return Err(Error::Validation {
                    field: "roots".into(),
                    message: format!("Root '{root}' is not an absolute path"),
                });
            }
        }

        Ok(())
    }
}
