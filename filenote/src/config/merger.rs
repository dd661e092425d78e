//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use filenote::config::{Config, ConfigMerger};
///
/// let low = Config { case_sensitive: Some(true), ..Default::default() };
/// let high = Config { case_sensitive: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.case_sensitive, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when set in `source`. Root lists are
    /// not accumulated: a higher-precedence list replaces a lower one.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }

        if source.roots.is_some() {
            target.roots.clone_from(&source.roots);
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}
