//! Configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from files, environment and overrides.
///
/// # Examples
///
/// ```
/// use filenote::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { case_sensitive: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.case_sensitive, Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory and the
    /// environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load an explicit configuration file above any discovered ones.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read FILENOTE_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build and validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_file.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config)?;
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_validated() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                roots: Some(Vec::new()),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("filenote.yaml"),
            "case_sensitive: true\nroots: [/project]\n",
        )
        .unwrap();
        let explicit = temp_dir.path().join("override.yaml");
        fs::write(&explicit, "case_sensitive: false\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_file(&explicit)
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.case_sensitive, Some(false));
        assert_eq!(config.roots, Some(vec!["/project".to_string()]));
    }

    #[test]
    fn test_invalid_file_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("filenote.yaml"), "roots: [relative]\n").unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
