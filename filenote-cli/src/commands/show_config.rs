//! Command to display the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Show the effective configuration as YAML.
///
/// Only values that were set somewhere are printed; anything missing falls
/// back to the native platform.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CliError::Config(format!("Failed to serialize configuration: {e}")))?;
        print!("{yaml}");

        Ok(())
    }
}
