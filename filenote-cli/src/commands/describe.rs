//! Command to show the supported notation formats.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use filenote::NotationResolver;

/// Show the supported notation formats.
#[derive(Args)]
pub struct DescribeCommand {}

impl DescribeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut formats = Vec::new();
        NotationResolver::new().describe(&mut formats);

        for format in formats {
            println!("{format}");
        }

        Ok(())
    }
}
