//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{open_relocator, GlobalOptions};
use clap::Args;

/// Delete an alias.
#[derive(Args)]
pub struct RemoveCommand {
    /// Alias to delete
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let relocator = open_relocator(global)?;
        let removed = relocator.remove_alias(&self.name)?;
        log::info!("removed {removed}");
        Ok(())
    }
}
