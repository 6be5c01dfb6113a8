//! Define command implementation.

use crate::error::CliError;
use crate::utils::{open_relocator, GlobalOptions};
use clap::Args;

/// Bind an alias to a directory.
#[derive(Args)]
pub struct DefineCommand {
    /// Replace an existing binding
    #[arg(short, long)]
    pub force: bool,

    /// Alias name (letters and digits)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory to bind; '.' is the working directory, '~' is expanded
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl DefineCommand {
    /// Execute the define command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let relocator = open_relocator(global)?;
        relocator.define_alias(&self.name, &self.path, self.force)?;
        Ok(())
    }
}
