//! Init command implementation.
//!
//! Prints the shell functions that make `go` and `query --update-state`
//! affect the calling shell. Typical use:
//!
//! ```text
//! eval "$(reloc init bash)"
//! ```

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use reloc::output::integration;
use reloc::ShellType;

/// Print shell integration functions.
#[derive(Args)]
pub struct InitCommand {
    /// Shell to generate functions for (detected when omitted)
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Option<ShellType>,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let shell = self.shell.unwrap_or_else(ShellType::detect);
        log::debug!("generating integration for {shell}");
        print!("{}", integration(shell));
        Ok(())
    }
}
