//! State command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use reloc::{NavigationState, ShellScript, ShellType};

/// Show the navigation variables.
#[derive(Args)]
pub struct StateCommand {
    /// Print export statements for SHELL instead of `name=path` lines
    #[arg(long, value_enum, value_name = "SHELL")]
    pub emit: Option<ShellType>,
}

impl StateCommand {
    /// Execute the state command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let state = NavigationState::from_env();

        match self.emit {
            Some(shell) => print!("{}", ShellScript::new(shell).state(&state).render()),
            None => {
                for (var, path) in state.exports() {
                    println!("{var}={}", path.display());
                }
            }
        }
        Ok(())
    }
}
