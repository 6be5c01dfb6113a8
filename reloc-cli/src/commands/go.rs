//! Go command implementation.
//!
//! Changes to the directory an alias and prefixes lead to. A process cannot
//! change its parent shell's directory, so with `--emit` the command prints
//! a script that the `rcd` shell function (see `reloc init`) evaluates.

use crate::error::CliError;
use crate::utils::{open_relocator, report_advisories, GlobalOptions};
use clap::Args;
use reloc::{NavigationState, ShellScript, ShellType};

/// Change to the directory an alias and prefixes lead to.
#[derive(Args)]
pub struct GoCommand {
    /// Print a script for SHELL to evaluate instead of the bare path
    #[arg(long, value_enum, value_name = "SHELL")]
    pub emit: Option<ShellType>,

    /// Alias to start from; with no arguments, go back to $rr
    #[arg(value_name = "ALIAS")]
    pub alias: Option<String>,

    /// One prefix per directory level ('..' goes up one level)
    #[arg(value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

impl GoCommand {
    /// Execute the go command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let relocator = open_relocator(global)?;

        let before = NavigationState::from_env();
        let mut state = before.clone();
        let nav = relocator.navigate(self.alias.as_deref(), &self.prefixes, &mut state)?;

        match self.emit {
            Some(shell) => {
                let mut script = ShellScript::new(shell);
                if nav.moved {
                    script = script.cd(&nav.path);
                }
                print!(
                    "{}",
                    script
                        .state_changes(&state, &before)
                        .print(&nav.path)
                        .render()
                );
            }
            None => println!("{}", nav.path.display()),
        }

        report_advisories(&nav.advisories)
    }
}
