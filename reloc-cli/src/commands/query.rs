//! Query command implementation.
//!
//! Resolves an alias and prefixes to a directory and prints it, optionally
//! recording the result in the pending navigation variables.

use crate::error::CliError;
use crate::utils::{open_relocator, report_advisories, GlobalOptions};
use clap::Args;
use reloc::{NavigationState, ShellScript, ShellType};

/// Print the directory an alias and prefixes lead to.
#[derive(Args)]
pub struct QueryCommand {
    /// Shift the pending variables (rp, r1, r2) to record the result
    ///
    /// Only meaningful together with --emit, whose script carries the
    /// exports back into the calling shell.
    #[arg(long, requires = "emit")]
    pub update_state: bool,

    /// Print a script for SHELL to evaluate instead of the bare path
    #[arg(long, value_enum, value_name = "SHELL")]
    pub emit: Option<ShellType>,

    /// Alias to start from ('.' is the working directory, '/' the root)
    #[arg(value_name = "ALIAS")]
    pub alias: Option<String>,

    /// One prefix per directory level ('..' goes up one level)
    #[arg(value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

impl QueryCommand {
    /// Execute the query command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let relocator = open_relocator(global)?;

        let before = NavigationState::from_env();
        let mut state = before.clone();
        let composed = relocator.query(
            self.alias.as_deref(),
            &self.prefixes,
            self.update_state.then_some(&mut state),
        )?;

        match self.emit {
            Some(shell) => print!(
                "{}",
                ShellScript::new(shell)
                    .state_changes(&state, &before)
                    .print(composed.path())
                    .render()
            ),
            None => println!("{}", composed.path().display()),
        }

        report_advisories(composed.advisories())
    }
}
