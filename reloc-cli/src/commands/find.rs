//! Find command implementation.

use crate::commands::list::{write_aliases, OutputFormat};
use crate::error::CliError;
use crate::utils::{open_relocator, GlobalOptions};
use clap::Args;
use reloc::AliasPattern;

/// Find aliases whose `name path` line matches a pattern.
#[derive(Args)]
pub struct FindCommand {
    /// Treat PATTERN as a literal substring instead of a regular expression
    #[arg(short = 'F', long)]
    pub fixed: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,

    /// Regular expression (or substring with --fixed)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

impl FindCommand {
    /// Execute the find command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let pattern = if self.fixed {
            AliasPattern::fixed(&self.pattern)
        } else {
            AliasPattern::regex(&self.pattern)?
        };

        let relocator = open_relocator(global)?;
        let found = relocator.find_aliases(&pattern)?;
        log::debug!("{} alias(es) match '{}'", found.len(), self.pattern);
        write_aliases(&found, self.format)
    }
}
