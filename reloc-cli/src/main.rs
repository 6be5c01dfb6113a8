//! Main entry point for the reloc CLI.
//!
//! This is the command-line interface for the reloc directory bookmarks.
//! It provides commands for defining aliases and moving between them:
//! - `query`: Print the directory an alias and prefixes lead to
//! - `go`: Change to that directory
//! - `define`, `remove`, `list`, `find`: Manage aliases
//! - `state`, `init`: Shell integration

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{normalize_args, Cli};
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments, accepting -? as an alias for --help
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Initialize logging based on verbosity
    reloc::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        store: cli.store,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Query(cmd) => cmd.execute(&global),
        cli::Command::Go(cmd) => cmd.execute(&global),
        cli::Command::Define(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Find(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::State(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) if e.is_advisory() => std::process::exit(e.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
