//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    DefineCommand, FindCommand, GoCommand, InitCommand, ListCommand, QueryCommand, RemoveCommand,
    StateCommand,
};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Jump between aliased directories by typing short prefixes.
#[derive(Parser)]
#[command(name = "reloc")]
#[command(
    version,
    about = "Jump between aliased directories by prefix",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output, including ambiguity warnings
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the alias store file
    #[arg(long, value_name = "PATH", global = true, env = "RELOC_STORE")]
    pub store: Option<PathBuf>,

    /// Read this configuration file instead of ~/.reloc/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the directory an alias and prefixes lead to
    Query(QueryCommand),

    /// Change to the directory an alias and prefixes lead to
    Go(GoCommand),

    /// Bind an alias to a directory
    Define(DefineCommand),

    /// List all aliases
    List(ListCommand),

    /// Find aliases whose "name path" line matches a pattern
    Find(FindCommand),

    /// Delete an alias
    Remove(RemoveCommand),

    /// Show the navigation variables (r, rr, rp, r1, r2)
    State(StateCommand),

    /// Print shell integration functions
    Init(InitCommand),
}

/// Rewrites `-?` to `--help`.
///
/// Arguments after a literal `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                arg
            } else if arg == "-?" {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}
