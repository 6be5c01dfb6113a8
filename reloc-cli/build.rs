//! Build script for reloc-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("reloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Jump between aliased directories by prefix")
        .long_about(
            "Bookmark directories under short aliases and reach them, and their \
             subdirectories, by typing unambiguous prefixes",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output, including ambiguity warnings")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Override the alias store file")
                .value_name("PATH")
                .global(true)
                .env("RELOC_STORE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read this configuration file instead of ~/.reloc/config.yaml")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("query")
                .about("Print the directory an alias and prefixes lead to")
                .long_about(
                    "Resolve ALIAS and one PREFIX per directory level to an absolute path",
                ),
            Command::new("go")
                .about("Change to the directory an alias and prefixes lead to")
                .long_about("Navigate to the resolved directory, or back to $rr with no arguments"),
            Command::new("define")
                .about("Bind an alias to a directory")
                .long_about("Create an alias, or replace an existing one with --force"),
            Command::new("list")
                .about("List all aliases")
                .long_about("Print every alias as 'name path', ordered by name ignoring case"),
            Command::new("find")
                .about("Find aliases whose \"name path\" line matches a pattern")
                .long_about("Search aliases by regular expression, or by substring with --fixed"),
            Command::new("remove")
                .about("Delete an alias")
                .long_about("Remove an alias from the store"),
            Command::new("state")
                .about("Show the navigation variables (r, rr, rp, r1, r2)")
                .long_about("Print the navigation variables, or export statements with --emit"),
            Command::new("init")
                .about("Print shell integration functions")
                .long_about("Print the rcd and rq shell functions for bash, zsh, fish or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main reloc.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("reloc.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
