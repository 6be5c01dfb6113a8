//! List command implementation.
//!
//! This module implements the `list` command, which displays all aliases
//! in case-insensitive name order, as plain `name path` lines, JSON or CSV.

use crate::error::CliError;
use crate::utils::{open_relocator, GlobalOptions};
use clap::{Args, ValueEnum};
use reloc::Alias;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 2] = ["name", "path"];

/// List all aliases.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "plain",
        env = "RELOC_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for alias listings.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `name path` per line, as stored
    Plain,
    /// JSON array of objects
    Json,
    /// CSV with a header row
    Csv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let relocator = open_relocator(global)?;
        let aliases: Vec<Alias> = relocator.list_aliases()?.collect();
        write_aliases(&aliases, self.format)
    }
}

/// Write `aliases` to stdout in `format`.
///
/// Shared with the `find` command.
pub fn write_aliases(aliases: &[Alias], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => format_as_plain(aliases),
        OutputFormat::Json => format_as_json(aliases),
        OutputFormat::Csv => format_as_csv(aliases),
    }
}

fn format_as_plain(aliases: &[Alias]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for alias in aliases {
        writeln!(handle, "{}", alias.to_record())?;
    }
    Ok(())
}

/// Format aliases as JSON.
fn format_as_json(aliases: &[Alias]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = aliases
        .iter()
        .map(|a| {
            serde_json::json!({
                "name": a.name().as_str(),
                "path": a.path().display().to_string(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format aliases as CSV.
fn format_as_csv(aliases: &[Alias]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for alias in aliases {
        writer
            .write_record([
                alias.name().as_str().to_string(),
                alias.path().display().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
