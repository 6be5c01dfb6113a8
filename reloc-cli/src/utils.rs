//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, opening the alias store, and reporting
//! advisories.

use crate::error::CliError;
use reloc::{Config, ConfigBuilder, Relocator};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the alias store file.
    pub store: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file (`--config`, or `~/.reloc/config.yaml`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    if let Some(ref store) = global.store {
        let store = store.to_str().ok_or_else(|| {
            CliError::InvalidArguments(format!(
                "store path is not valid UTF-8: {}",
                store.display()
            ))
        })?;
        builder = builder.with_config(Config {
            store: Some(store.to_string()),
            caseless: None,
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a [`Relocator`] from the merged configuration.
pub fn open_relocator(global: &GlobalOptions) -> Result<Relocator, CliError> {
    let config = load_configuration(global)?;
    let relocator = Relocator::from_config(&config).map_err(CliError::from)?;
    log::debug!("using alias store {}", relocator.store().path().display());
    Ok(relocator)
}

/// Log each advisory as a warning.
///
/// Returns [`CliError::Advisory`] when there was at least one, so the
/// command exits with the advisory code after its output is written.
pub fn report_advisories(advisories: &[String]) -> Result<(), CliError> {
    if advisories.is_empty() {
        return Ok(());
    }
    for advisory in advisories {
        log::warn!("{advisory}");
    }
    Err(CliError::Advisory(advisories.len()))
}
