//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::normalize::expand_tilde;
use crate::store::DEFAULT_STORE_FILE;

/// Complete configuration structure.
///
/// Every field is optional so that layers (file, environment, flags) can be
/// merged; unset fields fall back to built-in defaults through the accessor
/// methods.
///
/// # Examples
///
/// ```
/// use reloc::Config;
///
/// let config: Config = serde_yaml::from_str("store: /tmp/relocations\ncaseless: false\n").unwrap();
/// assert_eq!(config.store.as_deref(), Some("/tmp/relocations"));
/// assert!(!config.caseless());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Alias store file. `~` is expanded.
    pub store: Option<String>,

    /// Enable the case-insensitive resolver tier.
    pub caseless: Option<bool>,
}

impl Config {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            store: other.store.or(self.store),
            caseless: other.caseless.or(self.caseless),
        }
    }

    /// Whether the caseless tier is enabled (default: true).
    #[must_use]
    pub fn caseless(&self) -> bool {
        self.caseless.unwrap_or(true)
    }

    /// The alias store file (default: `~/.relocations`).
    ///
    /// # Errors
    ///
    /// Returns an error if `~` cannot be expanded.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store {
            Some(store) => expand_tilde(store),
            None => expand_tilde(&format!("~/{DEFAULT_STORE_FILE}")),
        }
    }
}
