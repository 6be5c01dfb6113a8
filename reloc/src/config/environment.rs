//! Environment variable handling for configuration overrides.
//!
//! Supported variables:
//!
//! - `RELOC_STORE`: alias store file
//! - `RELOC_CASELESS`: enable the caseless resolver tier (boolean)

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply overrides from the process environment to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use reloc::config::{Config, EnvironmentConfig};
    ///
    /// let mut config = Config::default();
    /// EnvironmentConfig::apply_from(&mut config, |name| match name {
    ///     "RELOC_CASELESS" => Some("no".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert!(!config.caseless());
    /// ```
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(store) = read("RELOC_STORE") {
            config.store = Some(store);
        }

        if let Some(val) = read("RELOC_CASELESS") {
            config.caseless = Some(Self::parse_bool("RELOC_CASELESS", &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn apply(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        EnvironmentConfig::apply_from(&mut config, |name| vars.get(name).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_store_override() {
        let config = apply(&[("RELOC_STORE", "/tmp/marks")]).unwrap();
        assert_eq!(config.store.as_deref(), Some("/tmp/marks"));
    }

    #[test]
    fn test_bool_values() {
        for (raw, expected) in [("1", true), ("on", true), ("FALSE", false), ("no", false)] {
            let config = apply(&[("RELOC_CASELESS", raw)]).unwrap();
            assert_eq!(config.caseless, Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_invalid_bool() {
        let err = apply(&[("RELOC_CASELESS", "maybe")]).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_values_ignored() {
        let config = apply(&[("RELOC_STORE", ""), ("RELOC_CASELESS", "")]).unwrap();
        assert_eq!(config, Config::default());
    }
}
