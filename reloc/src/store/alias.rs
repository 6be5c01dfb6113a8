//! Alias types and their on-disk record format.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A validated alias name: non-empty, ASCII letters and digits only.
///
/// # Examples
///
/// ```
/// use reloc::AliasName;
///
/// let name = AliasName::try_from("proj2").unwrap();
/// assert_eq!(name.as_str(), "proj2");
///
/// assert!(AliasName::try_from("").is_err());
/// assert!(AliasName::try_from("my-proj").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AliasName(String);

impl AliasName {
    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AliasName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::InvalidAliasName {
                name: String::new(),
                reason: "name must not be empty".into(),
            });
        }
        if let Some(bad) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidAliasName {
                name: value.to_string(),
                reason: format!("'{bad}' is not allowed; use letters and digits only"),
            });
        }
        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for AliasName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<AliasName> for String {
    fn from(name: AliasName) -> Self {
        name.0
    }
}

impl fmt::Display for AliasName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An alias bound to an absolute directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    name: AliasName,
    path: PathBuf,
}

impl Alias {
    /// Creates a new alias.
    #[must_use]
    pub fn new(name: AliasName, path: PathBuf) -> Self {
        Self { name, path }
    }

    /// The alias name.
    #[must_use]
    pub fn name(&self) -> &AliasName {
        &self.name
    }

    /// The directory the alias points at.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses one store record, `<name><space><path>`.
    ///
    /// The path is everything after the first space. Returns `None` for
    /// lines that do not form a valid record.
    ///
    /// # Examples
    ///
    /// ```
    /// use reloc::Alias;
    /// use std::path::Path;
    ///
    /// let alias = Alias::parse_record("docs /srv/My Docs").unwrap();
    /// assert_eq!(alias.name().as_str(), "docs");
    /// assert_eq!(alias.path(), Path::new("/srv/My Docs"));
    ///
    /// assert!(Alias::parse_record("nospace").is_none());
    /// ```
    #[must_use]
    pub fn parse_record(line: &str) -> Option<Self> {
        let (name, path) = line.split_once(' ')?;
        if path.is_empty() {
            return None;
        }
        let name = AliasName::try_from(name).ok()?;
        Some(Self::new(name, PathBuf::from(path)))
    }

    /// Renders this alias as a store record (without the trailing newline).
    #[must_use]
    pub fn to_record(&self) -> String {
        format!("{} {}", self.name, self.path.display())
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record())
    }
}
