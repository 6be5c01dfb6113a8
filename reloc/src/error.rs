//! Error types for the reloc library.
//!
//! This module provides the error hierarchy for alias storage, prefix
//! resolution, path composition and navigation, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ResolveStatus;

/// Result type alias for operations that may fail with a reloc error.
///
/// # Examples
///
/// ```
/// use reloc::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/home/user/src")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the reloc library.
///
/// Variants fall into four categories: misuse (bad arguments), conflict
/// (alias already bound), not-found (alias, prefix or filesystem path
/// absent), and infrastructure failures (I/O, configuration). Ambiguous
/// prefixes are not errors; see [`ResolveStatus::MultipleMatches`].
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied missing or malformed arguments.
    #[error("misuse: {message}")]
    Misuse {
        /// Description of the misuse.
        message: String,
    },

    /// An alias name failed validation.
    #[error("invalid alias name '{name}': {reason}")]
    InvalidAliasName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An alias with this name is already bound and overwrite was not forced.
    #[error("alias '{name}' already defined as {}", existing.display())]
    AliasConflict {
        /// The alias name.
        name: String,
        /// The path the alias is currently bound to.
        existing: PathBuf,
    },

    /// No alias with this name exists.
    #[error("no alias named '{name}'")]
    AliasNotFound {
        /// The alias that was looked up.
        name: String,
    },

    /// No subdirectory of `base` matched `prefix` in any tier.
    #[error("no subdirectory of {} matches '{prefix}'", base.display())]
    NoMatch {
        /// The directory that was searched.
        base: PathBuf,
        /// The prefix that matched nothing.
        prefix: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A search pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a misuse error from any displayable message.
    pub fn misuse(message: impl Into<String>) -> Self {
        Self::Misuse {
            message: message.into(),
        }
    }

    /// Map an I/O error on `path` to a path-naming error.
    ///
    /// Missing paths become [`Error::PathNotFound`], permission failures
    /// become [`Error::PermissionDenied`]; everything else stays an I/O error.
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound { path: path.into() },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates something (alias, prefix, path) is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use reloc::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound { .. }
                | Self::PermissionDenied { .. }
                | Self::AliasNotFound { .. }
                | Self::NoMatch { .. }
        )
    }

    /// Check if error is a misuse of the API or command surface.
    #[must_use]
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::Misuse { .. }
                | Self::InvalidAliasName { .. }
                | Self::InvalidPath { .. }
                | Self::Pattern(_)
        )
    }

    /// Check if error is an alias conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AliasConflict { .. })
    }

    /// The resolver status this error corresponds to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use reloc::{Error, ResolveStatus};
    ///
    /// let err = Error::misuse("missing prefix");
    /// assert_eq!(err.resolve_status(), Some(ResolveStatus::Misused));
    /// ```
    #[must_use]
    pub fn resolve_status(&self) -> Option<ResolveStatus> {
        match self {
            Self::NoMatch { .. } => Some(ResolveStatus::NoMatches),
            Self::Misuse { .. } => Some(ResolveStatus::Misused),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_error_names_existing_path() {
        let err = Error::AliasConflict {
            name: "src".to_string(),
            existing: PathBuf::from("/home/user/src"),
        };
        let display = format!("{err}");
        assert!(display.contains("already defined"));
        assert!(display.contains("/home/user/src"));
        assert!(err.is_conflict());
    }

    #[test]
    fn test_no_match_error() {
        let err = Error::NoMatch {
            base: PathBuf::from("/base"),
            prefix: "zz".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("/base"));
        assert!(display.contains("'zz'"));
        assert!(err.is_not_found());
        assert_eq!(err.resolve_status(), Some(ResolveStatus::NoMatches));
    }

    #[test]
    fn test_invalid_alias_name_is_misuse() {
        let err = Error::InvalidAliasName {
            name: "a-b".to_string(),
            reason: "only letters and digits are allowed".to_string(),
        };
        assert!(err.is_misuse());
        assert!(format!("{err}").contains("a-b"));
        assert_eq!(err.resolve_status(), None);
    }

    #[test]
    fn test_from_io_maps_kinds() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            Error::from_io(missing, "/x"),
            Error::PathNotFound { .. }
        ));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            Error::from_io(denied, "/x"),
            Error::PermissionDenied { .. }
        ));

        let other = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(matches!(Error::from_io(other, "/x"), Error::Io(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
