//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use reloc::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// The command succeeded but resolved at least one ambiguous prefix.
    ///
    /// The advisories have already been logged as warnings.
    Advisory(usize),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Success with an ambiguous prefix
    /// - 2: Misuse, unknown alias, unmatched prefix or filesystem failure
    /// - 3: Alias already bound
    /// - 4: Configuration error
    /// - 5: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Advisory(_) => 1,
            CliError::InvalidArguments(_) => 2,
            CliError::Library(lib_err) => match lib_err {
                LibError::AliasConflict { .. } => 3,
                LibError::Configuration(_) | LibError::Validation { .. } => 4,
                LibError::Io(_) => 5,
                _ => 2,
            },
            CliError::Config(_) => 4,
            CliError::Io(_) => 5,
        }
    }

    /// Whether `main` should stay silent about this outcome.
    pub fn is_advisory(&self) -> bool {
        matches!(self, CliError::Advisory(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Advisory(count) => {
                write!(f, "{count} ambiguous prefix(es) resolved to the first match")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let conflict = CliError::from(LibError::AliasConflict {
            name: "a".into(),
            existing: PathBuf::from("/a"),
        });
        assert_eq!(conflict.exit_code(), 3);

        let missing = CliError::from(LibError::AliasNotFound { name: "a".into() });
        assert_eq!(missing.exit_code(), 2);

        let no_match = CliError::from(LibError::NoMatch {
            base: PathBuf::from("/"),
            prefix: "zz".into(),
        });
        assert_eq!(no_match.exit_code(), 2);

        let io = CliError::from(LibError::Io(std::io::Error::other("disk full")));
        assert_eq!(io.exit_code(), 5);

        assert_eq!(CliError::Advisory(1).exit_code(), 1);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 4);
    }

    #[test]
    fn test_invalid_pattern_is_misuse() {
        let err = reloc::AliasPattern::regex("(").unwrap_err();
        assert_eq!(CliError::from(err).exit_code(), 2);
    }
}
