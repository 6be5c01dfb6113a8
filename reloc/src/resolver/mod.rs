//! Subdirectory prefix resolution.
//!
//! Given a base directory and a partial name, [`PrefixResolver`] finds the
//! subdirectory the user meant. Candidates are the immediate entries of the
//! base that are directories, symlinks to directories included. Matching
//! runs through a fixed cascade of tiers and stops at the first tier that
//! matches anything:
//!
//! 1. **plain**: case-sensitive prefix
//! 2. **caseless**: case-insensitive prefix (only when enabled)
//! 3. **wildcard**: each `.` in the prefix matches any run of characters,
//!    anchored at the start of the name (only when the prefix has a `.`)
//! 4. **non-prefix-wildcard**: the same pattern anywhere in the name (only
//!    when the prefix does not start with `.`)
//!
//! Matches within the winning tier are sorted by name. More than one match
//! is not a failure: the first is used and the rest are reported as an
//! advisory.
//!
//! Entries starting with `.` are only candidates when the prefix starts with
//! `.` too, the way shell globs treat hidden files.
//!
//! # Examples
//!
//! ```no_run
//! use reloc::{PrefixResolver, ResolveStatus};
//! use std::path::Path;
//!
//! let resolver = PrefixResolver::new(true);
//! let found = resolver.resolve("sr", Path::new("/home/user/project")).unwrap();
//! if found.status() == ResolveStatus::MultipleMatches {
//!     eprintln!("{}", found.advisory().unwrap());
//! }
//! println!("{}", found.path().display());
//! ```

pub mod matcher;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::current_dir;

pub use matcher::{MatchTier, Matcher};

/// Outcome classification of a resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    /// Exactly one subdirectory matched.
    ExactlyOneMatch,
    /// Several matched; the first was chosen.
    MultipleMatches,
    /// Nothing matched in any tier.
    NoMatches,
    /// Arguments were missing or empty.
    Misused,
}

impl ResolveStatus {
    /// Whether the status counts as a successful resolution.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::ExactlyOneMatch | Self::MultipleMatches)
    }
}

impl fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactlyOneMatch => write!(f, "exactly one match"),
            Self::MultipleMatches => write!(f, "multiple matches"),
            Self::NoMatches => write!(f, "no matches"),
            Self::Misused => write!(f, "misused"),
        }
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    base: PathBuf,
    prefix: String,
    tier: MatchTier,
    chosen: String,
    alternatives: Vec<String>,
}

impl Resolution {
    /// The matched subdirectory name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.chosen
    }

    /// The matched subdirectory as a full path under the base.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.base.join(&self.chosen)
    }

    /// The tier that produced the match.
    #[must_use]
    pub fn tier(&self) -> MatchTier {
        self.tier
    }

    /// The other matches, sorted, when the prefix was ambiguous.
    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// [`ResolveStatus::ExactlyOneMatch`] or [`ResolveStatus::MultipleMatches`].
    #[must_use]
    pub fn status(&self) -> ResolveStatus {
        if self.alternatives.is_empty() {
            ResolveStatus::ExactlyOneMatch
        } else {
            ResolveStatus::MultipleMatches
        }
    }

    /// Human-readable note listing the alternatives, if any.
    #[must_use]
    pub fn advisory(&self) -> Option<String> {
        if self.alternatives.is_empty() {
            return None;
        }
        Some(format!(
            "'{}' is ambiguous in {} ({} match): using {}; also {}",
            self.prefix,
            self.base.display(),
            self.tier,
            self.chosen,
            self.alternatives.join(", ")
        ))
    }
}

/// Resolves subdirectory prefixes through the tier cascade.
#[derive(Debug, Clone, Copy)]
pub struct PrefixResolver {
    allow_caseless: bool,
}

impl Default for PrefixResolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PrefixResolver {
    /// Creates a resolver; `allow_caseless` enables the caseless tier.
    #[must_use]
    pub const fn new(allow_caseless: bool) -> Self {
        Self { allow_caseless }
    }

    /// Finds the subdirectory of `base` matching `prefix`.
    ///
    /// An empty `base` means the current working directory.
    ///
    /// # Errors
    ///
    /// * [`Error::Misuse`] when `prefix` is empty
    /// * [`Error::PathNotFound`] / [`Error::PermissionDenied`] when `base`
    ///   is missing, not a directory, or unreadable
    /// * [`Error::NoMatch`] when no tier matches
    pub fn resolve(&self, prefix: &str, base: &Path) -> Result<Resolution> {
        if prefix.is_empty() {
            return Err(Error::misuse("a subdirectory prefix is required"));
        }

        let base = if base.as_os_str().is_empty() {
            current_dir()?
        } else {
            base.to_path_buf()
        };

        let candidates = subdirectories(&base, prefix.starts_with('.'))?;

        for matcher in matcher::cascade(prefix, self.allow_caseless)? {
            let mut matches: Vec<&String> =
                candidates.iter().filter(|name| matcher.matches(name)).collect();
            if matches.is_empty() {
                continue;
            }
            matches.sort();

            let chosen = matches[0].clone();
            let alternatives = matches[1..].iter().map(|s| (*s).clone()).collect();
            log::debug!(
                "'{prefix}' in {} resolved to {chosen} ({} tier)",
                base.display(),
                matcher.tier()
            );
            return Ok(Resolution {
                base,
                prefix: prefix.to_string(),
                tier: matcher.tier(),
                chosen,
                alternatives,
            });
        }

        Err(Error::NoMatch {
            base,
            prefix: prefix.to_string(),
        })
    }
}

/// Names of the immediate subdirectories of `base`, unsorted.
fn subdirectories(base: &Path, include_hidden: bool) -> Result<Vec<String>> {
    if !base.is_dir() {
        return Err(Error::PathNotFound {
            path: base.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(base).map_err(|e| Error::from_io(e, base))? {
        let entry = entry.map_err(|e| Error::from_io(e, base))?;
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("skipping non-UTF-8 entry in {}", base.display());
            continue;
        };
        if !include_hidden && name.starts_with('.') {
            continue;
        }
        // Path::is_dir follows symlinks.
        if entry.path().is_dir() {
            names.push(name);
        }
    }
    Ok(names)
}
