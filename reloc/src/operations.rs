//! Entry points used by the command layer.
//!
//! [`Relocator`] ties together the alias store, the prefix resolver and
//! the path composer, and applies navigation state transitions after
//! successful operations. Every entry point fails independently: an error
//! leaves the store and the navigation state as they were.

use std::env;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::compose::{Composition, PathComposer};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::navigation::{NavigationState, Slot};
use crate::path::CURRENT_DIR_TOKEN;
use crate::resolver::{PrefixResolver, ResolveStatus};
use crate::store::{Alias, AliasStore};

/// Result of a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// The working directory after the move.
    pub path: PathBuf,
    /// Whether the working directory actually changed.
    pub moved: bool,
    /// Advisories from ambiguous prefixes.
    pub advisories: Vec<String>,
}

impl Navigation {
    /// [`ResolveStatus::MultipleMatches`] if any prefix was ambiguous.
    #[must_use]
    pub fn status(&self) -> ResolveStatus {
        if self.advisories.is_empty() {
            ResolveStatus::ExactlyOneMatch
        } else {
            ResolveStatus::MultipleMatches
        }
    }
}

/// How `find_aliases` matches `name path` lines.
#[derive(Debug, Clone)]
pub enum AliasPattern {
    /// Regular expression, unanchored.
    Regex(Regex),
    /// Literal substring.
    Fixed(String),
}

impl AliasPattern {
    /// Compiles a regular expression pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the expression is invalid.
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(Self::Regex(Regex::new(pattern)?))
    }

    /// A literal substring pattern.
    #[must_use]
    pub fn fixed(pattern: &str) -> Self {
        Self::Fixed(pattern.to_string())
    }

    /// Whether `line` matches.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(line),
            Self::Fixed(needle) => line.contains(needle.as_str()),
        }
    }
}

/// The operations behind each command.
///
/// # Examples
///
/// ```no_run
/// use reloc::{AliasStore, NavigationState, PrefixResolver, Relocator};
///
/// let relocator = Relocator::new(
///     AliasStore::new("/home/user/.relocations"),
///     PrefixResolver::new(true),
/// );
/// relocator.define_alias("src", "/home/user/src", false).unwrap();
///
/// let mut state = NavigationState::from_env();
/// let found = relocator
///     .query(Some("src"), &["pro"], Some(&mut state))
///     .unwrap();
/// println!("{}", found.path().display());
/// ```
#[derive(Debug, Clone)]
pub struct Relocator {
    store: AliasStore,
    resolver: PrefixResolver,
}

impl Relocator {
    /// Creates a relocator.
    #[must_use]
    pub fn new(store: AliasStore, resolver: PrefixResolver) -> Self {
        Self { store, resolver }
    }

    /// Creates a relocator from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the store path cannot be resolved.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            AliasStore::new(config.store_path()?),
            PrefixResolver::new(config.caseless()),
        ))
    }

    /// The underlying alias store.
    #[must_use]
    pub fn store(&self) -> &AliasStore {
        &self.store
    }

    /// A composer over this relocator's store and resolver.
    #[must_use]
    pub fn composer(&self) -> PathComposer<'_> {
        PathComposer::new(&self.store, self.resolver)
    }

    /// Resolves `alias` (default `.`) and `prefixes` to a path.
    ///
    /// When `state` is given and at least one prefix was supplied, the
    /// pending chain is shifted to record the result.
    ///
    /// # Errors
    ///
    /// Propagates alias lookup and prefix resolution failures.
    pub fn query<S: AsRef<str>>(
        &self,
        alias: Option<&str>,
        prefixes: &[S],
        state: Option<&mut NavigationState>,
    ) -> Result<Composition> {
        let composed = self
            .composer()
            .compose(alias.unwrap_or(CURRENT_DIR_TOKEN), prefixes)?;

        if let Some(state) = state {
            if !prefixes.is_empty() {
                state.apply_query_update(composed.path());
            }
        }
        Ok(composed)
    }

    /// Resolves a target and changes the working directory to it.
    ///
    /// With no alias and no prefixes the target is the previous location
    /// (`rr`). On success `current`/`previous` are updated if the directory
    /// actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misuse`] when no target is given and no previous
    /// location is recorded, plus any resolution or directory change error.
    pub fn navigate<S: AsRef<str>>(
        &self,
        alias: Option<&str>,
        prefixes: &[S],
        state: &mut NavigationState,
    ) -> Result<Navigation> {
        let (target, advisories) = if alias.is_none() && prefixes.is_empty() {
            let previous = state.get(Slot::Previous).ok_or_else(|| {
                Error::misuse(format!(
                    "no previous location recorded (${} is unset)",
                    Slot::Previous.var_name()
                ))
            })?;
            (previous.to_path_buf(), Vec::new())
        } else {
            let composed = self.query(alias, prefixes, None)?;
            let advisories = composed.advisories().to_vec();
            (composed.into_path(), advisories)
        };

        let (path, moved) = change_directory(state, &target)?;
        Ok(Navigation {
            path,
            moved,
            advisories,
        })
    }

    /// Binds `name` to `path`; see [`AliasStore::upsert`].
    ///
    /// # Errors
    ///
    /// Returns validation, conflict or I/O errors from the store.
    pub fn define_alias(&self, name: &str, path: &str, force: bool) -> Result<Alias> {
        let alias = self.store.upsert(name, path, force)?;
        log::info!("{} -> {}", alias.name(), alias.path().display());
        Ok(alias)
    }

    /// Deletes the alias named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AliasNotFound`] or an I/O error.
    pub fn remove_alias(&self, name: &str) -> Result<Alias> {
        self.store.remove(name)
    }

    /// Every alias in case-insensitive name order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_aliases(&self) -> Result<impl Iterator<Item = Alias>> {
        self.store.list_all()
    }

    /// Aliases whose `name path` line matches `pattern`, in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn find_aliases(&self, pattern: &AliasPattern) -> Result<Vec<Alias>> {
        Ok(self
            .store
            .list_all()?
            .filter(|alias| pattern.is_match(&alias.to_record()))
            .collect())
    }
}

/// Changes the process working directory to `target` and records the move.
///
/// Returns the new working directory (as reported by the OS) and whether it
/// differs from the old one. If the old directory can no longer be
/// determined, the recorded `current` slot stands in for it.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if `target` is not a directory, or
/// [`Error::PermissionDenied`] if it cannot be entered.
pub fn change_directory(state: &mut NavigationState, target: &Path) -> Result<(PathBuf, bool)> {
    if !target.is_dir() {
        return Err(Error::PathNotFound {
            path: target.to_path_buf(),
        });
    }

    let old = env::current_dir()
        .ok()
        .or_else(|| state.get(Slot::Current).map(Path::to_path_buf));

    env::set_current_dir(target).map_err(|e| Error::from_io(e, target))?;
    let new = env::current_dir().map_err(|e| Error::from_io(e, target))?;

    let moved = match old {
        Some(old) => state.apply_navigate_update(old, new.clone()),
        None => {
            state.set(Slot::Current, Some(new.clone()));
            true
        }
    };
    log::debug!("now in {}", new.display());
    Ok((new, moved))
}
