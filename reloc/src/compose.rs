//! Composing an alias and a list of prefixes into a path.
//!
//! The starting directory comes from the alias: `.` is the working
//! directory, `/` is the filesystem root, anything else is looked up in the
//! [`AliasStore`]. Each prefix then descends one level through the
//! [`PrefixResolver`], except a literal `..`, which is appended as-is
//! without touching the filesystem (also directly after `/`, giving `/..`).

use std::path::{Component, PathBuf};

use crate::error::Result;
use crate::path::{current_dir, CURRENT_DIR_TOKEN};
use crate::resolver::{PrefixResolver, ResolveStatus};
use crate::store::AliasStore;

/// Pseudo-alias for the filesystem root.
pub const ROOT_TOKEN: &str = "/";

/// Prefix appended verbatim instead of being resolved.
pub const PARENT_TOKEN: &str = "..";

/// A composed path plus the advisories raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    path: PathBuf,
    advisories: Vec<String>,
}

impl Composition {
    /// The composed directory.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Consumes the composition, returning the directory.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// One advisory per ambiguous prefix, in order.
    #[must_use]
    pub fn advisories(&self) -> &[String] {
        &self.advisories
    }

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

/// Builds paths from an alias and prefixes.
#[derive(Debug, Clone, Copy)]
pub struct PathComposer<'a> {
    store: &'a AliasStore,
    resolver: PrefixResolver,
}

impl<'a> PathComposer<'a> {
    /// Creates a composer over `store` using `resolver` for each prefix.
    #[must_use]
    pub fn new(store: &'a AliasStore, resolver: PrefixResolver) -> Self {
        Self { store, resolver }
    }

    /// The directory an alias starts from.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AliasNotFound`] for an unknown alias, or a
    /// path error if the working directory cannot be determined.
    pub fn start(&self, alias: &str) -> Result<PathBuf> {
        match alias {
            CURRENT_DIR_TOKEN => current_dir(),
            ROOT_TOKEN => Ok(PathBuf::from(Component::RootDir.as_os_str())),
            name => self.store.lookup(name),
        }
    }

    /// Composes `alias` with `prefixes`.
    ///
    /// Stops at the first prefix that fails to resolve and returns that
    /// error. Ambiguous prefixes continue with the first match and add an
    /// advisory.
    ///
    /// # Errors
    ///
    /// Returns the lookup error for an unknown alias, or the first
    /// resolution error.
    pub fn compose<S: AsRef<str>>(&self, alias: &str, prefixes: &[S]) -> Result<Composition> {
        let mut path = self.start(alias)?;
        let mut advisories = Vec::new();

        for prefix in prefixes {
            let prefix = prefix.as_ref();
            if prefix == PARENT_TOKEN {
                path.push(PARENT_TOKEN);
                continue;
            }

            let found = self.resolver.resolve(prefix, &path)?;
            if let Some(advisory) = found.advisory() {
                advisories.push(advisory);
            }
            path = found.path();
        }

        Ok(Composition { path, advisories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        root: PathBuf,
        store: AliasStore,
    }

    fn fixture(dirs: &[&str]) -> Fixture {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("tree");
        for d in dirs {
            fs::create_dir_all(root.join(d)).unwrap();
        }
        fs::create_dir_all(&root).unwrap();
        let store = AliasStore::new(dir.path().join("relocations"));
        store
            .upsert("proj", root.to_str().unwrap(), false)
            .unwrap();
        Fixture {
            _dir: dir,
            root,
            store,
        }
    }

    #[test]
    fn test_zero_prefixes_is_alias_dir() {
        let fx = fixture(&[]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose::<&str>("proj", &[]).unwrap();
        assert_eq!(composed.path(), fx.root.as_path());
        assert_eq!(composed.status(), ResolveStatus::ExactlyOneMatch);
    }

    #[test]
    fn test_root_alias_without_prefixes() {
        let fx = fixture(&[]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose::<&str>("/", &[]).unwrap();
        assert_eq!(composed.path().to_str(), Some("/"));
    }

    #[test]
    #[serial]
    fn test_current_dir_alias_without_prefixes() {
        let fx = fixture(&[]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose::<&str>(".", &[]).unwrap();
        assert_eq!(composed.path(), std::env::current_dir().unwrap().as_path());
    }

    #[test]
    fn test_prefixes_descend() {
        let fx = fixture(&["src/main", "docs"]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose("proj", &["sr", "ma"]).unwrap();
        assert_eq!(composed.path(), fx.root.join("src").join("main"));
    }

    #[test]
    fn test_parent_token_bypasses_resolver() {
        // "foo/.." only exists lexically; no directory named ".." is searched.
        let fx = fixture(&["foo", "bar"]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose("proj", &["foo", "..", "bar"]).unwrap();
        assert_eq!(
            composed.path(),
            fx.root.join("foo").join("..").join("bar")
        );
    }

    #[test]
    fn test_parent_token_after_root_is_not_clamped() {
        let fx = fixture(&[]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose("/", &[".."]).unwrap();
        assert_eq!(composed.path().to_str(), Some("/.."));
    }

    #[test]
    fn test_unknown_alias() {
        let fx = fixture(&[]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let err = composer.compose::<&str>("nope", &[]).unwrap_err();
        assert!(matches!(err, Error::AliasNotFound { .. }));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let fx = fixture(&["src"]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let err = composer.compose("proj", &["src", "zzz", "src"]).unwrap_err();
        match err {
            Error::NoMatch { base, prefix } => {
                assert_eq!(base, fx.root.join("src"));
                assert_eq!(prefix, "zzz");
            }
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_ambiguity_collects_advisories() {
        let fx = fixture(&["app1/lib", "app2"]);
        let composer = PathComposer::new(&fx.store, PrefixResolver::new(true));
        let composed = composer.compose("proj", &["app", "l"]).unwrap();
        assert_eq!(composed.path(), fx.root.join("app1").join("lib"));
        assert_eq!(composed.status(), ResolveStatus::MultipleMatches);
        assert_eq!(composed.advisories().len(), 1);
        assert!(composed.advisories()[0].contains("app2"));
    }
}
