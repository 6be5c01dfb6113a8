//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for testing the reloc library
//! against real directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use reloc::{AliasStore, PrefixResolver, Relocator};
use tempfile::TempDir;

/// A temporary directory holding a `tree/` of subdirectories and a store
/// file next to it.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let fx = TreeFixture::new(&["src/main", "docs"]);
/// fx.relocator().define_alias("t", fx.root().to_str().unwrap(), false).unwrap();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates the tree with the given relative directories.
    pub fn new(dirs: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join("tree");
        fs::create_dir_all(&root).expect("Failed to create tree root");
        for d in dirs {
            fs::create_dir_all(root.join(d)).expect("Failed to create subdirectory");
        }
        // Canonical so comparisons with getcwd hold on symlinked temp dirs.
        let root = root.canonicalize().expect("Failed to canonicalize root");
        Self { dir, root }
    }

    /// Root of the directory tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the store file (may not exist yet).
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("relocations")
    }

    /// A fresh store handle on the fixture's store file.
    pub fn store(&self) -> AliasStore {
        AliasStore::new(self.store_path())
    }

    /// A relocator with the caseless tier enabled.
    pub fn relocator(&self) -> Relocator {
        Relocator::new(self.store(), PrefixResolver::new(true))
    }

    /// A relocator bound to `t` -> tree root.
    pub fn bound_relocator(&self) -> Relocator {
        let relocator = self.relocator();
        relocator
            .define_alias("t", self.root.to_str().expect("non-UTF-8 temp path"), false)
            .expect("Failed to define fixture alias");
        relocator
    }
}
