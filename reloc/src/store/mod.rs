//! The alias store: a flat file of `<name> <path>` records.
//!
//! The file is the only source of truth. Reads never lock. Every mutation
//! loads the whole store, edits it in memory, writes a temporary file next
//! to the original and atomically renames it into place, so readers never
//! observe a half-written store.
//!
//! Two processes mutating the store at the same time can still lose an
//! update: the later rename wins. This is accepted.
//!
//! # Examples
//!
//! ```no_run
//! use reloc::AliasStore;
//!
//! let store = AliasStore::new("/home/user/.relocations");
//! store.upsert("src", "/home/user/src", false).unwrap();
//! assert_eq!(
//!     store.lookup("src").unwrap(),
//!     std::path::PathBuf::from("/home/user/src")
//! );
//! ```

mod alias;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::path::{current_dir, normalize_target};

pub use alias::{Alias, AliasName};

/// Default store file name, relative to the home directory.
pub const DEFAULT_STORE_FILE: &str = ".relocations";

/// Persistent mapping from alias name to directory.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file does not need to exist; a missing file is an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record, in file order.
    ///
    /// Blank lines are ignored. Malformed lines, including lines that are
    /// not valid UTF-8, are skipped with a warning; they are not written
    /// back by the next [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&self) -> Result<Vec<Alias>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::from_io(e, &self.path)),
        };

        let mut aliases = Vec::new();
        for (index, raw) in content.split(|byte| *byte == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let record = std::str::from_utf8(raw).ok();
            if record.is_some_and(|line| line.trim().is_empty()) {
                continue;
            }
            match record.and_then(Alias::parse_record) {
                Some(alias) => aliases.push(alias),
                None => log::warn!(
                    "{}:{}: skipping malformed record '{}'",
                    self.path.display(),
                    index + 1,
                    String::from_utf8_lossy(raw)
                ),
            }
        }
        Ok(aliases)
    }

    /// Replaces the whole store with `aliases`.
    ///
    /// Writes to a temporary file in the same directory, then renames it
    /// over the store file. The parent directory is created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written or
    /// renamed.
    pub fn save(&self, aliases: &[Alias]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| Error::from_io(e, &parent))?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| Error::from_io(e, &parent))?;
        for alias in aliases {
            writeln!(temp, "{}", alias.to_record())?;
        }
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|e| Error::from_io(e.error, &self.path))?;

        log::debug!(
            "wrote {} alias(es) to {}",
            aliases.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Looks up an alias without reporting anything when it is absent.
    ///
    /// Returns the first record with exactly this name.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store cannot be read.
    pub fn find(&self, name: &str) -> Result<Option<Alias>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|alias| alias.name().as_str() == name))
    }

    /// Returns the directory bound to `name`.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AliasNotFound`] if no such alias exists.
    pub fn lookup(&self, name: &str) -> Result<PathBuf> {
        self.find(name)?
            .map(|alias| alias.path().to_path_buf())
            .ok_or_else(|| Error::AliasNotFound {
                name: name.to_string(),
            })
    }

    /// Binds `name` to `path`.
    ///
    /// `path` may be `.` (the current working directory at call time), an
    /// absolute path, a relative path or a `~` path; it is normalized before
    /// being stored. When `name` is already bound and `force` is false the
    /// store is left untouched and [`Error::AliasConflict`] reports the
    /// existing binding. Otherwise every record for `name` is dropped and
    /// the new one appended, in one atomic rewrite.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidAliasName`] for an empty or non-alphanumeric name
    /// * [`Error::InvalidPath`] for an empty path
    /// * [`Error::AliasConflict`] for an existing name without `force`
    /// * I/O errors from reading or writing the store
    pub fn upsert(&self, name: &str, path: &str, force: bool) -> Result<Alias> {
        let name = AliasName::try_from(name)?;
        let target = normalize_target(path, &current_dir()?)?;

        let mut aliases = self.load()?;
        if let Some(existing) = aliases.iter().find(|a| *a.name() == name) {
            if !force {
                return Err(Error::AliasConflict {
                    name: name.to_string(),
                    existing: existing.path().to_path_buf(),
                });
            }
            log::debug!(
                "replacing alias {name} (was {})",
                existing.path().display()
            );
        }

        aliases.retain(|a| *a.name() != name);
        let alias = Alias::new(name, target);
        aliases.push(alias.clone());
        self.save(&aliases)?;
        Ok(alias)
    }

    /// Deletes the alias named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AliasNotFound`] if no such alias exists, or an I/O
    /// error from rewriting the store.
    pub fn remove(&self, name: &str) -> Result<Alias> {
        let mut aliases = self.load()?;
        let removed = aliases
            .iter()
            .find(|a| a.name().as_str() == name)
            .cloned()
            .ok_or_else(|| Error::AliasNotFound {
                name: name.to_string(),
            })?;
        aliases.retain(|a| a.name().as_str() != name);
        self.save(&aliases)?;
        Ok(removed)
    }

    /// Every alias, sorted case-insensitively by name.
    ///
    /// The sort is stable, so names differing only by case keep their
    /// insertion order. Each call re-reads the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_all(&self) -> Result<impl Iterator<Item = Alias>> {
        let mut aliases = self.load()?;
        aliases.sort_by_key(|a| a.name().as_str().to_lowercase());
        Ok(aliases.into_iter())
    }
}
