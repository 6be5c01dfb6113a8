//! Lexical path normalization for alias targets.
//!
//! Alias targets are stored as absolute paths. Normalization here is purely
//! lexical: it expands `~`, anchors relative paths at a working directory
//! and folds `.`/`..` components. Symlinks are never followed, so an alias
//! keeps pointing at the path the user typed.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Token that stands for "the current working directory" in alias targets.
pub const CURRENT_DIR_TOKEN: &str = ".";

/// Expand a leading `~` to the home directory.
///
/// `~user` syntax is rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the home directory cannot be determined
/// or the path uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use reloc::path::normalize::expand_tilde;
///
/// let expanded = expand_tilde("~/src").unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("src"));
///
/// assert_eq!(expand_tilde("/opt").unwrap(), std::path::PathBuf::from("/opt"));
/// ```
pub fn expand_tilde(raw: &str) -> Result<PathBuf> {
    let Some(rest) = raw.strip_prefix('~') else {
        return Ok(PathBuf::from(raw));
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from(raw),
        reason: "cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(tail) = rest.strip_prefix('/') {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Fold `.` and `..` components out of an absolute path.
///
/// `..` at the root stays at the root, as the filesystem itself does.
///
/// # Examples
///
/// ```
/// use reloc::path::normalize::fold_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(fold_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(fold_components(Path::new("/../x")), PathBuf::from("/x"));
/// ```
#[must_use]
pub fn fold_components(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => folded.push(prefix.as_os_str()),
            Component::RootDir => folded.push(Component::RootDir),
            Component::Normal(part) => folded.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping the root itself is a no-op for PathBuf.
                if folded.parent().is_some() {
                    folded.pop();
                }
            }
        }
    }
    folded
}

/// Normalize a user-supplied alias target against `cwd`.
///
/// * empty input is rejected
/// * input containing a newline is rejected (it would split the record)
/// * the [`CURRENT_DIR_TOKEN`] resolves to `cwd`
/// * everything else is tilde-expanded, anchored at `cwd` when relative,
///   and folded
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for empty or newline-bearing input, or
/// when tilde expansion fails.
///
/// # Examples
///
/// ```
/// use reloc::path::normalize::normalize_target;
/// use std::path::{Path, PathBuf};
///
/// let cwd = Path::new("/home/user");
/// assert_eq!(normalize_target(".", cwd).unwrap(), PathBuf::from("/home/user"));
/// assert_eq!(normalize_target("src/../lib", cwd).unwrap(), PathBuf::from("/home/user/lib"));
/// assert!(normalize_target("", cwd).is_err());
/// ```
pub fn normalize_target(raw: &str, cwd: &Path) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(Error::InvalidPath {
            path: PathBuf::new(),
            reason: "path must not be empty".to_string(),
        });
    }
    if raw.contains('\n') || raw.contains('\r') {
        return Err(Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "path must not contain line breaks".to_string(),
        });
    }
    if raw == CURRENT_DIR_TOKEN {
        return Ok(cwd.to_path_buf());
    }

    let expanded = expand_tilde(raw)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    Ok(fold_components(&absolute))
}

/// The process working directory, mapped to a path-naming error.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if the working directory vanished, or
/// [`Error::PermissionDenied`] if it cannot be read.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| Error::from_io(e, "."))
}
