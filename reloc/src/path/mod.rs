//! Path handling for alias targets.
//!
//! Targets given to `define` are normalized lexically before they reach the
//! store: `~` is expanded, relative paths are anchored at the working
//! directory, and `.`/`..` components are folded away. Symlinks are kept as
//! typed.
//!
//! # Examples
//!
//! ```
//! use reloc::path::normalize::normalize_target;
//! use std::path::{Path, PathBuf};
//!
//! let target = normalize_target("../shared", Path::new("/work/app")).unwrap();
//! assert_eq!(target, PathBuf::from("/work/shared"));
//! ```

pub mod normalize;

pub use normalize::{current_dir, normalize_target, CURRENT_DIR_TOKEN};
