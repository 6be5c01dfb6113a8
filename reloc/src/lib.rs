#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # reloc
//!
//! A library for bookmarking directories and reaching them by short
//! prefixes.
//!
//! Aliases name directories and live in a line-oriented store file. A
//! location is written as an alias followed by zero or more prefixes; each
//! prefix picks one subdirectory through a cascade of matching strategies
//! (plain, caseless, wildcard, non-prefix wildcard).
//!
//! ## Core Types
//!
//! - [`AliasStore`], [`Alias`] and [`AliasName`]: the persistent bookmarks
//! - [`PrefixResolver`] and [`Resolution`]: one step of prefix matching
//! - [`PathComposer`] and [`Composition`]: alias plus prefixes to a path
//! - [`NavigationState`] and [`Slot`]: the session's location variables
//! - [`Relocator`]: the operations behind each command
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use reloc::{AliasStore, PathComposer, PrefixResolver};
//! # let dir = tempfile::TempDir::new().unwrap();
//! # std::fs::create_dir_all(dir.path().join("tree/source")).unwrap();
//! # let tree = dir.path().join("tree");
//! # let store_file = dir.path().join("relocations");
//!
//! let store = AliasStore::new(&store_file);
//! store.upsert("t", tree.to_str().unwrap(), false).unwrap();
//!
//! let composer = PathComposer::new(&store, PrefixResolver::default());
//! let found = composer.compose("t", &["SO"]).unwrap();
//! assert_eq!(found.path(), tree.join("source"));
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod operations;
pub mod output;
pub mod path;
pub mod resolver;
pub mod store;

// Re-export key types at crate root for convenience
pub use compose::{Composition, PathComposer};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use navigation::{NavigationState, Slot};
pub use operations::{change_directory, AliasPattern, Navigation, Relocator};
pub use output::{ShellScript, ShellType};
pub use resolver::{MatchTier, PrefixResolver, Resolution, ResolveStatus};
pub use store::{Alias, AliasName, AliasStore};
