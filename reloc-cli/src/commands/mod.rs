//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `query`: Print the directory an alias and prefixes lead to
//! - `go`: Change to that directory
//! - `define`: Bind an alias to a directory
//! - `list`: List all aliases
//! - `find`: Find aliases matching a pattern
//! - `remove`: Delete an alias
//! - `state`: Show the navigation variables
//! - `init`: Print shell integration functions

pub mod define;
pub mod find;
pub mod go;
pub mod init;
pub mod list;
pub mod query;
pub mod remove;
pub mod state;

pub use define::DefineCommand;
pub use find::FindCommand;
pub use go::GoCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use query::QueryCommand;
pub use remove::RemoveCommand;
pub use state::StateCommand;
