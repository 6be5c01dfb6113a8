//! Configuration system for reloc.
//!
//! Configuration is merged from these sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), which the
//!    CLI fills from its global flags
//! 2. Environment variables (`RELOC_STORE`, `RELOC_CASELESS`)
//! 3. The user config file, `~/.reloc/config.yaml`
//! 4. Built-in defaults
//!
//! ```yaml
//! # ~/.reloc/config.yaml
//! store: ~/.relocations
//! caseless: true
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;
