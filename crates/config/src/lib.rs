//! Configuration loading from `.env`-style files.
//!
//! This crate reads a line-oriented `KEY = VALUE` file into a key-value
//! namespace (the process environment by default) and answers typed lookups
//! with prefix resolution, default fallback, and explicit overrides.
//!
//! ```no_run
//! use envstore::{ConfigStore, Override, StoreOptions};
//!
//! let store = ConfigStore::new(StoreOptions::new().with_prefix("APP"));
//! store.load(".", &[Override::new("DEBUG", "1")])?;
//!
//! let port = store.get_int_with_default("PORT", 8080);
//! let debug = store.get_bool("DEBUG");
//! # let _ = (port, debug);
//! # Ok::<(), envstore::ConfigError>(())
//! ```

pub mod constants;
mod error;
pub mod namespace;
mod options;
mod parser;
mod store;

pub use error::ConfigError;
pub use namespace::{MemoryNamespace, Namespace, ProcessEnv};
pub use options::{CollisionPolicy, PathMode, StoreOptions};
pub use parser::{ParsedLine, parse_line};
pub use store::{ConfigStore, LoadReport, Override};
