//! posync - keep gettext catalogs in sync with a canonical language
//!
//! A directory holds one `.po` catalog per language. One language is
//! canonical: its catalog defines the full set of message keys. posync finds
//! the keys every other catalog lacks and can append stub entries for them,
//! so all catalogs end up with the same key set.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`catalog`] - Catalogs, the catalog set and stub policies
//! - [`po`] - Reading and writing the catalog text format
//! - [`models`] - Core data structures and types
//! - [`config`] - Configuration management and settings
//! - [`error`] - Error taxonomy
//! - [`utils`] - Directory listing and naming helpers
//!
//! # Example
//!
//! ```no_run
//! use posync::catalog::{CatalogSet, StubPolicy};
//!
//! fn main() -> anyhow::Result<()> {
//!     let policy = StubPolicy::template("{value} ({language})");
//!     let mut set = CatalogSet::new("locale", "en", Some(policy))?;
//!     set.add_language("de")?;
//!     set.add_stubs()?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod po;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogSet, Headers, StubPolicy, StubRequest};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::Entry;
}

// Direct re-exports for convenience
pub use error::{Error, Result};
pub use models::Entry;
