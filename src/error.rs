//! Unified error handling for the posync crate
//!
//! Every fallible library operation returns [`Result`], whose error type
//! [`Error`] covers the whole taxonomy of catalog synchronization failures.
//!
//! # Architecture
//!
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum
//! - [`PoError`] - Syntax errors raised by the catalog codec
//!
//! # Usage
//!
//! ```rust,ignore
//! use posync::error::{Error, ErrorCategory};
//!
//! fn handle_error(err: Error) {
//!     if err.category() == ErrorCategory::Config {
//!         eprintln!("Check the catalog directory: {err}");
//!     }
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use crate::po::PoError;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration and validation errors
    Config,
    /// Storage and I/O errors
    Storage,
    /// Malformed catalog files
    Parsing,
    /// Operations that would break a catalog invariant
    Integrity,
}

impl ErrorCategory {
    /// Human readable name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "configuration error",
            Self::Storage => "storage error",
            Self::Parsing => "parse error",
            Self::Integrity => "integrity error",
        }
    }
}

/// Unified error type for the posync crate
#[derive(Error, Debug)]
pub enum Error {
    /// The canonical language has no catalog in the base directory
    #[error("No catalog for canonical language '{language}' in {}", .directory.display())]
    MissingCanonical { language: String, directory: PathBuf },

    /// A language file exists on disk but is not tracked by the set
    #[error("Refusing to overwrite existing catalog for '{language}': {}", .path.display())]
    LanguageFileExists { language: String, path: PathBuf },

    /// A key is already present in the catalog.
    ///
    /// Entries are matched by `msgid` alone, so the same `msgid` under two
    /// `msgctxt` values is a duplicate too; `context` names the one involved.
    #[error("Duplicate key {key:?} in {}{}", .path.display(), context_note(.context))]
    DuplicateKey {
        key: String,
        context: Option<String>,
        path: PathBuf,
    },

    /// The empty key is reserved for the header entry
    #[error("The empty key is reserved for the header entry of {}", .path.display())]
    ReservedKey { path: PathBuf },

    /// A present catalog file could not be parsed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PoError,
    },

    /// I/O errors
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an I/O error bound to the path it occurred on
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCanonical { .. } | Self::Config(_) => ErrorCategory::Config,
            Self::LanguageFileExists { .. } | Self::DuplicateKey { .. } | Self::ReservedKey { .. } => {
                ErrorCategory::Integrity
            }
            Self::Parse { .. } => ErrorCategory::Parsing,
            Self::Io { .. } => ErrorCategory::Storage,
        }
    }

    /// Check if retrying the same call could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}

fn context_note(context: &Option<String>) -> String {
    match context {
        Some(context) => format!(
            " (msgctxt {context:?}; entries are matched by msgid only, contexts are not told apart)"
        ),
        None => String::new(),
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
