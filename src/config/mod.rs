//! Configuration management for posync
//!
//! Settings come from an optional TOML file; command-line arguments
//! override them. Every section and field has a default, so a file only
//! needs to mention what it changes:
//!
//! ```toml
//! [catalogs]
//! directory = "locale"
//! canonical_language = "en"
//!
//! [stubs]
//! template = "{value} ({language})"
//!
//! [logging]
//! level = "debug"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{StubPolicy, DEFAULT_EXTENSION, DEFAULT_STUB_TEMPLATE};
use crate::utils::is_valid_language_id;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where catalogs live
    pub catalogs: CatalogsConfig,

    /// How stub values are produced
    pub stubs: StubsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Catalog directory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogsConfig {
    /// Directory holding one catalog per language
    pub directory: PathBuf,

    /// Language whose catalog defines the full key set
    pub canonical_language: String,

    /// Catalog file extension, without the dot
    pub extension: String,
}

/// Stub value configuration
///
/// `fixed` wins over `template`; with neither (or an empty template), stubs
/// stay untranslated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Template with `{key}`, `{language}` and `{value}` placeholders
    pub template: Option<String>,

    /// Constant stub value
    pub fixed: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for CatalogsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            canonical_language: String::from("en"),
            extension: String::from(DEFAULT_EXTENSION),
        }
    }
}

impl Default for StubsConfig {
    fn default() -> Self {
        Self {
            template: Some(String::from(DEFAULT_STUB_TEMPLATE)),
            fixed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl StubsConfig {
    /// Build the stub policy described by this section
    pub fn policy(&self) -> Option<StubPolicy> {
        match (&self.fixed, &self.template) {
            (Some(fixed), _) => Some(StubPolicy::fixed(fixed.clone())),
            (None, Some(template)) if !template.is_empty() => {
                Some(StubPolicy::template(template.clone()))
            }
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the file if one is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !is_valid_language_id(&self.catalogs.canonical_language) {
            anyhow::bail!(
                "canonical_language {:?} is not a valid language id",
                self.catalogs.canonical_language
            );
        }

        if self.catalogs.extension.is_empty() || self.catalogs.extension.contains('.') {
            anyhow::bail!("extension must be non-empty and must not contain a dot");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("logging.format must be 'text' or 'json'");
        }

        if !matches!(
            self.logging.level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            anyhow::bail!("logging.level must be one of trace, debug, info, warn, error");
        }

        Ok(())
    }
}
