//! Directory of catalogs kept in sync with a canonical language

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{Catalog, StubPolicy};
use crate::error::{Error, Result};
use crate::utils::{catalog_file_name, is_valid_language_id, list_catalog_files};

/// Extension of gettext catalogs
pub const DEFAULT_EXTENSION: &str = "po";

/// Every catalog of one directory, keyed by language
///
/// The directory is listed once, when the set is created; catalog contents
/// are read on first access. Exactly one catalog is the canonical one and
/// it is always looked up by language.
#[derive(Debug)]
pub struct CatalogSet {
    base_dir: PathBuf,
    extension: String,
    canonical_language: String,
    stub_policy: Option<StubPolicy>,

    /// Catalog files found when the set was created
    discovered: Vec<PathBuf>,

    /// Loaded catalogs, filled on first access
    catalogs: OnceCell<BTreeMap<String, Catalog>>,
}

impl CatalogSet {
    /// Open the `.po` catalogs of `base_dir`.
    ///
    /// Fails with [`Error::MissingCanonical`] when there is no catalog for
    /// `canonical_language`.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        canonical_language: impl Into<String>,
        stub_policy: Option<StubPolicy>,
    ) -> Result<Self> {
        Self::with_extension(base_dir, DEFAULT_EXTENSION, canonical_language, stub_policy)
    }

    /// Open the catalogs of `base_dir` that use a custom file extension
    pub fn with_extension(
        base_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
        canonical_language: impl Into<String>,
        stub_policy: Option<StubPolicy>,
    ) -> Result<Self> {
        let base_dir = base_dir.into();
        let extension = extension.into();
        let canonical_language = canonical_language.into();

        if extension.is_empty() || extension.contains('.') {
            return Err(Error::config(format!("invalid catalog extension {extension:?}")));
        }
        if !is_valid_language_id(&canonical_language) {
            return Err(Error::config(format!(
                "invalid canonical language {canonical_language:?}"
            )));
        }

        let discovered =
            list_catalog_files(&base_dir, &extension).map_err(|e| Error::io(&base_dir, e))?;

        let has_canonical = discovered
            .iter()
            .any(|path| language_of(path) == Some(canonical_language.as_str()));
        if !has_canonical {
            return Err(Error::MissingCanonical {
                language: canonical_language,
                directory: base_dir,
            });
        }

        tracing::debug!(
            directory = %base_dir.display(),
            canonical = %canonical_language,
            files = discovered.len(),
            "Catalog directory scanned"
        );

        Ok(Self {
            base_dir,
            extension,
            canonical_language,
            stub_policy,
            discovered,
            catalogs: OnceCell::new(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn canonical_language(&self) -> &str {
        &self.canonical_language
    }

    pub fn stub_policy(&self) -> Option<&StubPolicy> {
        self.stub_policy.as_ref()
    }

    /// Loaded catalogs, reading them on the first call
    pub fn catalogs(&self) -> Result<&BTreeMap<String, Catalog>> {
        if let Some(catalogs) = self.catalogs.get() {
            return Ok(catalogs);
        }

        let mut loaded = BTreeMap::new();
        for path in &self.discovered {
            let catalog = Catalog::load(path)?;
            loaded
                .entry(catalog.language().to_string())
                .or_insert(catalog);
        }

        tracing::debug!(catalogs = loaded.len(), "Catalogs loaded");
        Ok(self.catalogs.get_or_init(|| loaded))
    }

    fn catalogs_mut(&mut self) -> Result<&mut BTreeMap<String, Catalog>> {
        self.catalogs()?;
        self.catalogs
            .get_mut()
            .ok_or_else(|| Error::config("catalog collection failed to initialize"))
    }

    /// Tracked languages in order
    pub fn languages(&self) -> Result<Vec<&str>> {
        Ok(self.catalogs()?.keys().map(String::as_str).collect())
    }

    pub fn has_language(&self, language: &str) -> Result<bool> {
        Ok(self.catalogs()?.contains_key(language))
    }

    /// Catalog of `language`, if tracked
    pub fn language_file(&self, language: &str) -> Result<Option<&Catalog>> {
        Ok(self.catalogs()?.get(language))
    }

    /// Catalog of the canonical language
    pub fn canonical_language_file(&self) -> Result<&Catalog> {
        self.language_file(&self.canonical_language)?
            .ok_or_else(|| Error::MissingCanonical {
                language: self.canonical_language.clone(),
                directory: self.base_dir.clone(),
            })
    }

    /// Start tracking a new language.
    ///
    /// The new catalog gets a copy of the canonical header and nothing else,
    /// and is written to disk right away. Returns `false` when the language
    /// is already tracked. A file for the language that exists on disk but
    /// is not tracked is never overwritten.
    pub fn add_language(&mut self, language: &str) -> Result<bool> {
        if self.has_language(language)? {
            tracing::debug!(language = %language, "Language already tracked");
            return Ok(false);
        }

        if !is_valid_language_id(language) {
            return Err(Error::config(format!("invalid language {language:?}")));
        }

        let path = self
            .base_dir
            .join(catalog_file_name(language, &self.extension));
        let exists = path.try_exists().map_err(|e| Error::io(&path, e))?;
        if exists {
            return Err(Error::LanguageFileExists {
                language: language.to_string(),
                path,
            });
        }

        let headers = self.canonical_language_file()?.headers().clone();
        let mut catalog = Catalog::new(path);
        catalog.set_headers(&headers);
        catalog.save()?;

        tracing::info!(
            language = %language,
            path = %catalog.path().display(),
            headers = headers.len(),
            "Language added"
        );

        self.catalogs_mut()?.insert(language.to_string(), catalog);
        Ok(true)
    }

    /// Canonical keys missing from each catalog, canonical catalog included
    pub fn find_missing(&self) -> Result<BTreeMap<String, Vec<String>>> {
        let canonical = self.canonical_language_file()?;

        let missing: BTreeMap<String, Vec<String>> = self
            .catalogs()?
            .iter()
            .map(|(language, catalog)| (language.clone(), catalog.find_missing_from(canonical)))
            .collect();

        tracing::info!(
            catalogs = missing.len(),
            missing = missing.values().map(Vec::len).sum::<usize>(),
            "Missing keys computed"
        );
        Ok(missing)
    }

    /// Add stubs for the canonical keys each catalog lacks.
    ///
    /// Catalogs are saved one by one; an error stops the run and leaves the
    /// catalogs already saved as they are. Returns the keys added per
    /// language.
    pub fn add_stubs(&mut self) -> Result<BTreeMap<String, Vec<String>>> {
        let canonical = self.canonical_language_file()?.clone();
        self.catalogs()?;

        let policy = self.stub_policy.as_ref();
        let catalogs = self
            .catalogs
            .get_mut()
            .ok_or_else(|| Error::config("catalog collection failed to initialize"))?;

        let mut added = BTreeMap::new();
        for (language, catalog) in catalogs.iter_mut() {
            let keys = catalog.add_stubs_from(&canonical, policy)?;
            added.insert(language.clone(), keys);
        }

        tracing::info!(
            catalogs = added.len(),
            stubs = added.values().map(Vec::len).sum::<usize>(),
            "Stub pass finished"
        );
        Ok(added)
    }
}

fn language_of(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}
