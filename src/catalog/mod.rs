//! Translation catalogs
//!
//! A [`Catalog`] is one language's `.po` file held in memory as an ordered
//! list of entries. It answers which canonical keys it lacks and can append
//! stub entries for them. A [`CatalogSet`] groups every catalog of a
//! directory around a canonical language.
//!
//! # Example
//!
//! ```no_run
//! use posync::catalog::CatalogSet;
//!
//! # fn example() -> posync::Result<()> {
//! let mut set = CatalogSet::new("locale", "en", None)?;
//! for (language, keys) in set.find_missing()? {
//!     println!("{language}: {} missing", keys.len());
//! }
//! set.add_stubs()?;
//! # Ok(())
//! # }
//! ```

pub mod headers;
pub mod set;
pub mod stub;

pub use headers::Headers;
pub use set::{CatalogSet, DEFAULT_EXTENSION};
pub use stub::{StubPolicy, StubRequest, DEFAULT_STUB_TEMPLATE};

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{Entry, HEADER_KEY};
use crate::po;

/// One language's catalog file
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Backing file
    path: PathBuf,

    /// Entries in file order, header first
    entries: Vec<Entry>,

    /// Position of each live key in `entries`; obsolete entries hold none
    index: HashMap<String, usize>,

    /// Header fields, parsed on first use
    headers: OnceCell<Headers>,
}

impl Catalog {
    /// Create an empty, unsaved catalog for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            index: HashMap::new(),
            headers: OnceCell::new(),
        }
    }

    /// Load the catalog stored at `path`.
    ///
    /// A file that does not exist yet is an empty catalog, not an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Catalog file absent, starting empty");
                return Ok(Self::new(path));
            }
            Err(e) => return Err(Error::io(&path, e)),
        };

        let entries = po::parse(&text).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;

        let catalog = Self::from_entries(path, entries)?;
        tracing::debug!(
            path = %catalog.path.display(),
            entries = catalog.entries.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from parsed entries.
    ///
    /// Fails on duplicate keys, including one `msgid` used under several
    /// `msgctxt` values. A header found later in the list is moved to the
    /// front.
    pub fn from_entries(path: impl Into<PathBuf>, entries: Vec<Entry>) -> Result<Self> {
        let mut catalog = Self::new(path);

        for entry in entries {
            if !entry.obsolete {
                if let Some(&pos) = catalog.index.get(&entry.key) {
                    let context = entry
                        .context
                        .or_else(|| catalog.entries[pos].context.clone());
                    return Err(Error::DuplicateKey {
                        key: entry.key,
                        context,
                        path: catalog.path,
                    });
                }
                catalog.index.insert(entry.key.clone(), catalog.entries.len());
            }
            catalog.entries.push(entry);
        }

        if let Some(&pos) = catalog.index.get(HEADER_KEY) {
            if pos != 0 {
                tracing::warn!(
                    path = %catalog.path.display(),
                    position = pos,
                    "Header entry is not first, moving it to the front"
                );
                let header = catalog.entries.remove(pos);
                catalog.entries.insert(0, header);
                catalog.reindex();
            }
        }

        Ok(catalog)
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.obsolete)
            .map(|(i, entry)| (entry.key.clone(), i))
            .collect();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in order, header and obsolete entries included
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Language of the catalog: the file name without its extension
    pub fn language(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }

    /// Every live key except the header's
    pub fn keys(&self) -> HashSet<&str> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_header() && !entry.obsolete)
            .map(|entry| entry.key.as_str())
            .collect()
    }

    /// Entry with exactly this key
    pub fn entry_for(&self, key: &str) -> Option<&Entry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// The header entry, if the catalog has one
    pub fn header(&self) -> Option<&Entry> {
        self.entry_for(HEADER_KEY)
    }

    /// Append a new entry in memory.
    ///
    /// The key must not exist yet and must not be the reserved header key.
    pub fn add_entry(&mut self, key: impl Into<String>, value: Option<String>) -> Result<&Entry> {
        let key = key.into();

        if key == HEADER_KEY {
            return Err(Error::ReservedKey {
                path: self.path.clone(),
            });
        }
        if let Some(existing) = self.entry_for(&key) {
            return Err(Error::DuplicateKey {
                context: existing.context.clone(),
                key,
                path: self.path.clone(),
            });
        }

        let pos = self.entries.len();
        self.index.insert(key.clone(), pos);
        self.entries.push(Entry::new(key, value));
        Ok(&self.entries[pos])
    }

    /// Header fields of the catalog, empty when it has no header entry
    pub fn headers(&self) -> &Headers {
        self.headers.get_or_init(|| match self.header() {
            Some(entry) => Headers::parse(entry.value().unwrap_or_default()),
            None => {
                tracing::warn!(path = %self.path.display(), "Catalog has no header entry");
                Headers::default()
            }
        })
    }

    /// Replace the header entry's fields, creating the entry if needed
    pub fn set_headers(&mut self, headers: &Headers) {
        let value = headers.to_value();

        match self.index.get(HEADER_KEY) {
            Some(&pos) => self.entries[pos].value = Some(value).filter(|v| !v.is_empty()),
            None => {
                self.entries.insert(0, Entry::header(value));
                self.reindex();
            }
        }

        self.headers = OnceCell::new();
    }

    /// Write every entry back to the catalog file, overwriting it
    pub fn save(&self) -> Result<()> {
        if self.header().is_none() {
            tracing::warn!(path = %self.path.display(), "Saving catalog without header entry");
        }

        fs::write(&self.path, po::write(&self.entries)).map_err(|e| Error::io(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "Catalog saved"
        );
        Ok(())
    }

    /// Keys of `other` that this catalog lacks, in `other`'s order
    pub fn find_missing_from(&self, other: &Catalog) -> Vec<String> {
        let present = self.keys();

        other
            .entries
            .iter()
            .filter(|entry| {
                !entry.is_header() && !entry.obsolete && !present.contains(entry.key.as_str())
            })
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Append a stub for every key of `other` this catalog lacks, then save.
    ///
    /// Stubs are added in `other`'s order and written with a single save; the
    /// file is left untouched when nothing is missing. Returns the added keys.
    pub fn add_stubs_from(
        &mut self,
        other: &Catalog,
        policy: Option<&StubPolicy>,
    ) -> Result<Vec<String>> {
        let missing = self.find_missing_from(other);
        // Nothing to add: skip the save so an unchanged file is not rewritten
        if missing.is_empty() {
            tracing::debug!(language = self.language(), "No stubs needed");
            return Ok(missing);
        }

        let language = self.language().to_string();
        for key in &missing {
            let value = policy.map(|policy| {
                policy.resolve(&StubRequest {
                    key: key.as_str(),
                    language: &language,
                    canonical_value: other.entry_for(key).and_then(Entry::value),
                })
            });
            self.add_entry(key.clone(), value)?;
        }

        self.save()?;
        tracing::info!(language = %language, added = missing.len(), "Stubs added");
        Ok(missing)
    }
}
