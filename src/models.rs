// Core data structures for posync catalogs

use rspolib::POEntry;
use serde::{Deserialize, Serialize};

/// Key reserved for the catalog header entry
pub const HEADER_KEY: &str = "";

/// A single translation unit of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,           // msgid
    pub value: Option<String>, // msgstr, None for an untranslated stub

    /// `msgctxt` of the entry
    #[serde(default)]
    pub context: Option<String>,

    /// Obsolete (`#~`) entries are kept in the file but hold no key
    #[serde(default)]
    pub obsolete: bool,

    /// Comment block at the top of the file; only set on the header entry
    #[serde(default)]
    pub comment: Option<String>,

    /// Entry as read from disk, so comments, flags and plural forms are
    /// written back unchanged
    #[serde(skip)]
    pub(crate) po_entry: Option<Box<POEntry>>,
}

impl Entry {
    /// Create an entry without metadata.
    ///
    /// An empty value is stored as `None`; an empty `msgstr` and a missing one
    /// mean the same thing in a catalog.
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value: value.filter(|v| !v.is_empty()),
            ..Self::default()
        }
    }

    /// Create a header entry carrying the given raw header value
    pub fn header(value: impl Into<String>) -> Self {
        Self::new(HEADER_KEY, Some(value.into()))
    }

    /// Check if this is the reserved header entry
    pub fn is_header(&self) -> bool {
        self.key == HEADER_KEY && !self.obsolete
    }

    /// Check if the entry still lacks a translation
    pub fn is_stub(&self) -> bool {
        self.value.is_none()
    }

    /// Value as a string slice, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

// Entries compare by content; the carried on-disk form is not part of it
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.context == other.context
            && self.obsolete == other.obsolete
            && self.comment == other.comment
    }
}

impl Eq for Entry {}
