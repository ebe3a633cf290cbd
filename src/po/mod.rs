//! Gettext catalog codec
//!
//! Reads the text of a `.po` file into an ordered list of [`Entry`] values and
//! writes such a list back out, using `rspolib` for the file format. The
//! header comes first, as an ordinary entry with the empty key whose value is
//! rebuilt from the file's metadata. Every other entry keeps what it was read
//! with (comments, flags, references, plural forms), so only keys and values
//! change across a load/save cycle.
//!
//! # Example
//!
//! ```
//! use posync::po;
//!
//! let entries = po::parse("msgid \"hello\"\nmsgstr \"bonjour\"\n").unwrap();
//! assert_eq!(entries[0].key, "hello");
//! assert_eq!(entries[0].value(), Some("bonjour"));
//!
//! let again = po::parse(&po::write(&entries)).unwrap();
//! assert_eq!(again, entries);
//! ```

use rspolib::{pofile, FileOptions, POEntry, POFile};
use thiserror::Error;

use crate::catalog::Headers;
use crate::models::Entry;

/// Line width used when writing catalogs, as gettext tools do
const WRAP_WIDTH: usize = 78;

/// Header fields in the order gettext tools write them
const STANDARD_FIELDS: [&str; 11] = [
    "Project-Id-Version",
    "Report-Msgid-Bugs-To",
    "POT-Creation-Date",
    "PO-Revision-Date",
    "Last-Translator",
    "Language-Team",
    "Language",
    "MIME-Version",
    "Content-Type",
    "Content-Transfer-Encoding",
    "Plural-Forms",
];

/// Catalog text that could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoError {
    #[error("{message}")]
    Syntax { message: String },
}

fn options(path_or_content: String) -> FileOptions {
    FileOptions {
        path_or_content,
        wrapwidth: WRAP_WIDTH,
        byte_content: None,
    }
}

/// Parse catalog text into its ordered entries.
///
/// The header entry, when the file has one, is first. Duplicate keys are not
/// rejected here; that is the catalog's invariant to enforce.
pub fn parse(text: &str) -> Result<Vec<Entry>, PoError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let file = pofile(options(text.to_string())).map_err(|e| PoError::Syntax {
        message: e.to_string(),
    })?;

    let mut stray_header = None;
    let mut body = Vec::with_capacity(file.entries.len());
    for po_entry in &file.entries {
        if po_entry.msgid.is_empty() && !po_entry.obsolete {
            stray_header = po_entry.msgstr.clone();
            continue;
        }
        body.push(from_po_entry(po_entry));
    }

    let mut entries = Vec::with_capacity(body.len() + 1);
    entries.extend(read_header(&file, stray_header));
    entries.extend(body);
    Ok(entries)
}

/// Serialize entries, header first.
///
/// Stubs are written with an empty `msgstr`.
pub fn write(entries: &[Entry]) -> String {
    let mut file = POFile::new(options(String::new()));

    for entry in entries {
        if entry.is_header() {
            file.header = entry.comment.clone();
            for (name, value) in Headers::parse(entry.value().unwrap_or_default()).iter() {
                file.metadata.insert(name.to_string(), value.to_string());
            }
        } else {
            file.entries.push(to_po_entry(entry));
        }
    }

    file.to_string()
}

/// Header entry built from the file's metadata and leading comment
fn read_header(file: &POFile, stray: Option<String>) -> Option<Entry> {
    let fields: Vec<(&str, &str)> = file
        .metadata
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let value = if fields.is_empty() {
        stray.unwrap_or_default()
    } else {
        in_gettext_order(fields).to_value()
    };
    let comment = file.header.clone().filter(|c| !c.is_empty());

    if value.is_empty() && comment.is_none() {
        return None;
    }

    let mut entry = Entry::header(value);
    entry.comment = comment;
    Some(entry)
}

/// Standard fields in gettext order, then any others by name
fn in_gettext_order(mut fields: Vec<(&str, &str)>) -> Headers {
    fields.sort_by(|(a, _), (b, _)| {
        let rank = |name: &str| {
            STANDARD_FIELDS
                .iter()
                .position(|field| *field == name)
                .unwrap_or(STANDARD_FIELDS.len())
        };
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    });
    fields.into_iter().collect()
}

fn from_po_entry(po_entry: &POEntry) -> Entry {
    Entry {
        key: po_entry.msgid.clone(),
        value: po_entry.msgstr.clone().filter(|v| !v.is_empty()),
        context: po_entry.msgctxt.clone(),
        obsolete: po_entry.obsolete,
        comment: None,
        po_entry: Some(Box::new(po_entry.clone())),
    }
}

fn to_po_entry(entry: &Entry) -> POEntry {
    let mut po_entry = entry
        .po_entry
        .as_deref()
        .cloned()
        .unwrap_or_else(|| POEntry::new(0));
    let had_msgstr = po_entry.msgstr.is_some();

    po_entry.msgid = entry.key.clone();
    po_entry.msgctxt = entry.context.clone();
    po_entry.obsolete = entry.obsolete;

    // Plural entries read from disk carry msgstr[N] instead of msgstr
    if entry.value.is_some() || had_msgstr || entry.po_entry.is_none() {
        po_entry.msgstr = Some(entry.value.clone().unwrap_or_default());
    }

    po_entry
}
