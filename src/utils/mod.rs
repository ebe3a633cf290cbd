//! Common utilities and helper functions
//!
//! Directory listing and file naming shared by the catalog set and the
//! command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the files directly under `dir` whose extension is `extension`.
///
/// Subdirectories are not searched. Paths are sorted by file name so the
/// listing is stable across platforms.
pub fn list_catalog_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name of the catalog for `language`, e.g. `ru.po`
pub fn catalog_file_name(language: &str, extension: &str) -> String {
    format!("{language}.{extension}")
}

/// Check that a language id can be used as a file stem
pub fn is_valid_language_id(language: &str) -> bool {
    !language.is_empty()
        && !language.contains(['/', '\\', '.'])
        && !language.chars().any(char::is_whitespace)
}
