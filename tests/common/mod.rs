//! Common test utilities

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Header block shared by every fixture catalog
pub const HEADER_BLOCK: &str = "msgid \"\"
msgstr \"\"
\"MIME-Version: 1.0\\n\"
\"Content-Type: text/plain; charset=utf-8\\n\"
\"Content-Transfer-Encoding: 8bit\\n\"
";

/// Write `<language>.po` with the shared header and the given entries
pub fn write_catalog(dir: &Path, language: &str, entries: &[(&str, &str)]) {
    let mut text = HEADER_BLOCK.to_string();
    for (key, value) in entries {
        text.push_str(&format!("\nmsgid \"{key}\"\nmsgstr \"{value}\"\n"));
    }
    fs::write(dir.join(format!("{language}.po")), text).unwrap();
}

/// Directory with `en.po` (foo, bar, baz), `ru.po` (foo) and `hi.po` (foo, baz)
pub fn three_language_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    write_catalog(dir, "en", &[("foo", "Foo"), ("bar", "Bar"), ("baz", "Baz")]);
    write_catalog(dir, "ru", &[("foo", "Фу")]);
    write_catalog(dir, "hi", &[("foo", "फू"), ("baz", "बाज़")]);

    temp_dir
}

/// Keys of a catalog file in file order, header excluded
#[allow(dead_code)]
pub fn keys_in_file(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    posync::po::parse(&text)
        .unwrap()
        .into_iter()
        .filter(|entry| !entry.is_header())
        .map(|entry| entry.key)
        .collect()
}
