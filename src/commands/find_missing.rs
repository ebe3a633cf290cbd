use anyhow::Result;
use std::collections::BTreeMap;

use posync::config::CatalogsConfig;

use super::open_set;

pub fn find_missing(catalogs: &CatalogsConfig) -> Result<()> {
    let set = open_set(catalogs, None)?;
    let missing = set.find_missing()?;

    print!("{}", render_missing(&missing));
    Ok(())
}

/// One block per language with missing keys: the language, then its keys indented
pub fn render_missing(missing: &BTreeMap<String, Vec<String>>) -> String {
    let mut out = String::new();

    for (language, keys) in missing.iter().filter(|(_, keys)| !keys.is_empty()) {
        out.push_str(language);
        out.push('\n');
        for key in keys {
            out.push_str("    ");
            out.push_str(key);
            out.push('\n');
        }
    }

    out
}
