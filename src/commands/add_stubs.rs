use anyhow::Result;
use std::collections::BTreeMap;

use posync::catalog::StubPolicy;
use posync::config::CatalogsConfig;

use super::open_set;

pub fn add_stubs(catalogs: &CatalogsConfig, policy: Option<StubPolicy>) -> Result<()> {
    tracing::debug!(policy = ?policy, "Resolved stub policy");

    let mut set = open_set(catalogs, policy)?;
    let added = set.add_stubs()?;

    print!("{}", render_summary(&added));
    Ok(())
}

/// Number of stubs written per language
pub fn render_summary(added: &BTreeMap<String, Vec<String>>) -> String {
    let total: usize = added.values().map(Vec::len).sum();
    if total == 0 {
        return String::from("All catalogs already have every canonical key.\n");
    }

    let mut out = String::new();
    for (language, keys) in added.iter().filter(|(_, keys)| !keys.is_empty()) {
        out.push_str(&format!("{language}: {} stub(s) added\n", keys.len()));
    }
    out.push_str(&format!("Total: {total}\n"));
    out
}
