use anyhow::Result;

use posync::config::CatalogsConfig;

use super::open_set;

pub fn add_language(catalogs: &CatalogsConfig, language: &str) -> Result<()> {
    let mut set = open_set(catalogs, None)?;

    if set.add_language(language)? {
        let path = set
            .language_file(language)?
            .map(|catalog| catalog.path().display().to_string())
            .unwrap_or_default();
        println!("Created {path}");
    } else {
        println!("Language '{language}' is already tracked");
    }

    Ok(())
}
