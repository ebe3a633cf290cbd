pub mod add_language;
pub mod add_stubs;
pub mod find_missing;

// Re-export command functions for convenience
pub use add_language::add_language;
pub use add_stubs::add_stubs;
pub use find_missing::find_missing;

use anyhow::{Context, Result};

use posync::catalog::{CatalogSet, StubPolicy};
use posync::config::CatalogsConfig;

/// Open the catalog set described by `catalogs`
fn open_set(catalogs: &CatalogsConfig, policy: Option<StubPolicy>) -> Result<CatalogSet> {
    CatalogSet::with_extension(
        &catalogs.directory,
        &catalogs.extension,
        &catalogs.canonical_language,
        policy,
    )
    .with_context(|| {
        format!(
            "Failed to open catalogs in {}",
            catalogs.directory.display()
        )
    })
}
