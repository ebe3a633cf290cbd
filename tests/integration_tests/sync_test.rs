//! Synchronization scenarios
//!
//! Runs find-missing and add-stubs over a directory with `en`, `ru` and
//! `hi` catalogs and checks what ends up on disk.

use std::collections::BTreeMap;
use std::fs;

use posync::catalog::{Catalog, CatalogSet, StubPolicy, DEFAULT_STUB_TEMPLATE};

use crate::common::{keys_in_file, three_language_dir, write_catalog};

#[test]
fn test_find_missing_scenario() {
    let temp_dir = three_language_dir();
    let set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();

    let missing = set.find_missing().unwrap();
    let expected = BTreeMap::from([
        ("en".to_string(), Vec::<String>::new()),
        ("ru".to_string(), vec!["bar".to_string(), "baz".to_string()]),
        ("hi".to_string(), vec!["bar".to_string()]),
    ]);
    assert_eq!(missing, expected);
}

#[test]
fn test_add_stubs_scenario() {
    let temp_dir = three_language_dir();
    let mut set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();

    set.add_stubs().unwrap();

    assert_eq!(
        keys_in_file(&temp_dir.path().join("ru.po")),
        vec!["foo", "bar", "baz"]
    );
    assert_eq!(
        keys_in_file(&temp_dir.path().join("hi.po")),
        vec!["foo", "baz", "bar"]
    );

    let ru = Catalog::load(temp_dir.path().join("ru.po")).unwrap();
    assert!(ru.entry_for("bar").unwrap().is_stub());
    assert!(ru.entry_for("baz").unwrap().is_stub());
    assert_eq!(ru.entry_for("foo").unwrap().value(), Some("Фу"));

    // Re-running on the same set and on a fresh one finds nothing
    assert!(set.find_missing().unwrap().values().all(Vec::is_empty));
    let fresh = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    assert!(fresh.find_missing().unwrap().values().all(Vec::is_empty));
}

#[test]
fn test_add_stubs_keeps_header_first() {
    let temp_dir = three_language_dir();
    let mut set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    set.add_stubs().unwrap();

    let text = fs::read_to_string(temp_dir.path().join("ru.po")).unwrap();
    assert!(text.contains("msgid \"baz\"\nmsgstr \"\"\n"));

    let ru = Catalog::load(temp_dir.path().join("ru.po")).unwrap();
    assert!(ru.entries()[0].is_header());
    assert_eq!(ru.headers().get("MIME-Version"), Some("1.0"));
    assert_eq!(ru.entries().last().unwrap().key, "baz");
}

#[test]
fn test_add_stubs_is_idempotent() {
    let temp_dir = three_language_dir();

    let mut first = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    first.add_stubs().unwrap();
    let after_first = fs::read_to_string(temp_dir.path().join("hi.po")).unwrap();

    let mut second = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    let added = second.add_stubs().unwrap();
    assert!(added.values().all(Vec::is_empty));

    let after_second = fs::read_to_string(temp_dir.path().join("hi.po")).unwrap();
    assert_eq!(after_first, after_second);
}

#[test]
fn test_add_stubs_with_default_template() {
    let temp_dir = three_language_dir();
    let policy = StubPolicy::template(DEFAULT_STUB_TEMPLATE);
    let mut set = CatalogSet::new(temp_dir.path(), "en", Some(policy)).unwrap();

    set.add_stubs().unwrap();

    let ru = Catalog::load(temp_dir.path().join("ru.po")).unwrap();
    assert_eq!(ru.entry_for("bar").unwrap().value(), Some("Bar (ru)"));
    assert_eq!(ru.entry_for("baz").unwrap().value(), Some("Baz (ru)"));

    let hi = Catalog::load(temp_dir.path().join("hi.po")).unwrap();
    assert_eq!(hi.entry_for("bar").unwrap().value(), Some("Bar (hi)"));
}

#[test]
fn test_computed_policy_receives_canonical_value() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_catalog(temp_dir.path(), "en", &[("greet", "Hello"), ("todo", "")]);
    write_catalog(temp_dir.path(), "de", &[]);

    let policy = StubPolicy::computed(|request| {
        format!(
            "{}|{}|{}",
            request.key,
            request.language,
            request.canonical_value.unwrap_or("<none>")
        )
    });
    let mut set = CatalogSet::new(temp_dir.path(), "en", Some(policy)).unwrap();
    set.add_stubs().unwrap();

    let de = set.language_file("de").unwrap().unwrap();
    assert_eq!(de.entry_for("greet").unwrap().value(), Some("greet|de|Hello"));
    assert_eq!(de.entry_for("todo").unwrap().value(), Some("todo|de|<none>"));
}

#[test]
fn test_metadata_survives_stub_pass() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_catalog(temp_dir.path(), "en", &[("foo", "Foo"), ("bar", "Bar")]);
    fs::write(
        temp_dir.path().join("fr.po"),
        format!(
            "# French translation\n{}\n#: src/lib.rs:4\n#, fuzzy\nmsgid \"foo\"\nmsgstr \"Fou\"\n",
            crate::common::HEADER_BLOCK
        ),
    )
    .unwrap();

    let mut set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    set.add_stubs().unwrap();

    let text = fs::read_to_string(temp_dir.path().join("fr.po")).unwrap();
    assert!(text.contains("French translation"));
    assert!(text.contains("#: src/lib.rs:4"));
    assert!(text.contains("#, fuzzy"));

    let fr = Catalog::load(temp_dir.path().join("fr.po")).unwrap();
    assert_eq!(fr.entry_for("foo").unwrap().value(), Some("Fou"));
    assert!(fr.entry_for("bar").unwrap().is_stub());
    assert_eq!(keys_in_file(&temp_dir.path().join("fr.po")), vec!["foo", "bar"]);
}
