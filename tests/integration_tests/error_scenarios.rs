//! Error scenario integration tests
//!
//! Tests various failure modes and error handling:
//! 1. Missing canonical catalog
//! 2. Missing base directory
//! 3. Malformed or inconsistent catalog files
//! 4. Write failures in the middle of a stub pass

use std::fs;

use posync::catalog::CatalogSet;
use posync::error::{Error, ErrorCategory};

use crate::common::{keys_in_file, three_language_dir, write_catalog};

// ============================================================================
// Construction Errors
// ============================================================================

#[test]
fn test_missing_canonical_fails_at_construction() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_catalog(temp_dir.path(), "ru", &[("foo", "Фу")]);
    write_catalog(temp_dir.path(), "hi", &[("foo", "फू")]);

    let err = CatalogSet::new(temp_dir.path(), "en", None).unwrap_err();
    assert!(matches!(err, Error::MissingCanonical { .. }));
    assert_eq!(err.category(), ErrorCategory::Config);
}

#[test]
fn test_empty_directory_has_no_canonical() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let err = CatalogSet::new(temp_dir.path(), "en", None).unwrap_err();
    assert!(matches!(err, Error::MissingCanonical { .. }));
}

#[test]
fn test_missing_directory_is_io_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let err = CatalogSet::new(temp_dir.path().join("absent"), "en", None).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.category(), ErrorCategory::Storage);
}

#[test]
fn test_canonical_in_subdirectory_does_not_count() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_catalog(&nested, "en", &[("foo", "Foo")]);

    assert!(CatalogSet::new(temp_dir.path(), "en", None).is_err());
}

// ============================================================================
// Malformed Catalogs
// ============================================================================

#[test]
fn test_malformed_catalog_reported_on_first_access() {
    let temp_dir = three_language_dir();
    fs::write(
        temp_dir.path().join("ru.po"),
        "msgid \"foo\"\nmsgstr \"Foo\"\nnot a catalog line\n",
    )
    .unwrap();

    // Construction only lists the directory
    let set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();

    let err = set.find_missing().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.category(), ErrorCategory::Parsing);
    assert!(err.to_string().contains("ru.po"));
}

#[test]
fn test_duplicate_keys_in_file_rejected() {
    let temp_dir = three_language_dir();
    write_catalog(temp_dir.path(), "hi", &[("foo", "a"), ("foo", "b")]);

    let set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    let err = set.find_missing().unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { ref key, .. } if key == "foo"));
    assert_eq!(err.category(), ErrorCategory::Integrity);
}

#[test]
fn test_same_msgid_in_two_contexts_names_context() {
    let temp_dir = three_language_dir();
    fs::write(
        temp_dir.path().join("ru.po"),
        "msgctxt \"menu\"\nmsgid \"foo\"\nmsgstr \"Фу\"\n\nmsgctxt \"title\"\nmsgid \"foo\"\nmsgstr \"Фу!\"\n",
    )
    .unwrap();

    let set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    let err = set.find_missing().unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { ref key, .. } if key == "foo"));

    let msg = err.to_string();
    assert!(msg.contains("ru.po"));
    assert!(msg.contains("msgctxt \"title\""));
}

// ============================================================================
// Partial Failure
// ============================================================================

#[test]
fn test_write_failure_keeps_earlier_catalogs() {
    let temp_dir = three_language_dir();
    let mut set = CatalogSet::new(temp_dir.path(), "en", None).unwrap();
    set.languages().unwrap();

    // Catalogs are processed en, hi, ru; make the last one unwritable
    let ru_path = temp_dir.path().join("ru.po");
    fs::remove_file(&ru_path).unwrap();
    fs::create_dir(&ru_path).unwrap();

    let err = set.add_stubs().unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    assert_eq!(
        keys_in_file(&temp_dir.path().join("hi.po")),
        vec!["foo", "baz", "bar"]
    );
}
