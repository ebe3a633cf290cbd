//! Integration tests module
//!
//! End-to-end tests running the catalog set against real directories:
//! - find missing → add stubs → find missing again
//! - adding a language from the canonical header
//! - failure modes and their effect on disk

pub mod error_scenarios;
pub mod sync_test;
