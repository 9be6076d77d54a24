//! Integration tests for stringvault CLI workflows
//!
//! Each CLI invocation opens the registry over the data file, runs one
//! operation, and exits. These tests mirror that shape: every step opens a
//! fresh registry over the same file, so each flow round-trips through the
//! on-disk snapshot exactly as separate command runs would.

use anyhow::Result;
use std::path::Path;
use stringvault_core::{FilterSet, JsonFileBackend, RegistryError, StringRegistry};
use tempfile::TempDir;

/// Open the registry the way each command invocation does
fn open(data_file: &Path) -> Result<StringRegistry> {
    Ok(StringRegistry::open(Box::new(JsonFileBackend::new(
        data_file,
    )))?)
}

#[test]
fn test_add_get_delete_flow_across_invocations() -> Result<()> {
    let dir = TempDir::new()?;
    let data_file = dir.path().join("data.json");

    // stringvault add "hello world"
    let created = open(&data_file)?.create("hello world")?;

    // stringvault get "hello world"
    let registry = open(&data_file)?;
    let fetched = registry.lookup("hello world")?;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.properties.word_count, 2);

    // stringvault get <id>
    let registry = open(&data_file)?;
    assert_eq!(registry.lookup(&created.id)?.value, "hello world");

    // stringvault delete <id>
    let removed = open(&data_file)?.delete(&created.id)?;
    assert_eq!(removed.id, created.id);

    // stringvault get "hello world" now misses
    let registry = open(&data_file)?;
    assert!(matches!(
        registry.lookup("hello world"),
        Err(RegistryError::NotFound(_))
    ));
    Ok(())
}

#[test]
fn test_duplicate_add_reports_existing_id() -> Result<()> {
    let dir = TempDir::new()?;
    let data_file = dir.path().join("data.json");

    let created = open(&data_file)?.create("hello")?;

    // A second run of `stringvault add hello` is rejected with the id
    let err = open(&data_file)?.create("hello").unwrap_err();
    match err {
        RegistryError::AlreadyExists(id) => assert_eq!(id, created.id),
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_list_filters_match_cli_flags() -> Result<()> {
    let dir = TempDir::new()?;
    let data_file = dir.path().join("data.json");

    let mut registry = open(&data_file)?;
    for value in ["racecar", "pop", "hello world", "stats", "Level"] {
        registry.create(value)?;
    }
    drop(registry);

    // stringvault list --is-palindrome true --word-count 1
    let registry = open(&data_file)?;
    let filters = FilterSet {
        is_palindrome: Some(true),
        word_count: Some(1),
        ..Default::default()
    };
    let values: Vec<String> = registry
        .list(&filters)
        .into_iter()
        .map(|r| r.value)
        .collect();
    assert_eq!(values, vec!["racecar", "pop", "stats", "Level"]);

    // stringvault list --min-length 4 --max-length 7
    let filters = FilterSet {
        min_length: Some(4),
        max_length: Some(7),
        ..Default::default()
    };
    assert_eq!(registry.list(&filters).len(), 3);

    // stringvault list (no flags) returns everything
    assert_eq!(registry.list(&FilterSet::default()).len(), 5);
    Ok(())
}

#[test]
fn test_query_phrases_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let data_file = dir.path().join("data.json");

    let mut registry = open(&data_file)?;
    for value in ["racecar", "quick", "wow wow"] {
        registry.create(value)?;
    }
    drop(registry);

    let registry = open(&data_file)?;

    // stringvault query "strings containing the letter q"
    let outcome = registry.nl_query("strings containing the letter q")?;
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].value, "quick");

    // stringvault query "all single word palindrome strings"
    let outcome = registry.nl_query("all single word palindrome strings")?;
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].value, "racecar");

    // stringvault query "strings longer than 5 characters"
    let outcome = registry.nl_query("strings longer than 5 characters")?;
    assert_eq!(outcome.filters.min_length, Some(6));
    let values: Vec<String> = outcome.matches.into_iter().map(|r| r.value).collect();
    assert_eq!(values, vec!["racecar", "wow wow"]);

    // An unrecognized phrase is an error, not an empty result
    assert!(matches!(
        registry.nl_query("give me everything"),
        Err(RegistryError::UnparsableQuery(_))
    ));
    Ok(())
}

#[test]
fn test_missing_data_file_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let data_file = dir.path().join("never-written.json");

    let registry = open(&data_file)?;
    assert!(registry.is_empty());
    assert!(registry.list(&FilterSet::default()).is_empty());
    Ok(())
}
