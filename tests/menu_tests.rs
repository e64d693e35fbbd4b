//! Tests for menu building and selection resolution.
//!
//! These tests verify:
//! - The selection space is the fixed option block followed by sources
//! - Index resolution returns the right tagged action
//! - Fetch argument assembly follows the option states
//! - Stale indices fail fast instead of resolving against refreshed state

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use nugetmenu::error::MenuError;
use nugetmenu::menu::{MenuEntry, MenuModel};
use nugetmenu::options::{OptionFlag, OptionStore};
use nugetmenu::resolver::{self, Action};
use nugetmenu::sources::SourceCatalog;
use nugetmenu::ContextMenu;

const TWO_SOURCES: &str = r#"{
    "packageSources": [
        { "key": "nuget.org", "value": "https://a" },
        { "key": "local",     "value": "https://b" }
    ],
    "disabledPackageSources": []
}"#;

fn write_documents(dir: &TempDir, sources: &str) -> (PathBuf, PathBuf) {
    let sources_path = dir.path().join("sources.json");
    fs::write(&sources_path, sources).expect("write sources document");
    // Options document is absent so the store bootstraps defaults
    (sources_path, dir.path().join("ContextMenu.json"))
}

fn build(dir: &TempDir, sources: &str) -> MenuModel {
    let (sources_path, options_path) = write_documents(dir, sources);
    MenuModel::build(
        &SourceCatalog::new(sources_path),
        &OptionStore::new(options_path),
    )
    .expect("build menu")
}

#[test]
fn test_menu_is_option_block_then_sources() {
    let dir = TempDir::new().unwrap();
    let menu = build(&dir, TWO_SOURCES);
    let entries = menu.entries();

    assert_eq!(entries.len(), 5);
    assert_eq!(menu.entry_count(), 5);
    assert!(matches!(
        entries[0],
        MenuEntry::Option {
            flag: OptionFlag::UseVersionedPackages,
            enabled: false
        }
    ));
    assert!(matches!(
        entries[1],
        MenuEntry::Option {
            flag: OptionFlag::GetLatest,
            enabled: true
        }
    ));
    assert!(matches!(
        entries[2],
        MenuEntry::Option {
            flag: OptionFlag::CleanPackages,
            enabled: true
        }
    ));
    match (&entries[3], &entries[4]) {
        (MenuEntry::Source(first), MenuEntry::Source(second)) => {
            assert_eq!(first.key, "nuget.org");
            assert_eq!(second.key, "local");
        }
        other => panic!("expected two source entries, got {other:?}"),
    }
}

#[test]
fn test_option_indices_resolve_to_toggles() {
    let dir = TempDir::new().unwrap();
    let menu = build(&dir, TWO_SOURCES);

    assert_eq!(
        resolver::resolve(&menu, 0, "pkg").unwrap(),
        Action::Toggle(OptionFlag::UseVersionedPackages)
    );
    assert_eq!(
        resolver::resolve(&menu, 1, "pkg").unwrap(),
        Action::Toggle(OptionFlag::GetLatest)
    );
    assert_eq!(
        resolver::resolve(&menu, 2, "pkg").unwrap(),
        Action::Toggle(OptionFlag::CleanPackages)
    );
}

#[test]
fn test_source_index_resolves_to_fetch_with_default_modifiers() {
    let dir = TempDir::new().unwrap();
    let menu = build(&dir, TWO_SOURCES);

    // Defaults are false/true/true: -x applies because the versioned-
    // packages flag is off, -latest and -clean because theirs are on
    let action = resolver::resolve(&menu, 4, "Newtonsoft.Json").unwrap();
    let Action::Fetch(fetch) = action else {
        panic!("expected a fetch action");
    };
    assert_eq!(fetch.source, "https://b");
    assert_eq!(
        fetch.to_cli_args(),
        vec!["get", "Newtonsoft.Json", "-s", "https://b", "-x", "-latest", "-clean"]
    );
}

#[test]
fn test_stale_index_is_out_of_range() {
    let dir = TempDir::new().unwrap();
    let menu = build(&dir, TWO_SOURCES);

    let err = resolver::resolve(&menu, 5, "pkg").unwrap_err();
    assert!(matches!(
        err,
        MenuError::IndexOutOfRange { index: 5, len: 5 }
    ));
}

#[test]
fn test_disabled_source_shifts_indices() {
    let dir = TempDir::new().unwrap();
    let menu = build(
        &dir,
        r#"{
            "packageSources": [
                { "key": "a", "value": "u1" },
                { "key": "b", "value": "u2" },
                { "key": "c", "value": "u3" }
            ],
            "disabledPackageSources": [
                { "key": "b", "value": "true" }
            ]
        }"#,
    );

    assert_eq!(menu.entry_count(), 5);
    let action = resolver::resolve(&menu, 4, "pkg").unwrap();
    let Action::Fetch(fetch) = action else {
        panic!("expected a fetch action");
    };
    assert_eq!(fetch.source, "u3");
}

#[test]
fn test_build_fails_when_sources_document_missing() {
    let dir = TempDir::new().unwrap();
    let catalog = SourceCatalog::new(dir.path().join("nowhere.json"));
    let store = OptionStore::new(dir.path().join("ContextMenu.json"));
    let err = MenuModel::build(&catalog, &store).unwrap_err();
    assert!(matches!(err, MenuError::ConfigNotFound(_)));
}

#[test]
fn test_on_select_applies_and_persists_toggles() {
    let dir = TempDir::new().unwrap();
    let (sources_path, options_path) = write_documents(&dir, TWO_SOURCES);
    let handler = ContextMenu::new(sources_path, options_path);

    let action = handler.on_select(1, "pkg").unwrap();
    assert_eq!(action, Action::Toggle(OptionFlag::GetLatest));
    assert!(!handler.store().option(OptionFlag::GetLatest).unwrap());
}

#[test]
fn test_fetch_modifiers_follow_toggled_options() {
    let dir = TempDir::new().unwrap();
    let (sources_path, options_path) = write_documents(&dir, TWO_SOURCES);
    let handler = ContextMenu::new(sources_path, options_path);

    // Bootstrap, then flip getLatest off and useVersionedPackages on
    handler.on_select(1, "pkg").unwrap();
    handler.on_select(0, "pkg").unwrap();

    let action = handler.on_select(3, "pkg").unwrap();
    let Action::Fetch(fetch) = action else {
        panic!("expected a fetch action");
    };
    assert_eq!(fetch.source, "https://a");
    assert_eq!(fetch.to_cli_args(), vec!["get", "pkg", "-s", "https://a", "-clean"]);
}

#[test]
fn test_on_select_fails_fast_after_source_list_shrinks() {
    let dir = TempDir::new().unwrap();
    let (sources_path, options_path) = write_documents(&dir, TWO_SOURCES);
    let handler = ContextMenu::new(&sources_path, options_path);

    // The user saw a 5-entry menu
    assert_eq!(handler.build_menu().unwrap().entry_count(), 5);

    // A source disappears before the selection lands
    fs::write(
        &sources_path,
        r#"{
            "packageSources": [ { "key": "nuget.org", "value": "https://a" } ],
            "disabledPackageSources": []
        }"#,
    )
    .unwrap();

    let err = handler.on_select(4, "pkg").unwrap_err();
    assert!(matches!(err, MenuError::IndexOutOfRange { index: 4, len: 4 }));
}

#[test]
fn test_failed_select_performs_no_toggle() {
    let dir = TempDir::new().unwrap();
    let (sources_path, options_path) = write_documents(&dir, TWO_SOURCES);
    let handler = ContextMenu::new(sources_path, options_path);

    let before = handler.build_menu().unwrap().options();
    assert!(handler.on_select(99, "pkg").is_err());
    assert_eq!(handler.build_menu().unwrap().options(), before);
}
