//! Command matcher properties over the built-in catalog.

use drafter::catalog::PresetCatalog;
use drafter::command::{exact_match, filter_presets, is_command_mode};

#[test]
fn every_preset_matches_its_own_slash_command() {
    let catalog = PresetCatalog::builtin();
    for preset in catalog.presets() {
        let matches = filter_presets(&catalog, preset.slash_command());
        assert!(
            matches.iter().any(|m| m.id() == preset.id()),
            "{} did not match itself",
            preset.slash_command()
        );
    }
}

#[test]
fn bare_trigger_returns_full_catalog_in_order() {
    let catalog = PresetCatalog::builtin();
    let matches = filter_presets(&catalog, "/");
    let expected: Vec<&str> = catalog.presets().iter().map(|p| p.id()).collect();
    let actual: Vec<&str> = matches.iter().map(|p| p.id()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn command_mode_truth_table() {
    assert!(is_command_mode("/"));
    assert!(is_command_mode("/x"));
    assert!(!is_command_mode(""));
    assert!(!is_command_mode("x/"));
    assert!(!is_command_mode("hello"));
}

#[test]
fn name_substring_matches_without_command_substring() {
    let catalog = PresetCatalog::builtin();
    // "notes" appears in the "Presenter Notes" and "Release Notes" names
    // but in no slash command.
    let matches = filter_presets(&catalog, "/notes");
    let names: Vec<&str> = matches.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Presenter Notes", "Release Notes"]);
}

#[test]
fn matching_folds_case_on_both_sides() {
    let catalog = PresetCatalog::builtin();
    assert_eq!(filter_presets(&catalog, "/RELEASE").len(), 1);
    assert_eq!(
        exact_match(&catalog, "/Release").map(|p| p.id()),
        Some("4")
    );
}

#[test]
fn exact_match_requires_the_whole_command() {
    let catalog = PresetCatalog::builtin();
    assert!(exact_match(&catalog, "/rel").is_none());
    assert!(exact_match(&catalog, "/release ").is_none());
    assert_eq!(exact_match(&catalog, "/release").map(|p| p.id()), Some("4"));
}

#[test]
fn unknown_command_matches_nothing() {
    let catalog = PresetCatalog::builtin();
    assert!(filter_presets(&catalog, "/zzzznotreal").is_empty());
}
