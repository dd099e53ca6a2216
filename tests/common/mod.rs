//! Shared test fixtures.

#![allow(dead_code)]

use drafter::app::App;
use drafter::catalog::{Category, FieldKind, FieldSpec, Preset, PresetCatalog};
use drafter::config::DrafterConfig;

/// App over the built-in catalog with default config.
pub fn builtin_app() -> App {
    App::new(PresetCatalog::builtin(), &DrafterConfig::default())
}

/// App over an arbitrary injected catalog.
pub fn app_with(catalog: PresetCatalog) -> App {
    App::new(catalog, &DrafterConfig::default())
}

/// A two-preset catalog that exercises every field kind.
pub fn small_catalog() -> PresetCatalog {
    PresetCatalog::new(vec![
        Preset::new(
            "n1",
            "Note",
            Category::Recents,
            "/note",
            vec![FieldSpec::new("body", "What should the note say?", FieldKind::Text)],
        ),
        Preset::new(
            "n2",
            "Attach",
            Category::Native,
            "/attach",
            vec![
                FieldSpec::new("file", "Pick a file", FieldKind::Document),
                FieldSpec::new(
                    "mode",
                    "Pick a mode",
                    FieldKind::options(&["fast", "careful"]),
                ),
            ],
        ),
    ])
}

/// Feed text into the composer one character at a time, the way key events
/// arrive.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.compose_char(c);
    }
}
