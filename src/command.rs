//! Slash-command detection and palette filtering.
//!
//! All functions here are pure over the catalog and the current input text;
//! palette visibility is derived, never stored.

use crate::catalog::{Preset, PresetCatalog};

/// The character that switches the input box into command mode.
pub const TRIGGER: char = '/';

/// True iff `text` is non-empty and starts with the trigger character.
pub fn is_command_mode(text: &str) -> bool {
    text.starts_with(TRIGGER)
}

/// Presets matching the in-progress command text, in catalog order.
///
/// Outside command mode this is empty. The search term is the text after the
/// trigger, lowercased; a preset matches when its lowercased slash command or
/// lowercased name contains the term. An empty term matches everything, so
/// the palette shows the full catalog right after typing the trigger.
pub fn filter_presets<'a>(catalog: &'a PresetCatalog, text: &str) -> Vec<&'a Preset> {
    if !is_command_mode(text) {
        return Vec::new();
    }

    let term = text[TRIGGER.len_utf8()..].to_lowercase();
    catalog
        .presets()
        .iter()
        .filter(|preset| {
            preset.slash_command().to_lowercase().contains(&term)
                || preset.name().to_lowercase().contains(&term)
        })
        .collect()
}

/// The auto-select fast path: the whole input equals a preset's slash command.
///
/// Both sides are lowercased, so typed case never affects the outcome. Checked
/// on every text change, independent of palette visibility.
pub fn exact_match<'a>(catalog: &'a PresetCatalog, text: &str) -> Option<&'a Preset> {
    if !is_command_mode(text) {
        return None;
    }

    let typed = text.to_lowercase();
    catalog
        .presets()
        .iter()
        .find(|preset| preset.slash_command().to_lowercase() == typed)
}

/// Whether the palette should be on screen for this text.
pub fn palette_visible(catalog: &PresetCatalog, text: &str) -> bool {
    !filter_presets(catalog, text).is_empty()
}
