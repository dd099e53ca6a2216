//! End-to-end session transitions through the input-box state machine.

use crate::common::{app_with, builtin_app, small_catalog, type_text};
use drafter::app::Focus;
use drafter::picker::DocumentPicker;

#[test]
fn partial_command_shows_palette_and_selection_opens_form() {
    let mut app = builtin_app();
    type_text(&mut app, "/rel");

    assert_eq!(app.focus(), Focus::Compose);
    assert!(app.palette_visible());
    let names: Vec<&str> = app.palette_matches().iter().map(|p| p.name()).collect();
    assert!(names.contains(&"Release Notes"));

    app.palette_select();
    assert_eq!(app.focus(), Focus::Form);
    assert_eq!(app.form().unwrap().preset().name(), "Release Notes");
    // Opening the form clears the input box.
    assert_eq!(app.draft_text(), "");
}

#[test]
fn filling_and_submitting_appends_exact_entries() {
    let mut app = builtin_app();
    type_text(&mut app, "/rel");
    app.palette_select();

    for c in "Fixed bugs".chars() {
        app.form_char(c);
    }
    app.submit_form();

    assert_eq!(app.focus(), Focus::Compose);
    let texts: Vec<&str> = app.transcript().entries().iter().map(AsRef::as_ref).collect();
    assert_eq!(
        texts,
        vec![
            "Used preset: Release Notes",
            "Could you please provide a short description of what is in the release?\nAnswer: Fixed bugs",
        ]
    );
}

#[test]
fn exact_slash_command_auto_opens_the_form() {
    let mut app = builtin_app();
    type_text(&mut app, "/release");

    assert_eq!(app.focus(), Focus::Form);
    assert_eq!(app.form().unwrap().preset().id(), "4");
}

#[test]
fn exact_match_ignores_typed_case() {
    let mut app = builtin_app();
    type_text(&mut app, "/Release");

    assert_eq!(app.focus(), Focus::Form);
    assert_eq!(app.form().unwrap().preset().id(), "4");
}

#[test]
fn no_matches_hides_the_palette() {
    let mut app = builtin_app();
    type_text(&mut app, "/zzzznotreal");

    assert!(!app.palette_visible());
    assert!(app.palette_matches().is_empty());
}

#[test]
fn deleting_the_trigger_leaves_command_mode() {
    let mut app = builtin_app();
    type_text(&mut app, "/rel");
    assert!(app.palette_visible());

    app.compose_clear();
    assert!(!app.palette_visible());
    assert_eq!(app.draft_text(), "");
}

#[test]
fn cancel_discards_the_form_and_its_answers() {
    let mut app = builtin_app();
    type_text(&mut app, "/release");
    for c in "half-typed".chars() {
        app.form_char(c);
    }

    app.cancel_form();
    assert_eq!(app.focus(), Focus::Compose);
    assert!(app.transcript().is_empty());

    // Reopening starts a fresh session.
    type_text(&mut app, "/release");
    assert_eq!(app.form().unwrap().value("description"), "");
}

#[test]
fn palette_selection_wraps_and_tracks_matches() {
    let mut app = builtin_app();
    type_text(&mut app, "/");
    assert_eq!(app.palette_selected(), 0);

    app.palette_prev();
    assert_eq!(app.palette_selected(), app.palette_matches().len() - 1);
    app.palette_next();
    assert_eq!(app.palette_selected(), 0);

    // Narrowing the matches clamps the selection.
    app.palette_prev();
    type_text(&mut app, "rel");
    assert!(app.palette_selected() < app.palette_matches().len());
}

#[test]
fn browser_is_reachable_without_command_mode() {
    let mut app = builtin_app();
    app.open_browser();
    assert_eq!(app.focus(), Focus::Browser);

    // Category order: Recents, then Native, then Community.
    let first = app.browser_matches()[0];
    assert_eq!(first.category().label(), "Recents");
    let first_name = first.name().to_string();

    app.browser_select();
    assert_eq!(app.focus(), Focus::Form);
    assert_eq!(app.form().unwrap().preset().name(), first_name);
}

#[test]
fn browser_filter_narrows_by_name_or_command() {
    let mut app = builtin_app();
    app.open_browser();
    for c in "translate".chars() {
        app.browser_char(c);
    }

    let names: Vec<&str> = app.browser_matches().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Translation"]);

    app.browser_cancel();
    assert_eq!(app.focus(), Focus::Compose);
}

#[test]
fn document_field_goes_through_the_picker() {
    let mut app = app_with(small_catalog());
    type_text(&mut app, "/attach");
    assert_eq!(app.focus(), Focus::Form);

    app.open_picker(DocumentPicker::from_names(vec![
        "contract.pdf".to_string(),
        "notes.txt".to_string(),
    ]));
    assert_eq!(app.focus(), Focus::Picker);

    for c in "notes".chars() {
        app.picker_char(c);
    }
    app.picker_select();

    assert_eq!(app.focus(), Focus::Form);
    assert_eq!(app.form().unwrap().value("file"), "notes.txt");
}

#[test]
fn picker_cancel_keeps_the_form_open_unanswered() {
    let mut app = app_with(small_catalog());
    type_text(&mut app, "/attach");
    app.open_picker(DocumentPicker::from_names(vec!["a.txt".to_string()]));

    app.picker_cancel();
    assert_eq!(app.focus(), Focus::Form);
    assert_eq!(app.form().unwrap().value("file"), "");
}

#[test]
fn option_field_cycles_through_declared_choices() {
    let mut app = app_with(small_catalog());
    type_text(&mut app, "/attach");
    app.form_focus_next(); // move to the "mode" options field

    app.form_cycle_option(1);
    assert_eq!(app.form().unwrap().value("mode"), "fast");
    app.form_cycle_option(1);
    assert_eq!(app.form().unwrap().value("mode"), "careful");
}

#[test]
fn submitting_with_gaps_records_empty_answers() {
    let mut app = app_with(small_catalog());
    type_text(&mut app, "/attach");
    app.submit_form();

    let texts: Vec<&str> = app.transcript().entries().iter().map(AsRef::as_ref).collect();
    assert_eq!(
        texts,
        vec![
            "Used preset: Attach",
            "Pick a file\nAnswer: ",
            "Pick a mode\nAnswer: ",
        ]
    );
}
