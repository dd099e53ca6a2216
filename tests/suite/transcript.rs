//! Transcript store behavior and free-text sends.

use crate::common::{builtin_app, type_text};
use drafter::message::{Transcript, TranscriptEntry, user_entry};

#[test]
fn entries_keep_insertion_order() {
    let mut transcript = Transcript::new();
    transcript.append([TranscriptEntry::new("a").unwrap()]);
    transcript.append([
        TranscriptEntry::new("b").unwrap(),
        TranscriptEntry::new("c").unwrap(),
    ]);

    let texts: Vec<&str> = transcript.entries().iter().map(AsRef::as_ref).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn free_text_send_appends_one_wrapped_entry_and_clears() {
    let mut app = builtin_app();
    type_text(&mut app, "hello");
    app.send_message();

    assert_eq!(app.transcript().len(), 1);
    assert_eq!(app.transcript().entries()[0].as_str(), "User: hello");
    assert_eq!(app.draft_text(), "");
}

#[test]
fn blank_sends_append_nothing() {
    let mut app = builtin_app();
    app.send_message();
    assert!(app.transcript().is_empty());

    type_text(&mut app, "   ");
    app.send_message();
    assert!(app.transcript().is_empty());
    // A blank draft that went nowhere is not cleared silently either way;
    // nothing was appended, which is the contract.
}

#[test]
fn command_mode_text_is_never_sent() {
    let mut app = builtin_app();
    type_text(&mut app, "/zzzznotreal");
    app.send_message();
    assert!(app.transcript().is_empty());
    assert_eq!(app.draft_text(), "/zzzznotreal");
}

#[test]
fn user_entry_rejects_blank_text() {
    assert!(user_entry("").is_err());
    assert!(user_entry("  \t ").is_err());
}
