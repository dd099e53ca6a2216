//! Form session and formatter properties.

use drafter::catalog::PresetCatalog;
use drafter::form::FormState;
use drafter::message::format_submission;

fn release_notes() -> drafter::catalog::Preset {
    PresetCatalog::builtin()
        .presets()
        .iter()
        .find(|p| p.id() == "4")
        .cloned()
        .expect("built-in catalog has preset 4")
}

#[test]
fn open_form_starts_unanswered() {
    let form = FormState::open(&release_notes());
    assert_eq!(form.value("description"), "");
}

#[test]
fn set_value_is_last_write_wins() {
    let preset = release_notes();
    let mut twice = FormState::open(&preset);
    twice.set_value("description", "a");
    twice.set_value("description", "b");

    let mut once = FormState::open(&preset);
    once.set_value("description", "b");

    assert_eq!(twice.value("description"), once.value("description"));
}

#[test]
fn submission_round_trip_covers_every_field() {
    let catalog = PresetCatalog::builtin();
    for preset in catalog.presets() {
        let mut form = FormState::open(preset);
        for (i, field) in preset.fields().iter().enumerate() {
            form.set_value(field.name(), format!("answer-{i}"));
        }

        let lines = format_submission(&form);
        assert_eq!(lines.len(), 1 + preset.fields().len());
        assert_eq!(lines[0].as_str(), format!("Used preset: {}", preset.name()));
        for (i, field) in preset.fields().iter().enumerate() {
            assert_eq!(
                lines[i + 1].as_str(),
                format!("{}\nAnswer: answer-{i}", field.question())
            );
        }
    }
}

#[test]
fn unanswered_fields_submit_as_empty_answers() {
    let preset = release_notes();
    let form = FormState::open(&preset);

    let lines = format_submission(&form);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1].as_str(),
        "Could you please provide a short description of what is in the release?\nAnswer: "
    );
}
