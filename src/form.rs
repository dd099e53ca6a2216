//! Form sessions: one per selected preset, collecting answers by field name.

use std::collections::HashMap;

use crate::catalog::{FieldKind, FieldSpec, Preset};

/// Transient state of an open form dialog.
///
/// Values are keyed by field name; a missing key means "unanswered" and reads
/// as the empty string. No validation happens before submit — any field may be
/// left blank, and option fields are offered choices, not constrained to them.
#[derive(Debug, Clone)]
pub struct FormState {
    preset: Preset,
    values: HashMap<String, String>,
    focused: usize,
}

impl FormState {
    /// Start a fresh session for `preset` with an empty answer map.
    pub fn open(preset: &Preset) -> Self {
        Self {
            preset: preset.clone(),
            values: HashMap::new(),
            focused: 0,
        }
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// The recorded answer for a field, empty string when unanswered.
    pub fn value(&self, field_name: &str) -> &str {
        self.values.get(field_name).map_or("", String::as_str)
    }

    /// Record (or overwrite) an answer. Last write wins; other keys are
    /// untouched.
    pub fn set_value(&mut self, field_name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field_name.into(), value.into());
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&FieldSpec> {
        self.preset.fields().get(self.focused)
    }

    pub fn focus_next(&mut self) {
        let count = self.preset.fields().len();
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.preset.fields().len();
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
        }
    }

    /// Append a character to the focused field's answer. Only meaningful for
    /// text fields; other kinds ignore typed characters.
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !matches!(field.kind(), FieldKind::Text) {
            return;
        }
        let name = field.name().to_string();
        self.values.entry(name).or_default().push(c);
    }

    /// Delete the last character of the focused field's answer.
    pub fn pop_char(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !matches!(field.kind(), FieldKind::Text) {
            return;
        }
        let name = field.name().to_string();
        if let Some(value) = self.values.get_mut(&name) {
            value.pop();
        }
    }

    /// Step the focused option field through its declared choices.
    ///
    /// `step` is +1 / -1. Starting from an unanswered (or off-list) value the
    /// first step selects the first choice.
    pub fn cycle_option(&mut self, step: isize) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let FieldKind::Options(choices) = field.kind() else {
            return;
        };
        if choices.is_empty() {
            return;
        }

        let current = self.value(field.name());
        let next = match choices.iter().position(|c| c == current) {
            Some(idx) => {
                let len = choices.len() as isize;
                ((idx as isize + step).rem_euclid(len)) as usize
            }
            None => 0,
        };

        let name = field.name().to_string();
        let choice = choices[next].clone();
        self.values.insert(name, choice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, FieldKind, FieldSpec, Preset};

    fn preset() -> Preset {
        Preset::new(
            "t",
            "Test",
            Category::Native,
            "/test",
            vec![
                FieldSpec::new("text", "Text?", FieldKind::Text),
                FieldSpec::new("pick", "Pick?", FieldKind::options(&["a", "b", "c"])),
                FieldSpec::new("doc", "Doc?", FieldKind::Document),
            ],
        )
    }

    #[test]
    fn opens_with_empty_values() {
        let form = FormState::open(&preset());
        assert_eq!(form.value("text"), "");
        assert_eq!(form.value("missing"), "");
        assert_eq!(form.focused(), 0);
    }

    #[test]
    fn last_write_wins() {
        let mut form = FormState::open(&preset());
        form.set_value("text", "a");
        form.set_value("text", "b");
        assert_eq!(form.value("text"), "b");

        let mut direct = FormState::open(&preset());
        direct.set_value("text", "b");
        assert_eq!(form.value("text"), direct.value("text"));
    }

    #[test]
    fn set_value_leaves_other_keys_alone() {
        let mut form = FormState::open(&preset());
        form.set_value("text", "kept");
        form.set_value("pick", "a");
        assert_eq!(form.value("text"), "kept");
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = FormState::open(&preset());
        form.focus_prev();
        assert_eq!(form.focused(), 2);
        form.focus_next();
        assert_eq!(form.focused(), 0);
    }

    #[test]
    fn typing_only_affects_text_fields() {
        let mut form = FormState::open(&preset());
        form.push_char('h');
        form.push_char('i');
        assert_eq!(form.value("text"), "hi");
        form.pop_char();
        assert_eq!(form.value("text"), "h");

        form.focus_next(); // options field
        form.push_char('x');
        assert_eq!(form.value("pick"), "");
    }

    #[test]
    fn option_cycling_walks_declared_choices() {
        let mut form = FormState::open(&preset());
        form.focus_next();
        form.cycle_option(1);
        assert_eq!(form.value("pick"), "a");
        form.cycle_option(1);
        assert_eq!(form.value("pick"), "b");
        form.cycle_option(-1);
        assert_eq!(form.value("pick"), "a");
        form.cycle_option(-1);
        assert_eq!(form.value("pick"), "c");
    }

    #[test]
    fn off_list_value_resets_to_first_choice() {
        let mut form = FormState::open(&preset());
        form.set_value("pick", "nonsense");
        form.focus_next();
        form.cycle_option(1);
        assert_eq!(form.value("pick"), "a");
    }
}
