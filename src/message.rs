//! The transcript: an ordered, append-only sequence of display strings.

use thiserror::Error;

use crate::form::FormState;

#[derive(Debug, Error)]
#[error("transcript entries must not be blank")]
pub struct BlankEntryError;

/// An immutable, non-blank display string.
///
/// Non-blankness is checked at construction so rendering never has to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry(String);

impl TranscriptEntry {
    pub fn new(value: impl Into<String>) -> Result<Self, BlankEntryError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(BlankEntryError)
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TranscriptEntry {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Append-only store of transcript entries. Insertion order is display order;
/// nothing is ever removed or edited.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entries: impl IntoIterator<Item = TranscriptEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Wrap free text typed outside command mode as a user entry.
///
/// Blank or whitespace-only text yields an error; the caller treats that as a
/// no-op rather than a failure.
pub fn user_entry(text: &str) -> Result<TranscriptEntry, BlankEntryError> {
    if text.trim().is_empty() {
        return Err(BlankEntryError);
    }
    TranscriptEntry::new(format!("User: {text}"))
}

/// Convert a completed form into its transcript lines.
///
/// One header line, then one question/answer line per field in declared
/// order. Unanswered fields read as empty answers; submission is total.
pub fn format_submission(form: &FormState) -> Vec<TranscriptEntry> {
    let preset = form.preset();
    let mut lines = Vec::with_capacity(1 + preset.fields().len());

    // Header and questions are non-blank by catalog construction.
    lines.extend(TranscriptEntry::new(format!("Used preset: {}", preset.name())));

    for field in preset.fields() {
        let answer = form.value(field.name());
        lines.extend(TranscriptEntry::new(format!(
            "{}\nAnswer: {answer}",
            field.question()
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_entries_are_rejected() {
        assert!(TranscriptEntry::new("").is_err());
        assert!(TranscriptEntry::new("   ").is_err());
        assert!(TranscriptEntry::new("hello").is_ok());
    }

    #[test]
    fn append_preserves_relative_order() {
        let mut transcript = Transcript::new();
        transcript.append([
            TranscriptEntry::new("one").unwrap(),
            TranscriptEntry::new("two").unwrap(),
        ]);
        transcript.append([TranscriptEntry::new("three").unwrap()]);

        let texts: Vec<&str> = transcript.entries().iter().map(AsRef::as_ref).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn user_entry_wraps_text() {
        assert_eq!(user_entry("hello").unwrap().as_str(), "User: hello");
        assert!(user_entry("   ").is_err());
    }
}
