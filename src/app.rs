use std::path::PathBuf;

use crate::catalog::{Category, Preset, PresetCatalog};
use crate::command;
use crate::config::DrafterConfig;
use crate::form::FormState;
use crate::message::{Transcript, user_entry};
use crate::picker::DocumentPicker;
use crate::theme::Palette;

/// Which surface currently receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Compose,
    Form,
    Picker,
    Browser,
}

/// Single-line editable text with a char-indexed cursor.
#[derive(Debug, Default)]
struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    fn text(&self) -> &str {
        &self.text
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        self.cursor = self
            .cursor
            .saturating_add(1)
            .min(self.text.chars().count());
    }

    fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let before = self.text.chars().take(self.cursor - 1);
        let after = self.text.chars().skip(self.cursor);
        self.text = before.chain(after).collect();
        self.move_cursor_left();
    }

    fn delete_char_forward(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let before = self.text.chars().take(self.cursor);
        let after = self.text.chars().skip(self.cursor + 1);
        self.text = before.chain(after).collect();
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn move_cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }
}

/// File-picker overlay attached to one document-typed field.
#[derive(Debug)]
struct PickerSession {
    field: String,
    picker: DocumentPicker,
    filter: DraftInput,
    selected: usize,
}

/// An open form dialog, possibly with the file picker on top.
#[derive(Debug)]
struct FormSession {
    form: FormState,
    picker: Option<PickerSession>,
}

/// The always-available preset browser.
#[derive(Debug, Default)]
struct BrowserState {
    filter: DraftInput,
    selected: usize,
}

/// Input-box state machine.
///
/// Command mode is not a stored state: it is `Compose` whose draft starts
/// with the trigger, and palette visibility is recomputed from the text on
/// every render. Leaving command mode therefore hides the palette
/// unconditionally.
#[derive(Debug)]
enum InputState {
    Compose {
        draft: DraftInput,
        palette_selected: usize,
    },
    Form(FormSession),
    Browser(BrowserState),
}

impl Default for InputState {
    fn default() -> Self {
        Self::Compose {
            draft: DraftInput::default(),
            palette_selected: 0,
        }
    }
}

/// Application state: one session over one transcript.
pub struct App {
    catalog: PresetCatalog,
    transcript: Transcript,
    input: InputState,
    theme: Palette,
    show_document_pane: bool,
    picker_root: PathBuf,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Build an app over an injected catalog. Alternate catalogs slot in
    /// here without touching matcher or form logic.
    pub fn new(catalog: PresetCatalog, config: &DrafterConfig) -> Self {
        Self {
            catalog,
            transcript: Transcript::new(),
            input: InputState::default(),
            theme: config.palette(),
            show_document_pane: config.document_pane(),
            picker_root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn theme(&self) -> &Palette {
        &self.theme
    }

    pub fn show_document_pane(&self) -> bool {
        self.show_document_pane
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Override where the document picker scans. Defaults to the working
    /// directory.
    pub fn set_picker_root(&mut self, root: PathBuf) {
        self.picker_root = root;
    }

    pub fn focus(&self) -> Focus {
        match &self.input {
            InputState::Compose { .. } => Focus::Compose,
            InputState::Form(session) if session.picker.is_some() => Focus::Picker,
            InputState::Form(_) => Focus::Form,
            InputState::Browser(_) => Focus::Browser,
        }
    }

    // === Compose mode ===

    pub fn draft_text(&self) -> &str {
        match &self.input {
            InputState::Compose { draft, .. } => draft.text(),
            _ => "",
        }
    }

    pub fn draft_cursor(&self) -> usize {
        match &self.input {
            InputState::Compose { draft, .. } => draft.cursor(),
            _ => 0,
        }
    }

    pub fn compose_char(&mut self, c: char) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.enter_char(c);
            self.after_text_change();
        }
    }

    pub fn compose_backspace(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.delete_char();
            self.after_text_change();
        }
    }

    pub fn compose_delete_forward(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.delete_char_forward();
            self.after_text_change();
        }
    }

    pub fn compose_cursor_left(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.move_cursor_left();
        }
    }

    pub fn compose_cursor_right(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.move_cursor_right();
        }
    }

    pub fn compose_cursor_home(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.reset_cursor();
        }
    }

    pub fn compose_cursor_end(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.move_cursor_end();
        }
    }

    pub fn compose_clear(&mut self) {
        if let InputState::Compose { draft, .. } = &mut self.input {
            draft.clear();
            self.after_text_change();
        }
    }

    /// Runs after every draft edit: the exact-match fast path opens the form
    /// directly, otherwise the palette selection is clamped to the new match
    /// list.
    fn after_text_change(&mut self) {
        let text = self.draft_text().to_string();

        if let Some(preset) = command::exact_match(&self.catalog, &text) {
            let preset = preset.clone();
            tracing::debug!(preset = preset.id(), "slash command exact match");
            self.open_form(preset);
            return;
        }

        let match_count = command::filter_presets(&self.catalog, &text).len();
        if let InputState::Compose {
            palette_selected, ..
        } = &mut self.input
        {
            *palette_selected = (*palette_selected).min(match_count.saturating_sub(1));
        }
    }

    /// Presets the palette currently offers, in catalog order.
    pub fn palette_matches(&self) -> Vec<&Preset> {
        command::filter_presets(&self.catalog, self.draft_text())
    }

    pub fn palette_visible(&self) -> bool {
        !self.palette_matches().is_empty()
    }

    pub fn palette_selected(&self) -> usize {
        match &self.input {
            InputState::Compose {
                palette_selected, ..
            } => *palette_selected,
            _ => 0,
        }
    }

    pub fn palette_next(&mut self) {
        let count = self.palette_matches().len();
        if let InputState::Compose {
            palette_selected, ..
        } = &mut self.input
            && count > 0
        {
            *palette_selected = (*palette_selected + 1) % count;
        }
    }

    pub fn palette_prev(&mut self) {
        let count = self.palette_matches().len();
        if let InputState::Compose {
            palette_selected, ..
        } = &mut self.input
            && count > 0
        {
            *palette_selected = (*palette_selected + count - 1) % count;
        }
    }

    /// Open the form for the highlighted palette row.
    pub fn palette_select(&mut self) {
        let selected = self.palette_selected();
        let preset = self.palette_matches().get(selected).copied().cloned();
        if let Some(preset) = preset {
            self.open_form(preset);
        }
    }

    /// Send the draft as a free-text message.
    ///
    /// Blank or whitespace-only text, and text still in command mode, append
    /// nothing; the draft is only cleared when an entry was actually added.
    pub fn send_message(&mut self) {
        let text = self.draft_text();
        if command::is_command_mode(text) {
            return;
        }
        match user_entry(text) {
            Ok(entry) => {
                self.transcript.append([entry]);
                if let InputState::Compose { draft, .. } = &mut self.input {
                    draft.take_text();
                }
            }
            Err(_) => {
                // Blank sends are a no-op, not an error.
            }
        }
    }

    // === Form dialog ===

    /// Open the form dialog for a preset, clearing the input box.
    pub fn open_form(&mut self, preset: Preset) {
        self.input = InputState::Form(FormSession {
            form: FormState::open(&preset),
            picker: None,
        });
        self.clear_status();
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.input {
            InputState::Form(session) => Some(&session.form),
            _ => None,
        }
    }

    fn form_session_mut(&mut self) -> Option<&mut FormSession> {
        match &mut self.input {
            InputState::Form(session) => Some(session),
            _ => None,
        }
    }

    pub fn form_char(&mut self, c: char) {
        if let Some(session) = self.form_session_mut() {
            session.form.push_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(session) = self.form_session_mut() {
            session.form.pop_char();
        }
    }

    pub fn form_focus_next(&mut self) {
        if let Some(session) = self.form_session_mut() {
            session.form.focus_next();
        }
    }

    pub fn form_focus_prev(&mut self) {
        if let Some(session) = self.form_session_mut() {
            session.form.focus_prev();
        }
    }

    pub fn form_cycle_option(&mut self, step: isize) {
        if let Some(session) = self.form_session_mut() {
            session.form.cycle_option(step);
        }
    }

    /// Enter on a form: document-typed fields open the file picker, anything
    /// else submits.
    pub fn form_activate(&mut self) {
        let wants_file = self
            .form()
            .and_then(FormState::focused_field)
            .is_some_and(|field| field.kind().wants_file());

        if wants_file {
            let root = self.picker_root.clone();
            self.open_picker(DocumentPicker::scan(&root));
        } else {
            self.submit_form();
        }
    }

    /// Flush the form into the transcript and close the dialog.
    ///
    /// Always succeeds; unanswered fields are recorded as empty answers.
    pub fn submit_form(&mut self) {
        let Some(session) = self.form_session_mut() else {
            return;
        };
        let entries = crate::message::format_submission(&session.form);
        let name = session.form.preset().name().to_string();
        self.transcript.append(entries);
        self.input = InputState::default();
        self.set_status(format!("Applied preset: {name}"));
    }

    /// Close the dialog without submitting; the session is discarded whole.
    pub fn cancel_form(&mut self) {
        if matches!(self.input, InputState::Form(_)) {
            self.input = InputState::default();
        }
    }

    // === File picker overlay ===

    /// Attach a picker to the focused document field. Exposed so tests can
    /// inject a fixed file list instead of scanning a directory.
    pub fn open_picker(&mut self, picker: DocumentPicker) {
        let Some(session) = self.form_session_mut() else {
            return;
        };
        let Some(field) = session.form.focused_field() else {
            return;
        };
        if !field.kind().wants_file() {
            return;
        }
        session.picker = Some(PickerSession {
            field: field.name().to_string(),
            picker,
            filter: DraftInput::default(),
            selected: 0,
        });
    }

    pub fn picker_filter(&self) -> &str {
        match &self.input {
            InputState::Form(FormSession {
                picker: Some(picker),
                ..
            }) => picker.filter.text(),
            _ => "",
        }
    }

    pub fn picker_visible_files(&self) -> Vec<&str> {
        match &self.input {
            InputState::Form(FormSession {
                picker: Some(picker),
                ..
            }) => picker.picker.visible().collect(),
            _ => Vec::new(),
        }
    }

    pub fn picker_selected(&self) -> usize {
        match &self.input {
            InputState::Form(FormSession {
                picker: Some(picker),
                ..
            }) => picker.selected,
            _ => 0,
        }
    }

    fn picker_session_mut(&mut self) -> Option<&mut PickerSession> {
        match &mut self.input {
            InputState::Form(session) => session.picker.as_mut(),
            _ => None,
        }
    }

    pub fn picker_char(&mut self, c: char) {
        if let Some(picker) = self.picker_session_mut() {
            picker.filter.enter_char(c);
            let filter = picker.filter.text().to_string();
            picker.picker.set_filter(&filter);
            picker.selected = 0;
        }
    }

    pub fn picker_backspace(&mut self) {
        if let Some(picker) = self.picker_session_mut() {
            picker.filter.delete_char();
            let filter = picker.filter.text().to_string();
            picker.picker.set_filter(&filter);
            picker.selected = 0;
        }
    }

    pub fn picker_next(&mut self) {
        if let Some(picker) = self.picker_session_mut() {
            let count = picker.picker.visible_count();
            if count > 0 {
                picker.selected = (picker.selected + 1) % count;
            }
        }
    }

    pub fn picker_prev(&mut self) {
        if let Some(picker) = self.picker_session_mut() {
            let count = picker.picker.visible_count();
            if count > 0 {
                picker.selected = (picker.selected + count - 1) % count;
            }
        }
    }

    /// Record the highlighted file's name as the field's answer and close
    /// the picker. Only the name is recorded; contents are never read.
    pub fn picker_select(&mut self) {
        let Some(picker) = self.picker_session_mut() else {
            return;
        };
        let Some(picked) = picker.picker.pick(picker.selected) else {
            return;
        };
        let field = picker.field.clone();

        if let Some(session) = self.form_session_mut() {
            session.form.set_value(field, picked.name);
            session.picker = None;
        }
    }

    pub fn picker_cancel(&mut self) {
        if let Some(session) = self.form_session_mut() {
            session.picker = None;
        }
    }

    // === Preset browser ===

    /// Open the always-available preset browser.
    pub fn open_browser(&mut self) {
        self.input = InputState::Browser(BrowserState::default());
    }

    pub fn browser_filter(&self) -> &str {
        match &self.input {
            InputState::Browser(browser) => browser.filter.text(),
            _ => "",
        }
    }

    pub fn browser_selected(&self) -> usize {
        match &self.input {
            InputState::Browser(browser) => browser.selected,
            _ => 0,
        }
    }

    /// Presets the browser shows: category order, catalog order inside each
    /// category, narrowed by the filter box (name or slash command).
    pub fn browser_matches(&self) -> Vec<&Preset> {
        let filter = self.browser_filter().to_lowercase();
        let mut matches = Vec::new();
        for &category in Category::all() {
            for preset in self.catalog.in_category(category) {
                if filter.is_empty()
                    || preset.name().to_lowercase().contains(&filter)
                    || preset.slash_command().to_lowercase().contains(&filter)
                {
                    matches.push(preset);
                }
            }
        }
        matches
    }

    pub fn browser_char(&mut self, c: char) {
        if let InputState::Browser(browser) = &mut self.input {
            browser.filter.enter_char(c);
            browser.selected = 0;
        }
    }

    pub fn browser_backspace(&mut self) {
        if let InputState::Browser(browser) = &mut self.input {
            browser.filter.delete_char();
            browser.selected = 0;
        }
    }

    pub fn browser_next(&mut self) {
        let count = self.browser_matches().len();
        if let InputState::Browser(browser) = &mut self.input
            && count > 0
        {
            browser.selected = (browser.selected + 1) % count;
        }
    }

    pub fn browser_prev(&mut self) {
        let count = self.browser_matches().len();
        if let InputState::Browser(browser) = &mut self.input
            && count > 0
        {
            browser.selected = (browser.selected + count - 1) % count;
        }
    }

    pub fn browser_select(&mut self) {
        let selected = self.browser_selected();
        let preset = self.browser_matches().get(selected).copied().cloned();
        if let Some(preset) = preset {
            self.open_form(preset);
        }
    }

    pub fn browser_cancel(&mut self) {
        if matches!(self.input, InputState::Browser(_)) {
            self.input = InputState::default();
        }
    }
}
