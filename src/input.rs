use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::{App, Focus};

/// Handle terminal events.
/// Returns true if the app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.focus() {
            Focus::Compose => handle_compose(app, key),
            Focus::Form => handle_form(app, key),
            Focus::Picker => handle_picker(app, key),
            Focus::Browser => handle_browser(app, key),
        }
    }

    Ok(app.should_quit())
}

fn handle_compose(app: &mut App, key: KeyEvent) {
    match key.code {
        // Send, or select the highlighted palette row
        KeyCode::Enter => {
            if app.palette_visible() {
                app.palette_select();
            } else {
                app.send_message();
            }
        }
        // Open the preset browser
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.open_browser();
        }
        // Clear line
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.compose_clear();
        }
        // Quit
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.request_quit();
        }
        // Palette navigation
        KeyCode::Down | KeyCode::Tab if app.palette_visible() => {
            app.palette_next();
        }
        KeyCode::Up | KeyCode::BackTab if app.palette_visible() => {
            app.palette_prev();
        }
        // Discard the draft (also leaves command mode)
        KeyCode::Esc => {
            app.compose_clear();
        }
        KeyCode::Backspace => {
            app.compose_backspace();
        }
        KeyCode::Delete => {
            app.compose_delete_forward();
        }
        KeyCode::Left => {
            app.compose_cursor_left();
        }
        KeyCode::Right => {
            app.compose_cursor_right();
        }
        KeyCode::Home => {
            app.compose_cursor_home();
        }
        KeyCode::End => {
            app.compose_cursor_end();
        }
        KeyCode::Char(c) => {
            app.compose_char(c);
        }
        _ => {}
    }
}

fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        // Close without submitting; answers are discarded
        KeyCode::Esc => {
            app.cancel_form();
        }
        // Submit regardless of the focused field
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_form();
        }
        // Submit, or open the file picker on a document field
        KeyCode::Enter => {
            app.form_activate();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_focus_prev();
        }
        KeyCode::Left => {
            app.form_cycle_option(-1);
        }
        KeyCode::Right => {
            app.form_cycle_option(1);
        }
        KeyCode::Backspace => {
            app.form_backspace();
        }
        KeyCode::Char(c) => {
            app.form_char(c);
        }
        _ => {}
    }
}

fn handle_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.picker_cancel();
        }
        KeyCode::Enter => {
            app.picker_select();
        }
        KeyCode::Down | KeyCode::Tab => {
            app.picker_next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.picker_prev();
        }
        KeyCode::Backspace => {
            app.picker_backspace();
        }
        KeyCode::Char(c) => {
            app.picker_char(c);
        }
        _ => {}
    }
}

fn handle_browser(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.browser_cancel();
        }
        KeyCode::Enter => {
            app.browser_select();
        }
        KeyCode::Down | KeyCode::Tab => {
            app.browser_next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.browser_prev();
        }
        KeyCode::Backspace => {
            app.browser_backspace();
        }
        KeyCode::Char(c) => {
            app.browser_char(c);
        }
        _ => {}
    }
}
