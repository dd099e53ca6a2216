//! Color theme for the Drafter TUI.
//!
//! Kanagawa Wave flavored palette with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55);

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184);
    pub const GREEN: Color = Color::Rgb(152, 187, 108);
    pub const YELLOW: Color = Color::Rgb(230, 195, 132);
    pub const PEACH: Color = Color::Rgb(255, 160, 102);
    pub const RED: Color = Color::Rgb(255, 93, 98);
}

/// Resolved palette used by every draw function.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
}

impl Palette {
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            peach: colors::PEACH,
            red: colors::RED,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Magenta,
            green: Color::Green,
            yellow: Color::Yellow,
            peach: Color::LightRed,
            red: Color::Red,
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn user_name(&self) -> Style {
        Style::default().fg(self.green).add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default().fg(self.yellow).add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
