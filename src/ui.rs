use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::catalog::{Category, FieldKind};
use crate::theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = *app.theme();

    let bg_block = Block::default().style(Style::default().bg(theme.bg_dark));
    frame.render_widget(bg_block, frame.area());

    // Chat column on the left, placeholder document pane on the right.
    let chat_area = if app.show_document_pane() && frame.area().width >= 80 {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(frame.area());
        draw_document_pane(frame, &theme, columns[1]);
        columns[0]
    } else {
        frame.area()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Transcript
            Constraint::Length(5), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(chat_area);

    draw_transcript(frame, app, &theme, chunks[0]);
    draw_input(frame, app, &theme, chunks[1]);
    draw_status_bar(frame, app, &theme, chunks[2]);

    match app.focus() {
        Focus::Compose => {
            if app.palette_visible() {
                draw_palette(frame, app, &theme, chunks[1]);
            }
        }
        Focus::Form => draw_form(frame, app, &theme),
        Focus::Picker => {
            draw_form(frame, app, &theme);
            draw_picker(frame, app, &theme);
        }
        Focus::Browser => draw_browser(frame, app, &theme),
    }
}

fn draw_transcript(frame: &mut Frame, app: &App, theme: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(" Messages ", theme.title())));

    if app.transcript().is_empty() {
        let welcome = welcome_screen(theme);
        frame.render_widget(welcome.block(block), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in app.transcript().entries().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for (j, text) in entry.as_str().lines().enumerate() {
            let style = if j == 0 && text.starts_with("Used preset: ") {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else if j == 0 && text.starts_with("User: ") {
                theme.user_name()
            } else {
                Style::default().fg(theme.text_primary)
            };
            lines.push(Line::from(Span::styled(text.to_string(), style)));
        }
    }

    // Auto-bottom: keep the newest entries visible.
    let inner = block.inner(area);
    let total = wrapped_line_count(&lines, inner.width);
    let scroll = total.saturating_sub(inner.height);

    let transcript = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(transcript, area);
}

fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total: u16 = 0;
    for line in lines {
        let line_width = line.width();
        let rows = if line_width == 0 {
            1
        } else {
            ((line_width - 1) / width) + 1
        };
        total = total.saturating_add(rows as u16);
    }
    total
}

fn draw_input(frame: &mut Frame, app: &App, theme: &Palette, area: Rect) {
    let in_command_mode = crate::command::is_command_mode(app.draft_text());

    let (border_style, prompt) = if in_command_mode {
        (Style::default().fg(theme.yellow), "/")
    } else {
        (Style::default().fg(theme.green), "❯")
    };

    let content = if app.draft_text().is_empty() {
        vec![
            Span::styled(format!(" {prompt} "), Style::default().fg(theme.primary)),
            Span::styled(
                "Type / to see available commands...",
                Style::default().fg(theme.text_muted),
            ),
        ]
    } else {
        vec![
            Span::styled(format!(" {prompt} "), Style::default().fg(theme.primary)),
            Span::styled(app.draft_text(), Style::default().fg(theme.text_primary)),
        ]
    };

    let hints = vec![
        Span::styled("Enter", theme.key_highlight()),
        Span::styled(" send  ", theme.key_hint()),
        Span::styled("^P", theme.key_highlight()),
        Span::styled(" presets  ", theme.key_hint()),
        Span::styled("^C", theme.key_highlight()),
        Span::styled(" quit ", theme.key_hint()),
    ];

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_bottom(Line::from(hints).alignment(Alignment::Right))
            .padding(Padding::vertical(1)),
    );

    frame.render_widget(input, area);

    if app.focus() == Focus::Compose {
        let before_cursor: String = app
            .draft_text()
            .chars()
            .take(app.draft_cursor())
            .collect();
        let cursor_x = area.x + 4 + before_cursor.width() as u16;
        let cursor_y = area.y + 2;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, theme: &Palette, area: Rect) {
    let (text, style) = if let Some(msg) = app.status_message() {
        (msg.to_string(), Style::default().fg(theme.yellow))
    } else {
        (
            format!("● {} presets available", app.catalog().len()),
            Style::default().fg(theme.text_muted),
        )
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(text, style),
    ]));
    frame.render_widget(status, area);
}

/// Command palette popup anchored above the input box.
fn draw_palette(frame: &mut Frame, app: &App, theme: &Palette, input_area: Rect) {
    let matches = app.palette_matches();
    if matches.is_empty() {
        return;
    }

    let height = (matches.len() as u16 + 2).min(input_area.y.saturating_sub(1)).max(3);
    let area = Rect {
        x: input_area.x,
        y: input_area.y.saturating_sub(height),
        width: input_area.width,
        height,
    };

    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, preset) in matches.iter().enumerate() {
        let selected = i == app.palette_selected();
        let (marker, command_style, name_style) = if selected {
            (
                "▸ ",
                theme.selected_row(),
                Style::default().fg(theme.text_primary),
            )
        } else {
            (
                "  ",
                Style::default().fg(theme.peach),
                Style::default().fg(theme.text_muted),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme.selected_row()),
            Span::styled(preset.slash_command().to_string(), command_style),
            Span::styled(format!("  {}", preset.name()), name_style),
        ]));
    }

    let palette = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.bg_panel))
            .title(Line::from(Span::styled(" Commands ", theme.title()))),
    );

    frame.render_widget(palette, area);
}

fn draw_form(frame: &mut Frame, app: &App, theme: &Palette) {
    let Some(form) = app.form() else {
        return;
    };

    let area = frame.area();
    let width = 58.min(area.width.saturating_sub(4));

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, field) in form.preset().fields().iter().enumerate() {
        let focused = i == form.focused();
        let question_style = if focused {
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let marker = if focused { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme.selected_row()),
            Span::styled(field.question().to_string(), question_style),
        ]));

        let value = form.value(field.name());
        let answer = match field.kind() {
            FieldKind::Text => {
                if value.is_empty() && focused {
                    Span::styled("type here...", Style::default().fg(theme.text_muted))
                } else {
                    Span::styled(value.to_string(), Style::default().fg(theme.green))
                }
            }
            FieldKind::Options(_) => {
                if value.is_empty() {
                    Span::styled("◂ Select an option ▸", Style::default().fg(theme.text_muted))
                } else {
                    Span::styled(format!("◂ {value} ▸"), Style::default().fg(theme.green))
                }
            }
            FieldKind::Document | FieldKind::DocumentAttachment => {
                if value.is_empty() {
                    Span::styled("Choose file (Enter)", Style::default().fg(theme.text_muted))
                } else {
                    Span::styled(format!("📎 {value}"), Style::default().fg(theme.green))
                }
            }
        };
        lines.push(Line::from(vec![Span::raw("    "), answer]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  Enter", theme.key_highlight()),
        Span::styled(" submit  ", theme.key_hint()),
        Span::styled("Tab", theme.key_highlight()),
        Span::styled(" next field  ", theme.key_hint()),
        Span::styled("Esc", theme.key_highlight()),
        Span::styled(" cancel", theme.key_hint()),
    ]));

    // Size the modal to the wrapped content so long questions never push the
    // hint row off screen.
    let height =
        (wrapped_line_count(&lines, width.saturating_sub(2)) + 2).min(area.height.saturating_sub(2));
    let modal = centered_rect(area, width, height);

    frame.render_widget(Clear, modal);

    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.bg_panel))
            .title(Line::from(Span::styled(
                format!(" {} ", form.preset().name()),
                theme.title(),
            ))),
    );

    frame.render_widget(dialog, modal);
}

fn draw_picker(frame: &mut Frame, app: &App, theme: &Palette) {
    let area = frame.area();
    let width = 50.min(area.width.saturating_sub(6));
    let files = app.picker_visible_files();
    let height = (files.len() as u16 + 4).min(area.height.saturating_sub(4)).max(5);
    let modal = centered_rect(area, width, height);

    frame.render_widget(Clear, modal);

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled(" filter: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            app.picker_filter().to_string(),
            Style::default().fg(theme.text_primary),
        ),
    ])];

    if files.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no matching files",
            Style::default().fg(theme.text_muted),
        )));
    }

    for (i, name) in files.iter().enumerate() {
        let selected = i == app.picker_selected();
        let (marker, style) = if selected {
            ("▸ ", theme.selected_row())
        } else {
            ("  ", Style::default().fg(theme.text_secondary))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme.selected_row()),
            Span::styled((*name).to_string(), style),
        ]));
    }

    let picker = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.yellow))
            .style(Style::default().bg(theme.bg_highlight))
            .title(Line::from(Span::styled(" Choose File ", theme.title()))),
    );

    frame.render_widget(picker, modal);
}

fn draw_browser(frame: &mut Frame, app: &App, theme: &Palette) {
    let area = frame.area();
    let width = 64.min(area.width.saturating_sub(4));
    let height = area.height.saturating_sub(4).min(24);
    let modal = centered_rect(area, width, height);

    frame.render_widget(Clear, modal);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(" filter: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                app.browser_filter().to_string(),
                Style::default().fg(theme.text_primary),
            ),
        ]),
        Line::from(""),
    ];

    let matches = app.browser_matches();
    let mut current_category: Option<Category> = None;

    for (i, preset) in matches.iter().enumerate() {
        if current_category != Some(preset.category()) {
            current_category = Some(preset.category());
            lines.push(Line::from(Span::styled(
                format!(" {}", preset.category().label()),
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let selected = i == app.browser_selected();
        let (marker, name_style) = if selected {
            ("▸ ", theme.selected_row())
        } else {
            ("  ", Style::default().fg(theme.text_primary))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {marker}"), theme.selected_row()),
            Span::styled(preset.name().to_string(), name_style),
            Span::styled(
                format!("  {}", preset.slash_command()),
                Style::default().fg(theme.peach),
            ),
        ]));
    }

    if matches.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no matching presets",
            Style::default().fg(theme.text_muted),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Enter", theme.key_highlight()),
        Span::styled(" open  ", theme.key_hint()),
        Span::styled("↑↓", theme.key_highlight()),
        Span::styled(" select  ", theme.key_hint()),
        Span::styled("Esc", theme.key_highlight()),
        Span::styled(" close", theme.key_hint()),
    ]));

    let browser = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.bg_panel))
            .title(Line::from(Span::styled(" Select a Preset ", theme.title()))),
    );

    frame.render_widget(browser, modal);
}

fn draw_document_pane(frame: &mut Frame, theme: &Palette, area: Rect) {
    let pane = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your generated document will appear here.",
            Style::default().fg(theme.text_muted),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.text_muted))
            .title(Line::from(Span::styled(" Generated Document ", theme.title()))),
    );

    frame.render_widget(pane, area);
}

fn welcome_screen(theme: &Palette) -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Drafter",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Compose document requests from presets",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("    /", theme.key_highlight()),
            Span::styled(
                "      browse slash commands",
                Style::default().fg(theme.text_secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("    ^P", theme.key_highlight()),
            Span::styled(
                "     open the preset browser",
                Style::default().fg(theme.text_secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("    Enter", theme.key_highlight()),
            Span::styled(
                "  send a message",
                Style::default().fg(theme.text_secondary),
            ),
        ]),
    ];

    Paragraph::new(lines).alignment(Alignment::Left)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
