use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Page};
use crate::theme::{KeyChord, theme};

/// What: Number of rows the footer needs for the current settings.
#[must_use]
pub const fn footer_height(app: &AppState) -> u16 {
    if app.show_keybinds_footer { 2 } else { 1 }
}

/// What: Build the copyright notice, e.g. `© 2026 OpenSource IC Ecosystem. All rights reserved.`
#[must_use]
pub fn copyright_line(app: &AppState) -> String {
    let footer = &app.store.tree(app.language).footer;
    format!(
        "© {} {}. {}",
        app.copyright_year, footer.brand, footer.rights
    )
}

/// What: Draw the footer: copyright notice and, when enabled, key hints.
///
/// Details:
/// - Hints show the first chord bound to each action; link hints only appear
///   on the resources page.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut lines = vec![Line::from(Span::styled(
        copyright_line(app),
        Style::default().fg(th.overlay1),
    ))
    .alignment(Alignment::Center)];

    if app.show_keybinds_footer {
        let ui = &app.store.tree(app.language).interface;
        let km = &app.keymap;
        let key_style = Style::default().fg(th.blue).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(th.subtext0);
        let first = |chords: &[KeyChord]| chords.first().map(KeyChord::label);

        let scroll_keys = first(&km.scroll_up)
            .zip(first(&km.scroll_down))
            .map(|(u, d)| format!("{u}{d}"));
        let entries: [(Option<String>, &str); 6] = [
            (first(&km.exit), &ui.quit),
            (first(&km.help_overlay), &ui.help),
            (first(&km.page_next), &ui.next_page),
            (Some("1-5".to_string()), &ui.jump_page),
            (first(&km.cycle_language), &ui.cycle_language),
            (scroll_keys, &ui.scroll),
        ];
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut add = |key: String, label: &str| {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{key}]"), key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        };
        for (key, label) in entries {
            if let Some(k) = key {
                add(k, label);
            }
        }
        if app.page == Page::Resources {
            if let Some(k) = first(&km.link_next) {
                let keys = first(&km.link_prev).map_or(k.clone(), |p| format!("{p}{k}"));
                add(keys, &ui.select_link);
            }
            if let Some(k) = first(&km.link_open) {
                add(k, &ui.open_link);
            }
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(th.mantle)),
        area,
    );
}
