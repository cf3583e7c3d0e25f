use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::{centered_rect, width_u16};
use crate::state::{AppState, Modal};
use crate::theme::{KeyChord, chords_label, theme};

/// Render the active modal overlay (Help or Alert), if any.
///
/// Clears the area behind the modal and draws a styled box centered on the
/// screen. The Help modal reflects the current keymap.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, app, area),
        Modal::Alert { message } => render_alert(f, app, area, message),
    }
}

/// What: Return `(action label, key labels)` rows for the help overlay.
///
/// Details:
/// - Actions with no binding are omitted.
#[must_use]
pub fn help_rows(app: &AppState) -> Vec<(String, String)> {
    let ui = &app.store.tree(app.language).interface;
    let km = &app.keymap;
    let scroll_keys: Vec<KeyChord> = km
        .scroll_up
        .iter()
        .chain(&km.scroll_down)
        .chain(&km.scroll_page_up)
        .chain(&km.scroll_page_down)
        .chain(&km.scroll_top)
        .copied()
        .collect();
    let link_keys: Vec<KeyChord> = km.link_prev.iter().chain(&km.link_next).copied().collect();
    let rows: [(&str, String); 9] = [
        (&ui.quit, chords_label(&km.exit)),
        (&ui.help, chords_label(&km.help_overlay)),
        (&ui.next_page, chords_label(&km.page_next)),
        (&ui.prev_page, chords_label(&km.page_prev)),
        (&ui.jump_page, "1-5".to_string()),
        (&ui.cycle_language, chords_label(&km.cycle_language)),
        (&ui.scroll, chords_label(&scroll_keys)),
        (&ui.select_link, chords_label(&link_keys)),
        (&ui.open_link, chords_label(&km.link_open)),
    ];
    rows.into_iter()
        .filter(|(_, keys)| !keys.is_empty())
        .map(|(label, keys)| (label.to_string(), keys))
        .collect()
}

fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let ui = &app.store.tree(app.language).interface;
    let rows = help_rows(app);
    let label_w = rows.iter().map(|(l, _)| width_u16(l)).max().unwrap_or(0);
    let keys_w = rows.iter().map(|(_, k)| width_u16(k)).max().unwrap_or(0);
    let w = (label_w + keys_w + 8).max(width_u16(&ui.help_title) + 6);
    let h = u16::try_from(rows.len()).unwrap_or(u16::MAX) + 4;
    let rect = centered_rect(area, w, h);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = rows
        .into_iter()
        .map(|(label, keys)| {
            let fill = usize::from(label_w.saturating_sub(width_u16(&label)));
            Line::from(vec![
                Span::styled(
                    format!("{label}{}", " ".repeat(fill)),
                    Style::default()
                        .fg(th.overlay1)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    keys,
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        ui.close_hint.clone(),
        Style::default().fg(th.subtext0),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ui.help_title),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn render_alert(f: &mut Frame, app: &AppState, area: Rect, message: &str) {
    let th = theme();
    let ui = &app.store.tree(app.language).interface;
    let w = area.width.saturating_sub(10).min(72);
    let rect = centered_rect(area, w, 7);
    f.render_widget(Clear, rect);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.text),
        )),
        Line::default(),
        Line::from(Span::styled(
            ui.close_hint.clone(),
            Style::default().fg(th.subtext0),
        )),
    ];
    let block = Block::default()
        .title(Span::styled(
            " ! ",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.red))
        .style(Style::default().bg(th.mantle));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
