use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::width_u16;
use crate::i18n::LanguageCode;
use crate::state::{AppState, Page};
use crate::theme::theme;

/// Product name shown at the left edge of the navbar.
pub const BRAND: &str = "OpenIC";

/// What: Draw the navbar and record the clickable tab and language rectangles.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; `nav_tab_rects` and `lang_button_rects` are rewritten
/// - `area`: Navbar area (three rows, bordered)
///
/// Details:
/// - Tabs that do not fit are drawn clipped and get no hit rectangle.
pub fn render_navbar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.nav_tab_rects.clear();
    app.lang_button_rects.clear();
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let lang_labels: Vec<(LanguageCode, String)> = LanguageCode::ALL
        .iter()
        .map(|&l| (l, format!(" {} ", l.label())))
        .collect();
    let langs_width: u16 = lang_labels
        .iter()
        .map(|(_, s)| width_u16(s) + 1)
        .sum::<u16>()
        .min(inner.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(langs_width)])
        .split(inner);
    let (left, right) = (chunks[0], chunks[1]);

    // Brand and page tabs
    let nav = &app.store.tree(app.language).nav;
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled("◆ ", Style::default().fg(th.sapphire)),
        Span::styled(
            BRAND,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    let mut x = left.x + width_u16("◆ ") + width_u16(BRAND) + 3;
    for page in Page::ALL {
        let label = format!(" {} {} ", page.index() + 1, page.nav_label(nav));
        let w = width_u16(&label);
        let style = if page == app.page {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        if x.saturating_add(w) <= left.x + left.width {
            app.nav_tab_rects.push((page, (x, left.y, w, 1)));
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(w + 1);
    }
    f.render_widget(Paragraph::new(Line::from(spans)), left);

    // Language buttons
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut x = right.x + 1;
    for (lang, label) in lang_labels {
        let w = width_u16(&label);
        let style = if lang == app.language {
            Style::default()
                .fg(th.crust)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        if x.saturating_add(w) <= right.x + right.width {
            app.lang_button_rects.push((lang, (x, right.y, w, 1)));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, style));
        x = x.saturating_add(w + 1);
    }
    f.render_widget(Paragraph::new(Line::from(spans)), right);
}
