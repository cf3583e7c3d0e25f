use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, BorderType, Borders, Paragraph},
};

use super::helpers::{hanging_lines, wrap_styled};
use crate::state::AppState;
use crate::theme::{Theme, theme};
use crate::view::{Block, PageView};

/// Lines of a laid-out page plus where each resource link landed.
pub struct BodyLayout {
    /// Styled rows ready for the body paragraph.
    pub lines: Vec<Line<'static>>,
    /// `(resource index, first line, line count)` per link block.
    pub links: Vec<(usize, usize, usize)>,
}

/// What: Lay out a page view into styled, wrapped lines.
///
/// Inputs:
/// - `view`: Rendered page
/// - `width`: Inner width of the body panel
/// - `selected_link`: Resource index drawn as selected
///
/// Output:
/// - `BodyLayout` with one blank line between blocks.
#[must_use]
pub fn layout_page(view: &PageView, width: u16, selected_link: usize) -> BodyLayout {
    let th = theme();
    let width = usize::from(width.max(1));
    let mut out = BodyLayout {
        lines: Vec::new(),
        links: Vec::new(),
    };
    for (i, block) in view.blocks.iter().enumerate() {
        if i > 0 {
            out.lines.push(Line::default());
        }
        let start = out.lines.len();
        push_block(&mut out.lines, block, width, selected_link, &th);
        if let Block::Link { index, .. } = block {
            out.links.push((*index, start, out.lines.len() - start));
        }
    }
    out
}

fn push_block(
    lines: &mut Vec<Line<'static>>,
    block: &Block,
    width: usize,
    selected_link: usize,
    th: &Theme,
) {
    let text = Style::default().fg(th.text);
    let muted = Style::default().fg(th.subtext0);
    let heading = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
    match block {
        Block::Hero {
            before,
            highlight,
            after,
            description,
        } => {
            let bold = text.add_modifier(Modifier::BOLD);
            let accent = Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD);
            lines.extend(wrap_styled(
                &[
                    (before.as_str(), bold),
                    (highlight.as_str(), accent),
                    (after.as_str(), bold),
                ],
                width,
            ));
            lines.push(Line::default());
            lines.extend(wrap_styled(&[(description.as_str(), muted)], width));
        }
        Block::Heading { text: s } => lines.extend(wrap_styled(&[(s.as_str(), heading)], width)),
        Block::Paragraph { text: s } => lines.extend(wrap_styled(&[(s.as_str(), text)], width)),
        Block::Bullets { items } => {
            for item in items {
                let dot = Span::styled("  • ", Style::default().fg(th.blue));
                lines.extend(hanging_lines(item, dot, "    ", text, width));
            }
        }
        Block::Caption { text: s } => {
            let style = Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC);
            lines.extend(wrap_styled(&[(s.to_uppercase().as_str(), style)], width));
        }
        Block::Card {
            title,
            subtitle,
            body,
            note,
        } => {
            let head = wrap_styled(
                &[
                    (title.as_str(), text.add_modifier(Modifier::BOLD)),
                    ("  ", text),
                    (subtitle.as_str(), Style::default().fg(th.overlay1)),
                ],
                width.saturating_sub(2),
            );
            for (i, row) in head.into_iter().enumerate() {
                let prefix = if i == 0 {
                    Span::styled("▸ ", Style::default().fg(th.sapphire))
                } else {
                    Span::raw("  ")
                };
                let mut spans = vec![prefix];
                spans.extend(row.spans);
                lines.push(Line::from(spans));
            }
            lines.extend(hanging_lines(body, Span::raw("  "), "  ", muted, width));
            let mark = Span::styled("  » ", Style::default().fg(th.yellow));
            let note_style = muted.add_modifier(Modifier::ITALIC);
            lines.extend(hanging_lines(note, mark, "    ", note_style, width));
        }
        Block::Tool {
            name,
            category,
            description,
        } => {
            lines.extend(wrap_styled(
                &[
                    (name.as_str(), text.add_modifier(Modifier::BOLD)),
                    (" ", text),
                    (format!("[{category}]").as_str(), Style::default().fg(th.yellow)),
                ],
                width,
            ));
            lines.extend(hanging_lines(description, Span::raw("  "), "  ", muted, width));
        }
        Block::Step {
            number,
            label,
            description,
        } => {
            let num = Span::styled(
                format!("{number:>2}. "),
                Style::default().fg(th.blue).add_modifier(Modifier::BOLD),
            );
            lines.extend(hanging_lines(
                label,
                num,
                "    ",
                text.add_modifier(Modifier::BOLD),
                width,
            ));
            lines.extend(hanging_lines(description, Span::raw("    "), "    ", muted, width));
        }
        Block::Link {
            index,
            title,
            url,
            kind,
        } => {
            let selected = *index == selected_link;
            let marker = if selected {
                Span::styled("▶ ", Style::default().fg(th.sapphire))
            } else {
                Span::raw("  ")
            };
            let title_style = if selected {
                Style::default()
                    .fg(th.crust)
                    .bg(th.sapphire)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(th.sapphire)
                    .add_modifier(Modifier::UNDERLINED)
            };
            let mut head = vec![
                marker,
                Span::styled(
                    format!("[{}] ", kind.tag()),
                    Style::default().fg(th.yellow),
                ),
            ];
            head.push(Span::styled(title.clone(), title_style));
            lines.push(Line::from(head));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(url.clone(), Style::default().fg(th.overlay1)),
            ]));
        }
        Block::Roadmap {
            title,
            description,
            features,
        } => {
            lines.extend(wrap_styled(&[(title.as_str(), heading)], width));
            lines.extend(wrap_styled(&[(description.as_str(), muted)], width));
            for feature in features {
                let plus = Span::styled("  + ", Style::default().fg(th.blue));
                lines.extend(hanging_lines(feature, plus, "    ", text, width));
            }
        }
    }
}

/// What: Draw the page body and update scroll bookkeeping.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; scroll limits and `link_rects` are rewritten
/// - `area`: Body area (bordered panel)
///
/// Details:
/// - The scroll offset is clamped to the laid-out content height.
/// - When a link was just selected by key, the offset moves to keep it visible.
pub fn render_body(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let view = app.render();
    let panel = Panel::default()
        .title(Span::styled(
            format!(" {} ", view.title),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));
    let inner = panel.inner(area);
    f.render_widget(panel, area);

    let layout = layout_page(&view, inner.width, app.selected_link);
    let total = u16::try_from(layout.lines.len()).unwrap_or(u16::MAX);
    app.body_height = inner.height;
    app.body_rect = Some((inner.x, inner.y, inner.width, inner.height));
    app.clamp_scroll(total.saturating_sub(inner.height));

    if app.follow_selection {
        app.follow_selection = false;
        if let Some(&(_, start, count)) = layout
            .links
            .iter()
            .find(|(index, _, _)| *index == app.selected_link)
        {
            let start = u16::try_from(start).unwrap_or(u16::MAX);
            let end = start.saturating_add(u16::try_from(count).unwrap_or(u16::MAX));
            if start < app.scroll {
                app.scroll = start;
            } else if end > app.scroll.saturating_add(inner.height) {
                app.scroll = end.saturating_sub(inner.height).min(app.max_scroll);
            }
        }
    }

    app.link_rects.clear();
    for &(index, start, count) in &layout.links {
        let Ok(start) = u16::try_from(start) else {
            continue;
        };
        let count = u16::try_from(count).unwrap_or(1);
        if start < app.scroll || start >= app.scroll.saturating_add(inner.height) {
            continue;
        }
        let y = inner.y + (start - app.scroll);
        let visible = count.min(inner.y + inner.height - y);
        app.link_rects
            .push((index, (inner.x, y, inner.width, visible)));
    }

    f.render_widget(Paragraph::new(layout.lines).scroll((app.scroll, 0)), inner);
}
