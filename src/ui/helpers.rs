//! Small layout helpers shared by the UI panels.

use ratatui::{
    prelude::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::view::wrap_text;

/// What: Display width of `s` as `u16`, saturating.
#[must_use]
pub fn width_u16(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// What: Compute a rectangle of at most `w` x `h` centered inside `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Wrap uniformly styled text under a hanging prefix.
///
/// Inputs:
/// - `content`: Text to wrap
/// - `first`: Prefix span for the first line
/// - `rest`: Prefix text for continuation lines (unstyled)
/// - `style`: Style of the wrapped text
/// - `width`: Total line width including the prefix
///
/// Output:
/// - One `Line` per wrapped row.
#[must_use]
pub fn hanging_lines(
    content: &str,
    first: Span<'static>,
    rest: &str,
    style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let indent = first.content.width().max(rest.width());
    let mut first = Some(first);
    wrap_text(content, width.saturating_sub(indent))
        .into_iter()
        .map(|row| {
            let prefix = first.take().unwrap_or_else(|| Span::raw(rest.to_string()));
            Line::from(vec![prefix, Span::styled(row, style)])
        })
        .collect()
}

/// What: Wrap a run of differently styled segments as one paragraph.
///
/// Inputs:
/// - `segments`: `(text, style)` pairs in reading order
/// - `width`: Line width in display columns
///
/// Output:
/// - Wrapped lines; each word keeps the style of the segment it came from.
///
/// Details:
/// - Words that touch across a segment boundary (no whitespace between them,
///   as in `Aberto` + `.`) stay glued together on the same line.
#[must_use]
pub fn wrap_styled(segments: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    // (word, style, glued_to_previous)
    let mut tokens: Vec<(&str, Style, bool)> = Vec::new();
    let mut prev_ends_with_space = true;
    for (text, style) in segments {
        let starts_with_space = text.starts_with(char::is_whitespace);
        for (i, word) in text.split_whitespace().enumerate() {
            let glued = i == 0 && !starts_with_space && !prev_ends_with_space && !tokens.is_empty();
            tokens.push((word, *style, glued));
        }
        if !text.is_empty() {
            prev_ends_with_space = text.ends_with(char::is_whitespace);
        }
    }

    let width = width.max(1);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for (word, style, glued) in tokens {
        let w = word.width();
        if glued || used == 0 {
            spans.push(Span::styled(word.to_string(), style));
            used += w;
        } else if used + 1 + w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::styled(word.to_string(), style));
            used = w;
        } else {
            spans.push(Span::styled(" ".to_string(), style));
            spans.push(Span::styled(word.to_string(), style));
            used += 1 + w;
        }
    }
    if !spans.is_empty() || lines.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}
