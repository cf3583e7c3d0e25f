//! Plain-text rendition of a [`PageView`], used by `--print`.

use unicode_width::UnicodeWidthStr;

use super::{Block, PageView};

/// Narrowest width the text renderer lays out for.
const MIN_WIDTH: usize = 20;

/// What: Render a page view as wrapped plain text.
///
/// Inputs:
/// - `view`: Page to render
/// - `width`: Target line width in display columns (values below 20 are raised to 20)
///
/// Output:
/// - Text with one blank line between blocks and a trailing newline.
///
/// Details:
/// - Deterministic; widths are measured with `unicode-width` so accented
///   text wraps at the same columns as ASCII.
/// - Words longer than the line are kept whole.
#[must_use]
pub fn to_plain_text(view: &PageView, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let header = format!("{} · {}", view.title, view.language.label());
    let mut out: Vec<String> = vec![header.clone(), rule('=', header.width(), width)];

    for block in &view.blocks {
        out.push(String::new());
        push_block(&mut out, block, width);
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn push_block(out: &mut Vec<String>, block: &Block, width: usize) {
    match block {
        Block::Hero {
            before,
            highlight,
            after,
            description,
        } => {
            let title = format!("{before}{highlight}{after}");
            out.extend(wrap_text(&title, width));
            out.push(String::new());
            out.extend(wrap_text(description, width));
        }
        Block::Heading { text } => {
            out.extend(wrap_text(text, width));
            out.push(rule('-', text.width(), width));
        }
        Block::Paragraph { text } => out.extend(wrap_text(text, width)),
        Block::Bullets { items } => {
            for item in items {
                out.extend(hanging(item, "  • ", "    ", width));
            }
        }
        Block::Caption { text } => out.extend(wrap_text(&text.to_uppercase(), width)),
        Block::Card {
            title,
            subtitle,
            body,
            note,
        } => {
            out.extend(hanging(&format!("{title} ({subtitle})"), "▸ ", "  ", width));
            out.extend(hanging(body, "  ", "  ", width));
            out.extend(hanging(note, "  » ", "    ", width));
        }
        Block::Tool {
            name,
            category,
            description,
        } => {
            out.extend(hanging(&format!("{name} [{category}]"), "", "  ", width));
            out.extend(hanging(description, "  ", "  ", width));
        }
        Block::Step {
            number,
            label,
            description,
        } => {
            out.extend(hanging(&format!("{number:>2}. {label}"), "", "    ", width));
            out.extend(hanging(description, "    ", "    ", width));
        }
        Block::Link {
            title, url, kind, ..
        } => {
            out.extend(hanging(
                &format!("[{}] {title}", kind.tag()),
                "",
                "  ",
                width,
            ));
            out.push(format!("    {url}"));
        }
        Block::Roadmap {
            title,
            description,
            features,
        } => {
            out.extend(wrap_text(title, width));
            out.push(rule('-', title.width(), width));
            out.extend(wrap_text(description, width));
            for feature in features {
                out.extend(hanging(feature, "  + ", "    ", width));
            }
        }
    }
}

/// Underline of `len` columns, capped at the line width.
fn rule(ch: char, len: usize, width: usize) -> String {
    std::iter::repeat_n(ch, len.clamp(1, width)).collect()
}

/// Wrap `content` with `first` before the first line and `rest` before the others.
fn hanging(content: &str, first: &str, rest: &str, width: usize) -> Vec<String> {
    let indent = first.width().max(rest.width());
    wrap_text(content, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { first } else { rest };
            format!("{prefix}{line}")
        })
        .collect()
}

/// What: Wrap text into lines that fit within the given width.
///
/// Inputs:
/// - `content`: Text content to wrap
/// - `available_width`: Width available for wrapping, in display columns
///
/// Output:
/// - Vector of strings, each representing a wrapped line
///
/// Details:
/// - Uses Unicode display width for accurate measurement
/// - Wraps at word boundaries; runs of whitespace collapse to one space
/// - Returns one empty line if content is empty
#[must_use]
pub fn wrap_text(content: &str, available_width: usize) -> Vec<String> {
    let width = available_width.max(1);
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0usize;

    for word in content.split_whitespace() {
        let word_width = word.width();
        let separator_width = usize::from(current_width > 0);
        let test_width = current_width + separator_width + word_width;

        if test_width > width && current_width > 0 {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_width = word_width;
        } else {
            if current_width > 0 {
                current_line.push(' ');
            }
            current_line.push_str(word);
            current_width = test_width;
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::i18n::LanguageCode;
    use crate::state::Page;
    use crate::view::render;

    #[test]
    fn wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
        for line in &lines {
            assert!(line.width() <= 10);
        }
    }

    #[test]
    /// What: Accented characters count as one column each.
    fn wrap_text_measures_display_width() {
        let lines = wrap_text("Integração de fluxos de código", 15);
        assert_eq!(lines, vec!["Integração de", "fluxos de", "código"]);
    }

    #[test]
    fn wrap_text_keeps_long_words_and_handles_empty() {
        assert_eq!(wrap_text("", 8), vec![String::new()]);
        assert_eq!(wrap_text("   ", 8), vec![String::new()]);
        assert_eq!(
            wrap_text("https://skywater-pdk.readthedocs.io/ docs", 12),
            vec!["https://skywater-pdk.readthedocs.io/", "docs"]
        );
    }

    #[test]
    fn plain_text_contains_page_content() {
        let store = ContentStore::embedded().expect("embedded content parses");
        let view = render(&store, LanguageCode::En, Page::Tools);
        let text = to_plain_text(&view, 80);
        assert!(text.starts_with("Tools · EN\n"));
        assert!(text.ends_with('\n'));
        for tool in &store.tree(LanguageCode::En).tools_section.tools {
            assert!(text.contains(&format!("{} [{}]", tool.name, tool.category)));
        }
    }

    #[test]
    /// What: No line except unbreakable words exceeds the requested width.
    fn plain_text_lines_fit_width() {
        let store = ContentStore::embedded().expect("embedded content parses");
        for lang in LanguageCode::ALL {
            for page in Page::ALL {
                let text = to_plain_text(&render(&store, lang, page), 40);
                for line in text.lines() {
                    assert!(
                        line.width() <= 40 || !line.trim().contains(' '),
                        "line too wide for {lang}/{page}: {line:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn resources_text_lists_urls() {
        let store = ContentStore::embedded().expect("embedded content parses");
        let text = to_plain_text(&render(&store, LanguageCode::Pt, Page::Resources), 60);
        assert!(text.contains("[github] Open_PDKs Installer"));
        assert!(text.contains("    https://skywater-pdk.readthedocs.io/"));
    }
}
