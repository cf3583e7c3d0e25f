//! Pure page rendering: `(store, language, page) -> PageView`.
//!
//! A [`PageView`] is a structured, serializable description of the section
//! shown for one page. The terminal UI, `--print` and the tests all consume
//! the same value, so what is drawn is exactly what is asserted.

mod text;

pub use text::{to_plain_text, wrap_text};

use serde::Serialize;

use crate::content::{ContentStore, ContentTree, ResourceKind, resources};
use crate::i18n::LanguageCode;
use crate::state::Page;

/// Rendered content of one page in one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Language the strings come from.
    pub language: LanguageCode,
    /// Page this view renders.
    pub page: Page,
    /// Localized navigation label of the page, used as the panel title.
    pub title: String,
    /// Ordered content blocks.
    pub blocks: Vec<Block>,
}

/// One unit of page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Landing headline with an emphasized span.
    Hero {
        /// Title text before the highlight.
        before: String,
        /// Emphasized part of the title.
        highlight: String,
        /// Title text after the highlight.
        after: String,
        /// Lead paragraph under the title.
        description: String,
    },
    /// Section heading.
    Heading {
        /// Heading text.
        text: String,
    },
    /// Body paragraph.
    Paragraph {
        /// Paragraph text.
        text: String,
    },
    /// Bulleted list.
    Bullets {
        /// List items in declared order.
        items: Vec<String>,
    },
    /// Small uppercase caption (illustration label).
    Caption {
        /// Caption text, shown uppercased.
        text: String,
    },
    /// Process design kit card.
    Card {
        /// Kit name.
        title: String,
        /// Shared subtitle under every kit name.
        subtitle: String,
        /// Short description.
        body: String,
        /// Detail note.
        note: String,
    },
    /// EDA tool entry.
    Tool {
        /// Tool name.
        name: String,
        /// Category tag, e.g. layout or simulation.
        category: String,
        /// What the tool does.
        description: String,
    },
    /// Numbered flow step.
    Step {
        /// 1-based step number.
        number: u32,
        /// Step title.
        label: String,
        /// Step explanation.
        description: String,
    },
    /// Outbound link; `index` is the position in the shared resource list.
    Link {
        /// Position in [`crate::content::resources`].
        index: usize,
        /// Link title.
        title: String,
        /// Target URL.
        url: String,
        /// Link category.
        kind: ResourceKind,
    },
    /// Roadmap section closing the resources page.
    Roadmap {
        /// Roadmap heading.
        title: String,
        /// Roadmap lead text.
        description: String,
        /// Planned features in declared order.
        features: Vec<String>,
    },
}

/// What: Render `page` in `language`.
///
/// Inputs:
/// - `store`: Content store
/// - `language`: Current language
/// - `page`: Current page
///
/// Output:
/// - `PageView` with the page's blocks in display order
///
/// Details:
/// - Deterministic: equal inputs always give equal output.
/// - List content keeps the order declared in the content tree.
#[must_use]
pub fn render(store: &ContentStore, language: LanguageCode, page: Page) -> PageView {
    let t = store.tree(language);
    let blocks = match page {
        Page::Home => home_blocks(t),
        Page::Pdk => pdk_blocks(t),
        Page::Tools => tools_blocks(t),
        Page::Flow => flow_blocks(t),
        Page::Resources => resources_blocks(t),
    };
    PageView {
        language,
        page,
        title: page.nav_label(&t.nav).to_string(),
        blocks,
    }
}

fn home_blocks(t: &ContentTree) -> Vec<Block> {
    let (before, highlight, after) = t.hero.split_title();
    vec![
        Block::Hero {
            before: before.to_string(),
            highlight: highlight.to_string(),
            after: after.to_string(),
            description: t.hero.description.clone(),
        },
        Block::Heading {
            text: t.intro.title.clone(),
        },
        Block::Paragraph {
            text: t.intro.description.clone(),
        },
        Block::Bullets {
            items: t.intro.bullets.clone(),
        },
        Block::Caption {
            text: t.intro.illustration.clone(),
        },
    ]
}

fn pdk_blocks(t: &ContentTree) -> Vec<Block> {
    let s = &t.pdk_section;
    let mut blocks = vec![
        Block::Heading {
            text: s.title.clone(),
        },
        Block::Paragraph {
            text: s.description.clone(),
        },
    ];
    blocks.extend(s.options.iter().map(|o| Block::Card {
        title: o.name.clone(),
        subtitle: s.card_subtitle.clone(),
        body: o.description.clone(),
        note: o.details.clone(),
    }));
    blocks
}

fn tools_blocks(t: &ContentTree) -> Vec<Block> {
    let s = &t.tools_section;
    let mut blocks = vec![
        Block::Heading {
            text: s.title.clone(),
        },
        Block::Paragraph {
            text: s.description.clone(),
        },
    ];
    blocks.extend(s.tools.iter().map(|tool| Block::Tool {
        name: tool.name.clone(),
        category: tool.category.clone(),
        description: tool.description.clone(),
    }));
    blocks
}

fn flow_blocks(t: &ContentTree) -> Vec<Block> {
    let s = &t.flow_section;
    let mut blocks = vec![
        Block::Heading {
            text: s.title.clone(),
        },
        Block::Paragraph {
            text: s.description.clone(),
        },
    ];
    blocks.extend(s.steps.iter().map(|step| Block::Step {
        number: step.id,
        label: step.label.clone(),
        description: step.description.clone(),
    }));
    blocks
}

fn resources_blocks(t: &ContentTree) -> Vec<Block> {
    let s = &t.resources_section;
    let mut blocks = vec![
        Block::Heading {
            text: s.title.clone(),
        },
        Block::Paragraph {
            text: s.description.clone(),
        },
        Block::Heading {
            text: s.links_title.clone(),
        },
    ];
    blocks.extend(
        resources()
            .iter()
            .enumerate()
            .map(|(index, link)| Block::Link {
                index,
                title: link.title.to_string(),
                url: link.url.to_string(),
                kind: link.kind,
            }),
    );
    blocks.push(Block::Roadmap {
        title: s.roadmap_title.clone(),
        description: s.roadmap_description.clone(),
        features: s.roadmap_features.clone(),
    });
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::embedded().expect("embedded content parses")
    }

    #[test]
    fn render_is_idempotent_for_every_pair() {
        let s = store();
        for lang in LanguageCode::ALL {
            for page in Page::ALL {
                assert_eq!(render(&s, lang, page), render(&s, lang, page));
            }
        }
    }

    #[test]
    fn home_starts_with_hero() {
        let view = render(&store(), LanguageCode::En, Page::Home);
        assert_eq!(view.title, "Home");
        assert_eq!(
            view.blocks[0],
            Block::Hero {
                before: "Prototyping ICs with ".into(),
                highlight: "Open-Source".into(),
                after: " Tools.".into(),
                description: store().tree(LanguageCode::En).hero.description.clone(),
            }
        );
    }

    #[test]
    /// What: PDK page lists exactly the current language's options in declared order.
    fn pdk_cards_follow_declared_order() {
        let s = store();
        for lang in LanguageCode::ALL {
            let view = render(&s, lang, Page::Pdk);
            let cards: Vec<(&str, &str)> = view
                .blocks
                .iter()
                .filter_map(|b| match b {
                    Block::Card { title, note, .. } => Some((title.as_str(), note.as_str())),
                    _ => None,
                })
                .collect();
            let expected: Vec<(&str, &str)> = s
                .tree(lang)
                .pdk_section
                .options
                .iter()
                .map(|o| (o.name.as_str(), o.details.as_str()))
                .collect();
            assert_eq!(cards, expected);
        }
    }

    #[test]
    fn resources_page_lists_every_link_then_roadmap() {
        let view = render(&store(), LanguageCode::Es, Page::Resources);
        let links = view
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Link { .. }))
            .count();
        assert_eq!(links, resources().len());
        assert!(matches!(view.blocks.last(), Some(Block::Roadmap { .. })));
    }

    #[test]
    fn view_serializes_to_tagged_json() {
        let view = render(&store(), LanguageCode::Pt, Page::Flow);
        let json = serde_json::to_value(&view).expect("serializable");
        assert_eq!(json["language"], "pt");
        assert_eq!(json["page"], "flow");
        assert_eq!(json["blocks"][2]["type"], "step");
        assert_eq!(json["blocks"][2]["number"], 1);
        assert_eq!(json["blocks"][0]["type"], "heading");
        assert_eq!(json["blocks"][0]["text"], store().tree(LanguageCode::Pt).flow_section.title);
    }

    #[test]
    /// What: Every block kind serializes, so every page renders to JSON.
    fn every_page_serializes_to_json() {
        let s = store();
        for lang in LanguageCode::ALL {
            for page in Page::ALL {
                let view = render(&s, lang, page);
                let json = serde_json::to_value(&view)
                    .unwrap_or_else(|e| panic!("{lang}/{page} failed to serialize: {e}"));
                let blocks = json["blocks"].as_array().expect("blocks array");
                assert_eq!(blocks.len(), view.blocks.len());
                assert!(blocks.iter().all(|b| b["type"].is_string()));
            }
        }
        let home = serde_json::to_value(render(&s, LanguageCode::En, Page::Home)).expect("json");
        assert_eq!(home["blocks"][3]["type"], "bullets");
        assert_eq!(
            home["blocks"][3]["items"].as_array().map(Vec::len),
            Some(s.tree(LanguageCode::En).intro.bullets.len())
        );
    }
}
