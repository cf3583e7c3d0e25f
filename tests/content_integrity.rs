//! Integration tests for the content store: completeness, parity and rendering purity.

use openic::content::{ContentError, ContentStore, load_checked, parse_tree, resources, validate};
use openic::i18n::LanguageCode;
use openic::state::Page;
use openic::view::{Block, render, to_plain_text};

fn store() -> ContentStore {
    ContentStore::embedded().expect("embedded content parses")
}

#[test]
fn embedded_store_is_complete_and_consistent() {
    let report = validate(&store(), resources());
    assert!(!report.has_errors(), "unexpected errors:\n{report}");
    assert!(load_checked().is_ok());
}

#[test]
/// What: Every pair of languages has the same list lengths and ids.
fn list_shapes_match_across_languages() {
    let s = store();
    for (a_lang, a) in s.iter() {
        for (b_lang, b) in s.iter() {
            let ctx = format!("{a_lang} vs {b_lang}");
            assert_eq!(a.intro.bullets.len(), b.intro.bullets.len(), "{ctx}");
            assert_eq!(
                a.resources_section.roadmap_features.len(),
                b.resources_section.roadmap_features.len(),
                "{ctx}"
            );
            let ids = |t: &openic::content::ContentTree| {
                (
                    t.pdk_section
                        .options
                        .iter()
                        .map(|o| o.id.clone())
                        .collect::<Vec<_>>(),
                    t.tools_section
                        .tools
                        .iter()
                        .map(|x| x.id.clone())
                        .collect::<Vec<_>>(),
                    t.flow_section.steps.iter().map(|x| x.id).collect::<Vec<_>>(),
                )
            };
            assert_eq!(ids(a), ids(b), "{ctx}");
        }
    }
}

#[test]
/// What: A tree with an emptied list is rejected with a message naming the language.
fn emptied_list_is_reported() {
    let mut s = store();
    s.tree_mut(LanguageCode::Es).tools_section.tools.clear();
    let report = validate(&s, resources());
    assert!(report.has_errors());
    assert!(
        report
            .errors
            .iter()
            .any(|e| e == "[es] tools_section.tools is empty")
    );
}

#[test]
fn missing_translation_is_reported() {
    let mut s = store();
    s.tree_mut(LanguageCode::En).hero.description = "  ".to_string();
    let report = validate(&s, resources());
    assert!(report.errors.iter().any(|e| e.starts_with("[en] ")));
}

#[test]
/// What: A locale document with a missing field fails at parse time.
fn incomplete_document_fails_to_parse() {
    let err = parse_tree(LanguageCode::Pt, "nav:\n  home: Início\n").expect_err("incomplete");
    assert!(matches!(
        err,
        ContentError::Parse {
            language: LanguageCode::Pt,
            ..
        }
    ));
}

#[test]
fn render_is_pure_for_every_pair() {
    let s = store();
    for lang in LanguageCode::ALL {
        for page in Page::ALL {
            let a = render(&s, lang, page);
            let b = render(&s, lang, page);
            assert_eq!(a, b);
            assert_eq!(to_plain_text(&a, 72), to_plain_text(&b, 72));
            assert!(!a.blocks.is_empty());
        }
    }
}

#[test]
/// What: Out-of-set language codes are rejected at the boundary.
fn unsupported_language_codes_are_rejected() {
    assert_eq!(LanguageCode::from_code("fr"), None);
    assert_eq!(LanguageCode::from_code(""), None);
    assert_eq!(LanguageCode::from_code("en_US.UTF-8"), Some(LanguageCode::En));
}

#[test]
fn home_view_starts_with_hero_in_every_language() {
    let s = store();
    for lang in LanguageCode::ALL {
        let view = render(&s, lang, Page::Home);
        assert!(matches!(view.blocks.first(), Some(Block::Hero { .. })));
    }
}
