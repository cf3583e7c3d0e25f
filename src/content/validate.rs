//! Completeness and structural-parity checks for the content store.
//!
//! A missing string or a list that is shorter in one language is a data
//! defect, not something the renderer should paper over. These checks run at
//! startup and behind `--check-content`.

use std::collections::HashSet;
use std::fmt;

use crate::i18n::LanguageCode;

use super::store::ContentStore;
use super::types::{ContentTree, ResourceLink};

/// Errors and warnings found in the content store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make the store unusable.
    pub errors: Vec<String>,
    /// Suspicious but renderable content.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Check if the report has any errors
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    fn error(&mut self, lang: LanguageCode, msg: impl fmt::Display) {
        self.errors.push(format!("[{lang}] {msg}"));
    }

    fn warning(&mut self, lang: LanguageCode, msg: impl fmt::Display) {
        self.warnings.push(format!("[{lang}] {msg}"));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.errors {
            writeln!(f, "error: {e}")?;
        }
        for w in &self.warnings {
            writeln!(f, "warning: {w}")?;
        }
        Ok(())
    }
}

/// What: Check every content tree for completeness and parity, and the shared links.
///
/// Inputs:
/// - `store`: Content store to check
/// - `links`: Shared resource links
///
/// Output:
/// - `ValidationReport`; `has_errors()` is false for a usable store
///
/// Details:
/// - Completeness: all strings non-empty, at least one bullet, option, tool,
///   flow step and roadmap feature; hero highlight inside the hero title;
///   flow step ids are `1..=n`; option and tool ids unique.
/// - Parity: list lengths and ids match the Portuguese tree, which is the
///   reference because it is the default language.
/// - Links: at least one, each with a title and an `http(s)://` URL.
#[must_use]
pub fn validate(store: &ContentStore, links: &[ResourceLink]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (lang, tree) in store.iter() {
        check_completeness(&mut report, lang, tree);
    }
    let reference = store.tree(LanguageCode::default());
    for (lang, tree) in store.iter() {
        if lang != LanguageCode::default() {
            check_parity(&mut report, lang, reference, tree);
        }
    }
    check_links(&mut report, links);
    report
}

fn require(report: &mut ValidationReport, lang: LanguageCode, field: &str, value: &str) {
    if value.trim().is_empty() {
        report.error(lang, format_args!("{field} is empty"));
    }
}

fn require_unique<'a>(
    report: &mut ValidationReport,
    lang: LanguageCode,
    list: &str,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            report.error(lang, format_args!("{list} contains an empty id"));
        } else if !seen.insert(id) {
            report.error(lang, format_args!("{list} id '{id}' is duplicated"));
        }
    }
}

#[allow(clippy::too_many_lines)]
fn check_completeness(report: &mut ValidationReport, lang: LanguageCode, t: &ContentTree) {
    for (field, value) in [
        ("nav.home", &t.nav.home),
        ("nav.pdk", &t.nav.pdk),
        ("nav.tools", &t.nav.tools),
        ("nav.flow", &t.nav.flow),
        ("nav.resources", &t.nav.resources),
        ("hero.title", &t.hero.title),
        ("hero.highlight", &t.hero.highlight),
        ("hero.description", &t.hero.description),
        ("intro.title", &t.intro.title),
        ("intro.description", &t.intro.description),
        ("intro.illustration", &t.intro.illustration),
        ("pdk_section.title", &t.pdk_section.title),
        ("pdk_section.description", &t.pdk_section.description),
        ("pdk_section.card_subtitle", &t.pdk_section.card_subtitle),
        ("tools_section.title", &t.tools_section.title),
        ("tools_section.description", &t.tools_section.description),
        ("flow_section.title", &t.flow_section.title),
        ("flow_section.description", &t.flow_section.description),
        ("resources_section.title", &t.resources_section.title),
        ("resources_section.description", &t.resources_section.description),
        ("resources_section.links_title", &t.resources_section.links_title),
        ("resources_section.roadmap_title", &t.resources_section.roadmap_title),
        (
            "resources_section.roadmap_description",
            &t.resources_section.roadmap_description,
        ),
        ("footer.brand", &t.footer.brand),
        ("footer.rights", &t.footer.rights),
        ("interface.help_title", &t.interface.help_title),
        ("interface.close_hint", &t.interface.close_hint),
        ("interface.quit", &t.interface.quit),
        ("interface.help", &t.interface.help),
        ("interface.next_page", &t.interface.next_page),
        ("interface.prev_page", &t.interface.prev_page),
        ("interface.jump_page", &t.interface.jump_page),
        ("interface.cycle_language", &t.interface.cycle_language),
        ("interface.scroll", &t.interface.scroll),
        ("interface.select_link", &t.interface.select_link),
        ("interface.open_link", &t.interface.open_link),
        ("interface.link_open_failed", &t.interface.link_open_failed),
    ] {
        require(report, lang, field, value);
    }

    if !t.hero.highlight.is_empty() && !t.hero.title.contains(&t.hero.highlight) {
        report.error(
            lang,
            format_args!(
                "hero.highlight '{}' does not occur in hero.title",
                t.hero.highlight
            ),
        );
    }

    if t.intro.bullets.is_empty() {
        report.error(lang, "intro.bullets is empty");
    }
    for (i, b) in t.intro.bullets.iter().enumerate() {
        require(report, lang, &format!("intro.bullets[{i}]"), b);
    }

    if t.pdk_section.options.is_empty() {
        report.error(lang, "pdk_section.options is empty");
    }
    for o in &t.pdk_section.options {
        require(report, lang, &format!("pdk option '{}' name", o.id), &o.name);
        require(report, lang, &format!("pdk option '{}' description", o.id), &o.description);
        require(report, lang, &format!("pdk option '{}' details", o.id), &o.details);
    }
    require_unique(
        report,
        lang,
        "pdk_section.options",
        t.pdk_section.options.iter().map(|o| o.id.as_str()),
    );

    if t.tools_section.tools.is_empty() {
        report.error(lang, "tools_section.tools is empty");
    }
    for tool in &t.tools_section.tools {
        require(report, lang, &format!("tool '{}' name", tool.id), &tool.name);
        require(report, lang, &format!("tool '{}' category", tool.id), &tool.category);
        require(report, lang, &format!("tool '{}' description", tool.id), &tool.description);
    }
    require_unique(
        report,
        lang,
        "tools_section.tools",
        t.tools_section.tools.iter().map(|tool| tool.id.as_str()),
    );

    if t.flow_section.steps.is_empty() {
        report.error(lang, "flow_section.steps is empty");
    }
    for (i, step) in t.flow_section.steps.iter().enumerate() {
        let expected = u32::try_from(i + 1).unwrap_or(u32::MAX);
        if step.id != expected {
            report.error(
                lang,
                format_args!("flow step #{} has id {} (expected {expected})", i + 1, step.id),
            );
        }
        require(report, lang, &format!("flow step {} label", step.id), &step.label);
        require(report, lang, &format!("flow step {} description", step.id), &step.description);
    }

    if t.resources_section.roadmap_features.is_empty() {
        report.error(lang, "resources_section.roadmap_features is empty");
    }
    for (i, f) in t.resources_section.roadmap_features.iter().enumerate() {
        require(report, lang, &format!("resources_section.roadmap_features[{i}]"), f);
    }
}

fn check_len(
    report: &mut ValidationReport,
    lang: LanguageCode,
    list: &str,
    reference: usize,
    actual: usize,
) {
    if reference != actual {
        report.error(
            lang,
            format_args!(
                "{list} has {actual} entries but {} has {reference}",
                LanguageCode::default()
            ),
        );
    }
}

fn check_ids<'a>(
    report: &mut ValidationReport,
    lang: LanguageCode,
    list: &str,
    reference: impl Iterator<Item = &'a str>,
    actual: impl Iterator<Item = &'a str>,
) {
    for (i, (r, a)) in reference.zip(actual).enumerate() {
        if r != a {
            report.error(
                lang,
                format_args!("{list}[{i}] has id '{a}' but {} has '{r}'", LanguageCode::default()),
            );
        }
    }
}

fn check_parity(
    report: &mut ValidationReport,
    lang: LanguageCode,
    reference: &ContentTree,
    t: &ContentTree,
) {
    check_len(
        report,
        lang,
        "intro.bullets",
        reference.intro.bullets.len(),
        t.intro.bullets.len(),
    );
    check_len(
        report,
        lang,
        "pdk_section.options",
        reference.pdk_section.options.len(),
        t.pdk_section.options.len(),
    );
    check_len(
        report,
        lang,
        "tools_section.tools",
        reference.tools_section.tools.len(),
        t.tools_section.tools.len(),
    );
    check_len(
        report,
        lang,
        "flow_section.steps",
        reference.flow_section.steps.len(),
        t.flow_section.steps.len(),
    );
    check_len(
        report,
        lang,
        "resources_section.roadmap_features",
        reference.resources_section.roadmap_features.len(),
        t.resources_section.roadmap_features.len(),
    );

    check_ids(
        report,
        lang,
        "pdk_section.options",
        reference.pdk_section.options.iter().map(|o| o.id.as_str()),
        t.pdk_section.options.iter().map(|o| o.id.as_str()),
    );
    check_ids(
        report,
        lang,
        "tools_section.tools",
        reference.tools_section.tools.iter().map(|x| x.id.as_str()),
        t.tools_section.tools.iter().map(|x| x.id.as_str()),
    );

    // Product names are proper nouns; a translated name is usually a typo.
    for (r, a) in reference
        .pdk_section
        .options
        .iter()
        .zip(&t.pdk_section.options)
    {
        if r.id == a.id && r.name != a.name {
            report.warning(
                lang,
                format_args!(
                    "pdk option '{}' is named '{}' here but '{}' in {}",
                    a.id,
                    a.name,
                    r.name,
                    LanguageCode::default()
                ),
            );
        }
    }
    for (r, a) in reference.tools_section.tools.iter().zip(&t.tools_section.tools) {
        if r.id == a.id && r.name != a.name {
            report.warning(
                lang,
                format_args!(
                    "tool '{}' is named '{}' here but '{}' in {}",
                    a.id,
                    a.name,
                    r.name,
                    LanguageCode::default()
                ),
            );
        }
    }
}

fn check_links(report: &mut ValidationReport, links: &[ResourceLink]) {
    if links.is_empty() {
        report.errors.push("resource link list is empty".to_string());
    }
    for (i, link) in links.iter().enumerate() {
        if link.title.trim().is_empty() {
            report.errors.push(format!("resource link #{i} has an empty title"));
        }
        if !(link.url.starts_with("https://") || link.url.starts_with("http://")) {
            report.errors.push(format!(
                "resource link '{}' has a non-http URL '{}'",
                link.title, link.url
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ResourceKind, resources};

    fn store() -> ContentStore {
        ContentStore::embedded().expect("embedded content parses")
    }

    #[test]
    fn embedded_store_is_clean() {
        let report = validate(&store(), resources());
        assert!(report.is_clean(), "unexpected findings:\n{report}");
    }

    #[test]
    /// What: Emptying a required list is reported for that language only.
    fn empty_tool_list_is_an_error() {
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
        assert!(report.errors.iter().all(|e| !e.starts_with("[pt]")));
    }

    #[test]
    fn list_length_mismatch_breaks_parity() {
        let mut s = store();
        s.tree_mut(LanguageCode::En).intro.bullets.pop();
        let report = validate(&s, resources());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.starts_with("[en] intro.bullets has 3 entries"))
        );
    }

    #[test]
    fn reordered_ids_break_parity() {
        let mut s = store();
        s.tree_mut(LanguageCode::Es).pdk_section.options.swap(0, 1);
        let report = validate(&s, resources());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("pdk_section.options[0] has id 'gf'"))
        );
    }

    #[test]
    fn highlight_must_occur_in_title() {
        let mut s = store();
        s.tree_mut(LanguageCode::Pt).hero.highlight = "Fechado".to_string();
        let report = validate(&s, resources());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("hero.highlight 'Fechado'"))
        );
    }

    #[test]
    fn flow_step_ids_must_be_positions() {
        let mut s = store();
        s.tree_mut(LanguageCode::En).flow_section.steps[2].id = 7;
        let report = validate(&s, resources());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e == "[en] flow step #3 has id 7 (expected 3)")
        );
    }

    #[test]
    fn renamed_tool_is_a_warning() {
        let mut s = store();
        s.tree_mut(LanguageCode::En).tools_section.tools[0].name = "XSchem".to_string();
        let report = validate(&s, resources());
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        let pt = &s.tree(LanguageCode::Pt).tools_section.tools[0];
        assert_eq!(
            report.warnings[0],
            format!(
                "[en] tool '{}' is named 'XSchem' here but '{}' in pt",
                pt.id, pt.name
            )
        );
    }

    #[test]
    fn renamed_pdk_option_names_reference_language() {
        let mut s = store();
        s.tree_mut(LanguageCode::Es).pdk_section.options[0].name = "Otro".to_string();
        let report = validate(&s, resources());
        let pt = &s.tree(LanguageCode::Pt).pdk_section.options[0];
        assert!(report.warnings.iter().any(|w| w
            == &format!(
                "[es] pdk option '{}' is named 'Otro' here but '{}' in pt",
                pt.id, pt.name
            )));
    }

    #[test]
    fn links_need_http_urls_and_titles() {
        let bad = [ResourceLink {
            title: "",
            url: "ftp://example.org",
            kind: ResourceKind::Docs,
        }];
        let report = validate(&store(), &bad);
        assert_eq!(report.errors.len(), 2);
        let report = validate(&store(), &[]);
        assert_eq!(report.errors, vec!["resource link list is empty".to_string()]);
    }
}
