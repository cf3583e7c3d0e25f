//! Immutable language -> content tree mapping.

use crate::i18n::LanguageCode;

use super::ContentError;
use super::types::ContentTree;

/// Locale documents compiled into the binary.
const PT_SOURCE: &str = include_str!("../../locales/pt.yml");
const EN_SOURCE: &str = include_str!("../../locales/en.yml");
const ES_SOURCE: &str = include_str!("../../locales/es.yml");

/// Content trees for every [`LanguageCode`].
///
/// One field per language keeps [`ContentStore::tree`] an exhaustive `match`:
/// adding a language without a tree does not compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentStore {
    pt: ContentTree,
    en: ContentTree,
    es: ContentTree,
}

impl ContentStore {
    /// What: Build the store from the locale documents embedded at compile time.
    ///
    /// Output:
    /// - `Ok(ContentStore)` when all three documents parse.
    ///
    /// # Errors
    /// - `ContentError::Parse` naming the first language whose document is
    ///   malformed, has unknown fields, or misses a field.
    ///
    /// Details:
    /// - Parsing does not check list lengths or parity; run
    ///   [`crate::content::validate`] on the result for that.
    pub fn embedded() -> Result<Self, ContentError> {
        let store = Self {
            pt: parse_tree(LanguageCode::Pt, PT_SOURCE)?,
            en: parse_tree(LanguageCode::En, EN_SOURCE)?,
            es: parse_tree(LanguageCode::Es, ES_SOURCE)?,
        };
        tracing::debug!("content store built from embedded locale documents");
        Ok(store)
    }

    /// Assemble a store from already-built trees.
    #[must_use]
    pub const fn from_trees(pt: ContentTree, en: ContentTree, es: ContentTree) -> Self {
        Self { pt, en, es }
    }

    /// What: Return the content tree for `language`.
    ///
    /// Details:
    /// - Constant-time and infallible over the closed language set.
    #[must_use]
    pub const fn tree(&self, language: LanguageCode) -> &ContentTree {
        match language {
            LanguageCode::Pt => &self.pt,
            LanguageCode::En => &self.en,
            LanguageCode::Es => &self.es,
        }
    }

    /// Mutable access, used to build defective stores in tests.
    pub const fn tree_mut(&mut self, language: LanguageCode) -> &mut ContentTree {
        match language {
            LanguageCode::Pt => &mut self.pt,
            LanguageCode::En => &mut self.en,
            LanguageCode::Es => &mut self.es,
        }
    }

    /// Iterate `(language, tree)` pairs in switcher order.
    pub fn iter(&self) -> impl Iterator<Item = (LanguageCode, &ContentTree)> {
        LanguageCode::ALL.into_iter().map(|lang| (lang, self.tree(lang)))
    }
}

/// What: Parse one locale YAML document into a [`ContentTree`].
///
/// Inputs:
/// - `language`: Language the document belongs to (used for error reporting)
/// - `source`: YAML text
///
/// # Errors
/// - `ContentError::Parse` when `serde_norway` rejects the document
pub fn parse_tree(language: LanguageCode, source: &str) -> Result<ContentTree, ContentError> {
    serde_norway::from_str(source).map_err(|source| ContentError::Parse { language, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_documents_parse() {
        let store = ContentStore::embedded().expect("embedded content parses");
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    /// What: Each language maps onto its own tree.
    fn tree_lookup_is_per_language() {
        let store = ContentStore::embedded().expect("embedded content parses");
        assert_eq!(
            store.tree(LanguageCode::Pt).hero.title,
            "Prototipagem de CIs com Ferramentas de Código Aberto."
        );
        assert_eq!(
            store.tree(LanguageCode::En).hero.title,
            "Prototyping ICs with Open-Source Tools."
        );
        assert_eq!(
            store.tree(LanguageCode::Es).hero.title,
            "Prototipado de CIs con Herramientas de Código Abierto."
        );
        assert_eq!(store.tree(LanguageCode::En).nav.pdk, "PDK Options");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let doc = EN_SOURCE.replacen("nav:", "nav:\n  extra: \"x\"", 1);
        let err = parse_tree(LanguageCode::En, &doc).expect_err("unknown field must fail");
        assert!(matches!(err, ContentError::Parse { language: LanguageCode::En, .. }));
        assert!(err.to_string().contains("en"));
    }

    #[test]
    fn missing_sections_are_rejected() {
        let doc = "nav:\n  home: \"Home\"\n";
        assert!(parse_tree(LanguageCode::Pt, doc).is_err());
    }
}
