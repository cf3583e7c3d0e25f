//! Content store: the localized content trees and the shared resource links.
//!
//! All content is compiled into the binary and built once at startup. Lookups
//! are keyed by the closed [`LanguageCode`](crate::i18n::LanguageCode)
//! enumeration and cannot fail; integrity problems in the data are caught by
//! [`validate`] before anything is drawn.

mod resources;
mod store;
mod types;
mod validate;

pub use resources::resources;
pub use store::{ContentStore, parse_tree};
pub use types::{
    ContentTree, FlowSection, FlowStep, Footer, Hero, Interface, Intro, NavLabels, PdkOption,
    PdkSection, ResourceKind, ResourceLink, ResourcesSection, Tool, ToolsSection,
};
pub use validate::{ValidationReport, validate};

use crate::i18n::LanguageCode;

/// Content integrity failures detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A locale document could not be deserialized.
    #[error("content for '{language}' failed to parse: {source}")]
    Parse {
        /// Language whose document is broken.
        language: LanguageCode,
        /// Underlying YAML error.
        #[source]
        source: serde_norway::Error,
    },
    /// The store parsed but failed the completeness/parity check.
    #[error("content store failed validation with {} error(s)", .0.errors.len())]
    Invalid(ValidationReport),
}

/// What: Build the embedded store and reject it if it fails validation.
///
/// Output:
/// - `Ok(ContentStore)` ready for rendering.
///
/// # Errors
/// - `ContentError::Parse` when a locale document is malformed.
/// - `ContentError::Invalid` when completeness or parity checks report errors.
///
/// Details:
/// - Warnings are logged and do not fail the load.
pub fn load_checked() -> Result<ContentStore, ContentError> {
    let store = ContentStore::embedded()?;
    let report = validate(&store, resources());
    for w in &report.warnings {
        tracing::warn!(finding = %w, "content warning");
    }
    if report.has_errors() {
        for e in &report.errors {
            tracing::error!(finding = %e, "content error");
        }
        return Err(ContentError::Invalid(report));
    }
    tracing::info!(
        languages = LanguageCode::ALL.len(),
        links = resources().len(),
        "content store loaded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_checked_accepts_embedded_content() {
        assert!(load_checked().is_ok());
    }

    #[test]
    fn invalid_error_counts_findings() {
        let report = ValidationReport {
            errors: vec!["a".into(), "b".into()],
            warnings: vec![],
        };
        let err = ContentError::Invalid(report);
        assert_eq!(
            err.to_string(),
            "content store failed validation with 2 error(s)"
        );
    }
}
