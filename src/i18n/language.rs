//! The closed set of languages the site is published in.

use std::fmt;

/// Language the content tree is rendered in.
///
/// The set is closed: every variant has a content tree compiled into the
/// binary, so lookups over it are exhaustive `match`es and can never miss.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Portuguese, the default language on a fresh start.
    #[default]
    Pt,
    /// English.
    En,
    /// Spanish.
    Es,
}

impl LanguageCode {
    /// All languages in switcher order.
    pub const ALL: [Self; 3] = [Self::Pt, Self::En, Self::Es];

    /// What: Return the lowercase language code used in files and on the command line.
    ///
    /// Output:
    /// - `"pt"`, `"en"` or `"es"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Short uppercase label shown on the language switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pt => "PT",
            Self::En => "EN",
            Self::Es => "ES",
        }
    }

    /// What: Map a language or locale code onto a supported language.
    ///
    /// Inputs:
    /// - `code`: Bare code (`"en"`) or locale tag (`"en-US"`, `"pt_BR.UTF-8"`), any case.
    ///
    /// Output:
    /// - `Some(LanguageCode)` when the primary subtag is supported; `None` otherwise.
    ///
    /// Details:
    /// - Only the primary subtag is compared, so every regional variant of a
    ///   supported language maps onto it.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "pt" => Some(Self::Pt),
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Next language in switcher order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Es,
            Self::Es => Self::Pt,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Regional tags and encodings collapse onto the supported language.
    fn from_code_accepts_locale_tags() {
        assert_eq!(LanguageCode::from_code("pt"), Some(LanguageCode::Pt));
        assert_eq!(LanguageCode::from_code("pt-BR"), Some(LanguageCode::Pt));
        assert_eq!(LanguageCode::from_code("en_US.UTF-8"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_code(" ES "), Some(LanguageCode::Es));
    }

    #[test]
    /// What: Codes outside the closed set are rejected.
    fn from_code_rejects_unsupported() {
        assert_eq!(LanguageCode::from_code("fr"), None);
        assert_eq!(LanguageCode::from_code("de-DE"), None);
        assert_eq!(LanguageCode::from_code(""), None);
    }

    #[test]
    fn next_cycles_through_all_languages() {
        let mut lang = LanguageCode::default();
        assert_eq!(lang, LanguageCode::Pt);
        for expected in [LanguageCode::En, LanguageCode::Es, LanguageCode::Pt] {
            lang = lang.next();
            assert_eq!(lang, expected);
        }
    }

    #[test]
    fn codes_round_trip_through_from_code() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_code(lang.code()), Some(lang));
            assert_eq!(lang.to_string(), lang.code());
        }
    }
}
