//! Start-language resolution.

use super::detection::detect_system_language;
use super::language::LanguageCode;

/// Configured start language from `settings.conf`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguagePreference {
    /// Always start in this language.
    Fixed(LanguageCode),
    /// Follow the system locale when it names a supported language.
    Auto,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::Fixed(LanguageCode::default())
    }
}

impl LanguagePreference {
    /// What: Parse a `default_language` value from the settings file.
    ///
    /// Inputs:
    /// - `value`: Raw config value (`pt`, `en`, `es`, `auto`, or a locale tag).
    ///
    /// Output:
    /// - `Some(LanguagePreference)` for recognised values; `None` otherwise.
    #[must_use]
    pub fn from_config_value(value: &str) -> Option<Self> {
        let v = value.trim();
        if v.eq_ignore_ascii_case("auto") || v.eq_ignore_ascii_case("system") {
            return Some(Self::Auto);
        }
        LanguageCode::from_code(v).map(Self::Fixed)
    }
}

/// What: Resolve the language the session starts in.
///
/// Inputs:
/// - `cli`: Language passed with `--lang`, if any
/// - `preference`: Configured `default_language`
///
/// Output:
/// - The language to start with
///
/// Details:
/// - Resolution order: command line -> settings -> system locale (only for `auto`) -> `pt`
#[must_use]
pub fn resolve_language(cli: Option<LanguageCode>, preference: LanguagePreference) -> LanguageCode {
    if let Some(lang) = cli {
        tracing::debug!(language = %lang, "start language from command line");
        return lang;
    }
    match preference {
        LanguagePreference::Fixed(lang) => lang,
        LanguagePreference::Auto => detect_system_language().unwrap_or_else(|| {
            tracing::debug!("system locale unsupported; using default language");
            LanguageCode::default()
        }),
    }
}
