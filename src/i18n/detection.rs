//! System locale detection utilities.

use std::env;

use super::language::LanguageCode;

/// What: Detect system locale from environment variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Option<String>` containing locale code (e.g., "pt-BR") or None if not detectable
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` environment variables in order
/// - Parses locale strings like "pt_BR.UTF-8" -> "pt-BR"
/// - The POSIX "C" and "POSIX" locales carry no language and are skipped
#[must_use]
pub fn detect_system_locale() -> Option<String> {
    let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &locale_vars {
        if let Ok(locale_str) = env::var(var_name)
            && let Some(parsed) = parse_locale_string(&locale_str)
        {
            return Some(parsed);
        }
    }

    None
}

/// What: Detect the system locale and map it onto a supported language.
///
/// Output:
/// - `Some(LanguageCode)` when the detected locale's language is supported; `None` otherwise.
#[must_use]
pub fn detect_system_language() -> Option<LanguageCode> {
    let locale = detect_system_locale()?;
    let lang = LanguageCode::from_code(&locale);
    if lang.is_none() {
        tracing::debug!(locale = %locale, "system locale has no matching content language");
    }
    lang
}

/// What: Parse a locale string from environment variables into a standardized format.
///
/// Inputs:
/// - `locale_str`: Locale string like "pt_BR.UTF-8", "en-US", "es"
///
/// Output:
/// - `Option<String>` with standardized format (e.g., "pt-BR") or None if invalid
///
/// Details:
/// - Converts underscores to hyphens
/// - Removes encoding suffix (.UTF-8, .utf8) and modifiers (@euro)
/// - Lowercases the language part and uppercases the region
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    let locale_part = trimmed.split(['.', '@']).next()?;
    if locale_part.eq_ignore_ascii_case("C") || locale_part.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    let normalized = locale_part.replace('_', "-");
    let parts: Vec<&str> = normalized.split('-').filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        [language] => Some(language.to_lowercase()),
        [language, region] => Some(format!(
            "{}-{}",
            language.to_lowercase(),
            region.to_uppercase()
        )),
        [language, script, region] => Some(format!(
            "{}-{}-{}",
            language.to_lowercase(),
            script,
            region.to_uppercase()
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_string() {
        assert_eq!(
            parse_locale_string("pt_BR.UTF-8"),
            Some("pt-BR".to_string())
        );
        assert_eq!(parse_locale_string("en_US.utf8"), Some("en-US".to_string()));
        assert_eq!(parse_locale_string("es-es"), Some("es-ES".to_string()));
        assert_eq!(parse_locale_string("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(parse_locale_string("en"), Some("en".to_string()));
        assert_eq!(parse_locale_string("C.UTF-8"), None);
        assert_eq!(parse_locale_string("POSIX"), None);
        assert_eq!(parse_locale_string(""), None);
    }

    #[test]
    fn test_detect_system_language_with_env() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let original_lang = env::var("LANG").ok();
        let original_lc_all = env::var("LC_ALL").ok();
        let original_lc_messages = env::var("LC_MESSAGES").ok();

        unsafe {
            env::set_var("LANG", "es_ES.UTF-8");
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
        }
        assert_eq!(detect_system_locale(), Some("es-ES".to_string()));
        assert_eq!(detect_system_language(), Some(LanguageCode::Es));

        // LC_ALL wins over LANG
        unsafe {
            env::set_var("LC_ALL", "fr_FR.UTF-8");
        }
        assert_eq!(detect_system_locale(), Some("fr-FR".to_string()));
        assert_eq!(detect_system_language(), None);

        unsafe {
            match original_lang {
                Some(v) => env::set_var("LANG", v),
                None => env::remove_var("LANG"),
            }
            match original_lc_all {
                Some(v) => env::set_var("LC_ALL", v),
                None => env::remove_var("LC_ALL"),
            }
            match original_lc_messages {
                Some(v) => env::set_var("LC_MESSAGES", v),
                None => env::remove_var("LC_MESSAGES"),
            }
        }
    }
}
