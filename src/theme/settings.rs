use std::fs;

use super::config::ensure_settings_file;
use super::parsing::{parse_bool, parse_key_chord_list, strip_inline_comment};
use super::types::Settings;
use crate::i18n::LanguagePreference;

/// What: Load user settings from `settings.conf`.
///
/// Output:
/// - Parsed `Settings`; `Settings::default()` when the file is missing or unreadable.
///
/// Details:
/// - Writes the commented skeleton on first run.
#[must_use]
pub fn settings() -> Settings {
    let path = ensure_settings_file();
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings unreadable; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `settings.conf` text into [`Settings`].
///
/// Inputs:
/// - `content`: File contents in `key = value` form
///
/// Output:
/// - Settings with every recognised key applied over the defaults
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are read as `_`.
/// - Unknown keys and unparsable values are logged and skipped.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        let km = &mut out.keymap;
        let applied = match key.as_str() {
            "default_language" | "language" | "locale" => apply(
                &mut out.default_language,
                LanguagePreference::from_config_value(val),
            ),
            "show_keybinds_footer" => apply(&mut out.show_keybinds_footer, parse_bool(val)),
            "mouse_enabled" | "mouse" => apply(&mut out.mouse_enabled, parse_bool(val)),
            // Keybindings; a value replaces the whole default list for the action
            "keybind_quit" | "keybind_exit" => apply(&mut km.exit, parse_key_chord_list(val)),
            "keybind_help" | "keybind_help_overlay" => {
                apply(&mut km.help_overlay, parse_key_chord_list(val))
            }
            "keybind_next_page" | "keybind_page_next" => {
                apply(&mut km.page_next, parse_key_chord_list(val))
            }
            "keybind_prev_page" | "keybind_page_prev" => {
                apply(&mut km.page_prev, parse_key_chord_list(val))
            }
            "keybind_cycle_language" | "keybind_language" => {
                apply(&mut km.cycle_language, parse_key_chord_list(val))
            }
            "keybind_scroll_up" => apply(&mut km.scroll_up, parse_key_chord_list(val)),
            "keybind_scroll_down" => apply(&mut km.scroll_down, parse_key_chord_list(val)),
            "keybind_next_link" | "keybind_link_next" => {
                apply(&mut km.link_next, parse_key_chord_list(val))
            }
            "keybind_prev_link" | "keybind_link_prev" => {
                apply(&mut km.link_prev, parse_key_chord_list(val))
            }
            "keybind_open_link" | "keybind_link_open" => {
                apply(&mut km.link_open, parse_key_chord_list(val))
            }
            _ => {
                tracing::warn!(key = %key, "unknown settings key ignored");
                continue;
            }
        };
        if !applied {
            tracing::warn!(key = %key, value = %val, "invalid settings value ignored");
        }
    }
    out
}

/// Store `parsed` into `slot` when present; report whether it was.
fn apply<T>(slot: &mut T, parsed: Option<T>) -> bool {
    if let Some(v) = parsed {
        *slot = v;
        true
    } else {
        false
    }
}
