use std::fs;
use std::path::PathBuf;

use super::paths::{config_dir, resolve_settings_config_path};

/// Commented skeleton written to `settings.conf` on first run.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "\
# OpenIC settings
# Format: key = value. Lines starting with # or // are comments.

# Language a fresh session starts in: pt, en, es, or auto (follow LANG/LC_ALL).
# The language picked inside the app is not remembered between sessions.
default_language = pt

# Show the key-hint line in the footer.
show_keybinds_footer = true

# Clickable page tabs, language buttons and links.
mouse_enabled = true

# Key bindings. Several chords may be given separated by commas.
# keybind_quit = q, Ctrl+C
# keybind_help = ?, F1
# keybind_next_page = Tab, Right
# keybind_prev_page = Shift+Tab, Left
# keybind_cycle_language = l
# keybind_scroll_up = Up, k
# keybind_scroll_down = Down, j
# keybind_next_link = ]
# keybind_prev_link = [
# keybind_open_link = Enter, o
";

/// What: Return the settings file path, writing the skeleton when none exists.
///
/// Output:
/// - Path of an existing settings file, or the freshly written skeleton.
///
/// Details:
/// - Write failures are logged; the returned path may then not exist and the
///   caller falls back to defaults.
#[must_use]
pub fn ensure_settings_file() -> PathBuf {
    if let Some(existing) = resolve_settings_config_path() {
        return existing;
    }
    let target = config_dir().join("settings.conf");
    match fs::write(&target, SKELETON_SETTINGS_CONTENT) {
        Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "failed to write settings skeleton");
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The skeleton parses to the built-in defaults.
    fn skeleton_matches_defaults() {
        let parsed = crate::theme::settings::parse_settings(SKELETON_SETTINGS_CONTENT);
        assert_eq!(parsed, crate::theme::Settings::default());
    }

    #[test]
    fn ensure_writes_skeleton_once() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var("XDG_CONFIG_HOME");
        }

        let path = ensure_settings_file();
        assert!(path.is_file());
        let written = fs::read_to_string(&path).expect("read skeleton");
        assert_eq!(written, SKELETON_SETTINGS_CONTENT);

        fs::write(&path, "default_language = es\n").expect("overwrite");
        let again = ensure_settings_file();
        assert_eq!(again, path);
        assert_eq!(
            fs::read_to_string(&again).expect("read"),
            "default_language = es\n"
        );

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }
}
