//! Theme, key bindings and user settings for `OpenIC`.
//!
//! The palette is fixed; visual theming is not configurable. Settings live in
//! `settings.conf` under the config directory and only carry the start
//! language default, footer/mouse toggles and key bindings.

/// Settings skeleton and first-run file creation.
mod config;
/// Config value parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Theme type definitions.
mod types;

pub use config::ensure_settings_file;
pub use paths::{config_dir, logs_dir};
pub use settings::{parse_settings, settings};
pub use types::{KeyChord, KeyMap, Settings, Theme, chords_label};

/// Return the application's theme palette.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide the process-wide mutex shared by every test that mutates environment variables.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Uses `OnceLock` to ensure the mutex is constructed exactly once per process.
/// - Locale tests (`LANG`, `LC_*`) and config-path tests (`HOME`, `XDG_CONFIG_HOME`) lock
///   this same mutex, so no two tests ever rewrite the environment concurrently.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
