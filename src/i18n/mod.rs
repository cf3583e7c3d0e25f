//! Internationalization (i18n) module for `OpenIC`.
//!
//! This module owns the closed set of content languages and decides which one
//! a session starts in.
//!
//! # Overview
//!
//! - **Languages**: [`LanguageCode`] is a closed enumeration (`pt`, `en`, `es`).
//!   Every variant has a content tree compiled into the binary, so content
//!   lookup never fails at runtime.
//! - **Locale Detection**: Reads `LC_ALL`, `LC_MESSAGES`, `LANG` when the user
//!   asks for `default_language = auto` in `settings.conf`.
//! - **Resolution**: command line -> settings -> system locale -> `pt`.
//!
//! The language choice is never written back to disk; every fresh start
//! resolves it again.

mod detection;
mod language;
mod resolver;

pub use detection::{detect_system_language, detect_system_locale};
pub use language::LanguageCode;
pub use resolver::{LanguagePreference, resolve_language};
