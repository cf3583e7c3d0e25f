//! `--print`: render one page to stdout without starting the TUI.

use std::io::Write;

use crate::args::{Args, OutputFormat};
use crate::content::{ContentStore, load_checked};
use crate::i18n::{LanguageCode, resolve_language};
use crate::state::Page;
use crate::view::{render, to_plain_text};

/// What: Render `page` in `language` in the requested format.
///
/// Output:
/// - Text ending in a newline.
///
/// # Errors
/// - JSON serialization failure (not expected for rendered views).
pub fn render_page(
    store: &ContentStore,
    language: LanguageCode,
    page: Page,
    format: OutputFormat,
    width: usize,
) -> Result<String, serde_json::Error> {
    let view = render(store, language, page);
    match format {
        OutputFormat::Text => Ok(to_plain_text(&view, width)),
        OutputFormat::Json => serde_json::to_string_pretty(&view).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

/// What: Handle `--print`.
///
/// Output:
/// - Exit code: `0` on success; `1` when content fails validation or output fails.
///
/// Details:
/// - The language follows `--lang`, then `default_language` from settings.
/// - The page follows `--page`, defaulting to home.
pub fn handle_print(args: &Args, out: &mut impl Write) -> i32 {
    let store = match load_checked() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("openic: {e}");
            return 1;
        }
    };
    let language = resolve_language(args.lang, crate::theme::settings().default_language);
    let page = args.page.unwrap_or_default();
    tracing::debug!(%language, %page, format = ?args.format, "printing page");
    let text = match render_page(&store, language, page, args.format, args.width) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("openic: {e}");
            return 1;
        }
    };
    match out.write_all(text.as_bytes()) {
        Ok(()) => 0,
        Err(e) => {
            tracing::warn!(error = %e, "failed to write page");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::embedded().expect("embedded content parses")
    }

    #[test]
    fn text_output_has_header_and_content() {
        let s = store();
        let text = render_page(&s, LanguageCode::Pt, Page::Home, OutputFormat::Text, 60)
            .expect("render");
        assert!(text.starts_with("Início · PT\n"));
        assert!(text.contains("Prototipagem de CIs com Ferramentas de Código Aberto."));
    }

    #[test]
    fn json_output_parses_back() {
        let s = store();
        let json = render_page(&s, LanguageCode::En, Page::Pdk, OutputFormat::Json, 80)
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["language"], "en");
        assert_eq!(value["page"], "pdk");
        let cards = value["blocks"]
            .as_array()
            .expect("blocks array")
            .iter()
            .filter(|b| b["type"] == "card")
            .count();
        assert_eq!(cards, s.tree(LanguageCode::En).pdk_section.options.len());
    }

    #[test]
    /// What: Every language and page renders in both formats; JSON parses back.
    fn every_pair_renders_in_both_formats() {
        let s = store();
        for lang in LanguageCode::ALL {
            for page in Page::ALL {
                for format in [OutputFormat::Text, OutputFormat::Json] {
                    let out = render_page(&s, lang, page, format, 72)
                        .unwrap_or_else(|e| panic!("{lang}/{page}/{format:?}: {e}"));
                    assert!(out.ends_with('\n'));
                    if format == OutputFormat::Json {
                        let value: serde_json::Value =
                            serde_json::from_str(&out).expect("valid json");
                        assert_eq!(value["language"], lang.code());
                        assert_eq!(value["page"], page.key());
                    }
                }
            }
        }
    }

    #[test]
    /// What: `--print --format json` runs end to end and exits 0.
    fn handle_print_writes_json_page() {
        use clap::Parser;

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

        let args = Args::try_parse_from([
            "openic", "--print", "--lang", "es", "--page", "resources", "--format", "json",
        ])
        .expect("parse");
        let mut buf = Vec::new();
        let code = handle_print(&args, &mut buf);

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            }
        }

        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value["language"], "es");
        assert_eq!(value["page"], "resources");
        assert_eq!(value["blocks"][0]["type"], "heading");
    }
}
