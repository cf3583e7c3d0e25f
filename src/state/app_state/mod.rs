//! Central `AppState` container: the view controller of the application.

use chrono::{Datelike, Local};

use crate::content::ContentStore;
use crate::i18n::{LanguageCode, resolve_language};
use crate::state::modal::Modal;
use crate::state::types::Page;
use crate::theme::{KeyMap, Settings};

mod methods;


/// Clickable rectangle in terminal cells: `(x, y, width, height)`.
pub type Rect = (u16, u16, u16, u16);

/// Global application state shared by the event and UI layers.
///
/// The content store is immutable; only the language, the page and the
/// viewport bookkeeping change. Nothing here is persisted between runs.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Localized content for every language.
    pub store: ContentStore,
    /// Language the page is shown in.
    pub language: LanguageCode,
    /// Page shown in the body.
    pub page: Page,
    /// Vertical scroll offset of the body, in wrapped lines.
    pub scroll: u16,
    /// Largest valid scroll offset for the current page and viewport size.
    /// Updated on every draw.
    pub max_scroll: u16,
    /// Height of the body viewport in rows, recorded during draw.
    pub body_height: u16,
    /// Index into [`crate::content::resources`] of the selected link.
    pub selected_link: usize,
    /// When set, the next draw scrolls the selected link into view.
    pub follow_selection: bool,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Configurable key bindings.
    pub keymap: KeyMap,
    /// Show the key-hint line in the footer.
    pub show_keybinds_footer: bool,
    /// Whether mouse capture is active.
    pub mouse_enabled: bool,
    /// Year printed in the footer notice.
    pub copyright_year: i32,

    // Mouse hit-test rectangles, recorded during draw
    /// Navbar tab for each page.
    pub nav_tab_rects: Vec<(Page, Rect)>,
    /// Navbar button for each language.
    pub lang_button_rects: Vec<(LanguageCode, Rect)>,
    /// Visible link rows on the resources page, keyed by resource index.
    pub link_rects: Vec<(usize, Rect)>,
    /// Inner content rectangle of the body panel.
    pub body_rect: Option<Rect>,
}

impl AppState {
    /// What: Create the controller for a freshly loaded content store.
    ///
    /// Inputs:
    /// - `store`: Validated content store
    /// - `settings`: User settings (default language, key bindings, toggles)
    ///
    /// Output:
    /// - State on the home page, scrolled to the top, with no modal open.
    ///
    /// Details:
    /// - The language comes from the settings default; `auto` consults the
    ///   process locale and falls back to Portuguese.
    #[must_use]
    pub fn new(store: ContentStore, settings: &Settings) -> Self {
        let language = resolve_language(None, settings.default_language);
        Self {
            store,
            language,
            page: Page::default(),
            scroll: 0,
            max_scroll: 0,
            body_height: 0,
            selected_link: 0,
            follow_selection: false,
            modal: Modal::None,
            keymap: settings.keymap.clone(),
            show_keybinds_footer: settings.show_keybinds_footer,
            mouse_enabled: settings.mouse_enabled,
            copyright_year: Local::now().year(),
            nav_tab_rects: Vec::new(),
            lang_button_rects: Vec::new(),
            link_rects: Vec::new(),
            body_rect: None,
        }
    }
}
