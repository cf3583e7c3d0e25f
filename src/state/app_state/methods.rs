//! Implementation methods for `AppState`.

use crate::content::{ResourceLink, resources};
use crate::i18n::LanguageCode;
use crate::state::app_state::AppState;
use crate::state::types::Page;
use crate::view::{self, PageView};

impl AppState {
    /// What: Switch the display language.
    ///
    /// Inputs:
    /// - `language`: New language
    ///
    /// Details:
    /// - Page, scroll offset and link selection are left untouched.
    pub fn set_language(&mut self, language: LanguageCode) {
        if self.language != language {
            tracing::debug!(from = %self.language, to = %language, "language changed");
        }
        self.language = language;
    }

    /// What: Switch the current page.
    ///
    /// Inputs:
    /// - `page`: New page
    ///
    /// Details:
    /// - Scrolls the body back to the top and selects the first link.
    /// - The language is left untouched.
    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(from = %self.page, to = %page, "page changed");
        }
        self.page = page;
        self.scroll = 0;
        self.selected_link = 0;
        self.follow_selection = false;
    }

    /// What: Render the current `(language, page)` pair.
    ///
    /// Output:
    /// - `PageView` for the body; equal for equal state.
    #[must_use]
    pub fn render(&self) -> PageView {
        view::render(&self.store, self.language, self.page)
    }

    /// Move to the next page in navigation order (wraps).
    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    /// Move to the previous page in navigation order (wraps).
    pub fn prev_page(&mut self) {
        self.set_page(self.page.prev());
    }

    /// Switch to the next language in switcher order (wraps).
    pub fn cycle_language(&mut self) {
        self.set_language(self.language.next());
    }

    /// What: Scroll the body by `delta` lines.
    ///
    /// Inputs:
    /// - `delta`: Negative scrolls up, positive scrolls down
    ///
    /// Details:
    /// - Clamped to `0..=max_scroll` as measured by the last draw.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = u16::try_from(next).unwrap_or(self.max_scroll);
    }

    /// Scroll by one viewport height (minus one line of overlap).
    pub fn scroll_page(&mut self, down: bool) {
        let step = i32::from(self.body_height.saturating_sub(1).max(1));
        self.scroll_by(if down { step } else { -step });
    }

    /// Jump back to the top of the body.
    pub const fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// What: Record the scroll limit measured during draw and clamp the offset to it.
    ///
    /// Inputs:
    /// - `max_scroll`: Content height minus viewport height, saturating at zero
    pub fn clamp_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    /// Select the next resource link, wrapping to the first.
    pub fn select_next_link(&mut self) {
        let n = resources().len();
        if n == 0 {
            return;
        }
        self.selected_link = (self.selected_link + 1) % n;
        self.follow_selection = true;
    }

    /// Select the previous resource link, wrapping to the last.
    pub fn select_prev_link(&mut self) {
        let n = resources().len();
        if n == 0 {
            return;
        }
        self.selected_link = (self.selected_link + n - 1) % n;
        self.follow_selection = true;
    }

    /// What: Select a specific resource link, e.g. after a mouse click.
    ///
    /// Output:
    /// - `true` when `index` names an existing link.
    pub fn select_link(&mut self, index: usize) -> bool {
        if index < resources().len() {
            self.selected_link = index;
            true
        } else {
            false
        }
    }

    /// What: Return the selected link when the resources page is shown.
    ///
    /// Output:
    /// - `Some(ResourceLink)` on the resources page; `None` on every other page.
    #[must_use]
    pub fn selected_resource(&self) -> Option<ResourceLink> {
        if self.page != Page::Resources {
            return None;
        }
        resources().get(self.selected_link).copied()
    }
}
