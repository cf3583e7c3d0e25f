//! Event handling layer: maps terminal input onto [`AppState`] transitions.
//!
//! Every handler runs to completion (state mutation only) before the runtime
//! draws the next frame, so events are applied strictly in arrival order.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::content::ResourceLink;
use crate::state::{AppState, Modal, Page};
use crate::theme::KeyChord;

mod mouse;

#[cfg(test)]
mod tests;

/// Lines moved per mouse-wheel notch.
pub const WHEEL_STEP: i32 = 3;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key_event(ke, app),
        CEvent::Mouse(m) => {
            if app.mouse_enabled {
                mouse::handle_mouse_event(m, app);
            }
            false
        }
        _ => false,
    }
}

fn matches_any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
    list.iter().any(|c| c.matches(code, mods))
}

/// What: Handle one key press.
///
/// Details:
/// - Modal-first: an open modal consumes every key; `Esc`, `Enter`, `q` or the
///   help binding close it.
/// - Digits `1`..`5` jump straight to a page.
/// - Link bindings only act on the resources page.
fn handle_key_event(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    let (code, mods) = (ke.code, ke.modifiers);

    if app.modal != Modal::None {
        let closes = matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'))
            || (app.modal == Modal::Help && matches_any(&app.keymap.help_overlay, code, mods));
        if closes {
            app.modal = Modal::None;
        }
        return false;
    }

    let km = &app.keymap;
    if matches_any(&km.exit, code, mods) {
        return true;
    }
    if matches_any(&km.help_overlay, code, mods) {
        app.modal = Modal::Help;
    } else if matches_any(&km.page_next, code, mods) {
        app.next_page();
    } else if matches_any(&km.page_prev, code, mods) {
        app.prev_page();
    } else if matches_any(&km.cycle_language, code, mods) {
        app.cycle_language();
    } else if matches_any(&km.scroll_up, code, mods) {
        app.scroll_by(-1);
    } else if matches_any(&km.scroll_down, code, mods) {
        app.scroll_by(1);
    } else if matches_any(&km.scroll_page_up, code, mods) {
        app.scroll_page(false);
    } else if matches_any(&km.scroll_page_down, code, mods) {
        app.scroll_page(true);
    } else if matches_any(&km.scroll_top, code, mods) {
        app.scroll_to_top();
    } else if app.page == Page::Resources && matches_any(&km.link_next, code, mods) {
        app.select_next_link();
    } else if app.page == Page::Resources && matches_any(&km.link_prev, code, mods) {
        app.select_prev_link();
    } else if matches_any(&km.link_open, code, mods) {
        if let Some(link) = app.selected_resource() {
            open_link(app, link);
        }
    } else if let KeyCode::Char(d @ '1'..='5') = code
        && !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && let Some(page) = d
            .to_digit(10)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|n| Page::from_index(n - 1))
    {
        app.set_page(page);
    }
    false
}

/// What: Open a resource link in the system browser.
///
/// Details:
/// - A failure is shown as an alert with the localized prefix; the state is
///   otherwise unchanged.
pub fn open_link(app: &mut AppState, link: ResourceLink) {
    match crate::util::open_url(link.url) {
        Ok(()) => tracing::info!(url = link.url, "opened link"),
        Err(e) => {
            tracing::warn!(url = link.url, error = %e, "failed to open link");
            let prefix = &app.store.tree(app.language).interface.link_open_failed;
            app.modal = Modal::Alert {
                message: format!("{prefix}: {e}"),
            };
        }
    }
}
