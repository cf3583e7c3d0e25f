use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{WHEEL_STEP, open_link};
use crate::content::resources;
use crate::state::app_state::Rect;
use crate::state::{AppState, Modal, Page};

/// Return `true` when `(x, y)` falls inside `rect`.
const fn point_in(rect: Rect, x: u16, y: u16) -> bool {
    let (rx, ry, rw, rh) = rect;
    x >= rx && x < rx.saturating_add(rw) && y >= ry && y < ry.saturating_add(rh)
}

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and button
/// - `app`: Mutable application state (hit-test rects recorded by the last draw)
///
/// Details:
/// - Modal-first: any click closes an open modal and is consumed.
/// - Left click on a navbar tab switches page, on a language button switches
///   language, on a resources link selects and opens it.
/// - The wheel scrolls the body.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal != Modal::None {
                app.modal = Modal::None;
                return;
            }
            if let Some(&(page, _)) = app
                .nav_tab_rects
                .iter()
                .find(|(_, r)| point_in(*r, mx, my))
            {
                app.set_page(page);
                return;
            }
            if let Some(&(lang, _)) = app
                .lang_button_rects
                .iter()
                .find(|(_, r)| point_in(*r, mx, my))
            {
                app.set_language(lang);
                return;
            }
            let hit = app
                .link_rects
                .iter()
                .find(|(_, r)| point_in(*r, mx, my))
                .map(|&(index, _)| index);
            if app.page == Page::Resources
                && let Some(index) = hit
                && app.select_link(index)
                && let Some(link) = resources().get(index).copied()
            {
                open_link(app, link);
            }
        }
        MouseEventKind::ScrollUp if app.modal == Modal::None => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::ScrollDown if app.modal == Modal::None => app.scroll_by(WHEEL_STEP),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::point_in;

    #[test]
    fn point_in_excludes_far_edges() {
        let r = (2, 1, 4, 1);
        assert!(point_in(r, 2, 1));
        assert!(point_in(r, 5, 1));
        assert!(!point_in(r, 6, 1));
        assert!(!point_in(r, 3, 2));
        assert!(!point_in(r, 1, 1));
    }
}
