//! Terminal rendering: navbar, page body, footer and modal overlays.
//!
//! Drawing takes `&mut AppState` because each frame records the clickable
//! rectangles and scroll limits the event layer hit-tests against.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod body;
mod footer;
pub mod helpers;
mod modals;
mod navbar;

pub use body::{BodyLayout, layout_page};
pub use footer::copyright_line;
pub use modals::help_rows;
pub use navbar::BRAND;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; hit-test rectangles and scroll limits are updated
///
/// Details:
/// - Layout: navbar (3 rows), body (remaining), footer (1 or 2 rows), then any
///   modal on top.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(footer::footer_height(app)),
        ])
        .split(area);

    navbar::render_navbar(f, app, chunks[0]);
    body::render_body(f, app, chunks[1]);
    footer::render_footer(f, app, chunks[2]);
    modals::render_modals(f, app, area);
}
