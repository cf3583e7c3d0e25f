//! Tests for key and mouse dispatch.

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::{handle_event, open_link};
use crate::content::{ContentStore, ResourceKind, ResourceLink};
use crate::i18n::LanguageCode;
use crate::state::{AppState, Modal, Page};
use crate::theme::Settings;

fn app() -> AppState {
    let store = ContentStore::embedded().expect("embedded content parses");
    AppState::new(store, &Settings::default())
}

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn click(column: u16, row: u16) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
fn exit_bindings_request_exit() {
    let mut app = app();
    assert!(handle_event(key(KeyCode::Char('q')), &mut app));
    assert!(handle_event(
        CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        &mut app
    ));
    assert!(!handle_event(key(KeyCode::Char('x')), &mut app));
}

#[test]
/// What: Digit keys jump to pages; Tab and Shift+Tab step through them.
fn page_keys_switch_pages() {
    let mut app = app();
    assert!(!handle_event(key(KeyCode::Char('4')), &mut app));
    assert_eq!(app.page, Page::Flow);
    handle_event(key(KeyCode::Tab), &mut app);
    assert_eq!(app.page, Page::Resources);
    handle_event(key(KeyCode::Tab), &mut app);
    assert_eq!(app.page, Page::Home);
    handle_event(key(KeyCode::BackTab), &mut app);
    assert_eq!(app.page, Page::Resources);
    handle_event(key(KeyCode::Left), &mut app);
    assert_eq!(app.page, Page::Flow);
    handle_event(key(KeyCode::Char('1')), &mut app);
    assert_eq!(app.page, Page::Home);
    // Not a page number
    handle_event(key(KeyCode::Char('9')), &mut app);
    assert_eq!(app.page, Page::Home);
}

#[test]
fn language_key_keeps_page() {
    let mut app = app();
    handle_event(key(KeyCode::Char('3')), &mut app);
    handle_event(key(KeyCode::Char('l')), &mut app);
    assert_eq!(app.language, LanguageCode::En);
    assert_eq!(app.page, Page::Tools);
}

#[test]
fn key_release_is_ignored() {
    let mut app = app();
    let mut ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
    ev.kind = KeyEventKind::Release;
    assert!(!handle_event(CEvent::Key(ev), &mut app));
}

#[test]
/// What: The help modal swallows keys until closed.
fn help_modal_consumes_keys() {
    let mut app = app();
    handle_event(key(KeyCode::Char('?')), &mut app);
    assert_eq!(app.modal, Modal::Help);

    assert!(!handle_event(key(KeyCode::Char('l')), &mut app));
    assert_eq!(app.language, LanguageCode::Pt);
    assert_eq!(app.modal, Modal::Help);

    // `q` closes the modal instead of quitting
    assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
    assert_eq!(app.modal, Modal::None);

    handle_event(key(KeyCode::F(1)), &mut app);
    handle_event(key(KeyCode::F(1)), &mut app);
    assert_eq!(app.modal, Modal::None);
}

#[test]
fn link_keys_only_act_on_resources_page() {
    let mut app = app();
    handle_event(key(KeyCode::Char(']')), &mut app);
    assert_eq!(app.selected_link, 0);

    handle_event(key(KeyCode::Char('5')), &mut app);
    handle_event(key(KeyCode::Char(']')), &mut app);
    handle_event(key(KeyCode::Char(']')), &mut app);
    assert_eq!(app.selected_link, 2);
    handle_event(key(KeyCode::Char('[')), &mut app);
    assert_eq!(app.selected_link, 1);

    // Opening succeeds without spawning under test
    handle_event(key(KeyCode::Enter), &mut app);
    assert_eq!(app.modal, Modal::None);
}

#[test]
/// What: A link that cannot be opened surfaces a localized alert.
fn failed_open_shows_alert() {
    let mut app = app();
    app.set_language(LanguageCode::En);
    let link = ResourceLink {
        title: "Broken",
        url: "gopher://example.org",
        kind: ResourceKind::Docs,
    };
    open_link(&mut app, link);
    let Modal::Alert { message } = &app.modal else {
        panic!("expected alert, got {:?}", app.modal);
    };
    assert!(message.starts_with("Could not open the link: "));

    handle_event(key(KeyCode::Esc), &mut app);
    assert_eq!(app.modal, Modal::None);
}

#[test]
fn scroll_keys_move_within_limits() {
    let mut app = app();
    app.clamp_scroll(5);
    handle_event(key(KeyCode::Char('j')), &mut app);
    handle_event(key(KeyCode::Down), &mut app);
    assert_eq!(app.scroll, 2);
    handle_event(key(KeyCode::Up), &mut app);
    assert_eq!(app.scroll, 1);
    handle_event(key(KeyCode::Home), &mut app);
    assert_eq!(app.scroll, 0);
}

#[test]
/// What: Clicks hit-test the rectangles recorded by the last draw.
fn mouse_clicks_switch_page_and_language() {
    let mut app = app();
    app.nav_tab_rects = vec![(Page::Home, (10, 1, 8, 1)), (Page::Pdk, (19, 1, 8, 1))];
    app.lang_button_rects = vec![(LanguageCode::Es, (70, 1, 4, 1))];

    handle_event(click(20, 1), &mut app);
    assert_eq!(app.page, Page::Pdk);
    handle_event(click(71, 1), &mut app);
    assert_eq!(app.language, LanguageCode::Es);
    assert_eq!(app.page, Page::Pdk);

    // Miss
    handle_event(click(0, 0), &mut app);
    assert_eq!((app.language, app.page), (LanguageCode::Es, Page::Pdk));
}

#[test]
fn mouse_wheel_scrolls_and_respects_toggle() {
    let mut app = app();
    app.clamp_scroll(10);
    let wheel = CEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 5,
        row: 5,
        modifiers: KeyModifiers::empty(),
    });
    handle_event(wheel.clone(), &mut app);
    assert_eq!(app.scroll, 3);

    app.mouse_enabled = false;
    handle_event(wheel, &mut app);
    assert_eq!(app.scroll, 3);
}

#[test]
fn click_closes_modal_first() {
    let mut app = app();
    app.nav_tab_rects = vec![(Page::Tools, (0, 0, 5, 1))];
    app.modal = Modal::Help;
    handle_event(click(1, 0), &mut app);
    assert_eq!(app.modal, Modal::None);
    assert_eq!(app.page, Page::Home);
}
