use ratatui::{Terminal, backend::CrosstermBackend};

use crate::content::ContentStore;
use crate::events::handle_event;
use crate::i18n::LanguageCode;
use crate::state::{AppState, Page};
use crate::theme::settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod cleanup;

use background::{Channels, spawn_event_thread};
use cleanup::cleanup_on_exit;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Session overrides taken from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartOptions {
    /// Start language; wins over the configured default.
    pub language: Option<LanguageCode>,
    /// Start page; defaults to the home page.
    pub page: Option<Page>,
}

/// What: Run the `OpenIC` TUI end-to-end: initialize terminal and state, drive the
/// event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `store`: Validated content store
/// - `opts`: Start language/page overrides
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Settings (default language, key bindings, footer/mouse toggles) are read
///   once at startup; nothing is written back on exit.
/// - One event is fully applied and redrawn before the next one is read.
/// - The terminal is restored even when the loop fails.
pub async fn run(store: ContentStore, opts: StartOptions) -> Result<()> {
    let settings = settings();
    let mut app = AppState::new(store, &settings);
    if let Some(language) = opts.language {
        app.set_language(language);
    }
    if let Some(page) = opts.page {
        app.set_page(page);
    }
    tracing::info!(
        language = %app.language,
        page = %app.page,
        mouse = app.mouse_enabled,
        "starting UI"
    );

    setup_terminal(app.mouse_enabled)?;
    let mut channels = Channels::new();
    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let result = event_loop(&mut app, &mut channels).await;

    cleanup_on_exit(&app, &channels);
    let restored = restore_terminal();
    result?;
    restored?;
    tracing::info!("UI exited");
    Ok(())
}

/// What: Draw, wait for one event, apply it; repeat until an exit is requested.
///
/// # Errors
/// - Terminal creation or drawing failures.
async fn event_loop(app: &mut AppState, channels: &mut Channels) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    loop {
        terminal.draw(|f| ui(f, app))?;
        let Some(ev) = channels.event_rx.recv().await else {
            tracing::warn!("event channel closed");
            break;
        };
        if handle_event(ev, app) {
            break;
        }
    }
    Ok(())
}
