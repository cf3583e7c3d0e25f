use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::background::Channels;

/// What: Clean up on exit.
///
/// Details:
/// - Signals the event reading thread to exit.
/// - Nothing is persisted: language and page are session-only.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!(language = %app.language, page = %app.page, "main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
