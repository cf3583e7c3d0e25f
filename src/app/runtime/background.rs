use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// How long the input thread blocks in `poll` before rechecking the cancel flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events flow from the input thread to the single consumer in the
///   event loop.
pub struct Channels {
    /// Sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver drained by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
}

impl Channels {
    /// Create the event channel and its cancellation flag.
    pub(super) fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// What: Spawn the thread that reads terminal events and forwards them.
///
/// Inputs:
/// - `event_tx`: Sender for terminal events
/// - `cancelled`: Set to `true` to stop the thread
///
/// Details:
/// - Polls with a short timeout so the cancel flag is noticed promptly.
/// - Exits when the receiver is dropped or the flag is set; transient read
///   errors are ignored.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(POLL_INTERVAL) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("event thread stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_deliver_in_order() {
        let mut ch = Channels::new();
        ch.event_tx.send(CEvent::FocusGained).expect("send");
        ch.event_tx.send(CEvent::FocusLost).expect("send");
        assert_eq!(ch.event_rx.try_recv().ok(), Some(CEvent::FocusGained));
        assert_eq!(ch.event_rx.try_recv().ok(), Some(CEvent::FocusLost));
        assert!(!ch.event_thread_cancelled.load(Ordering::Relaxed));
    }
}
