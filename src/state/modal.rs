//! Modal dialog state for the UI.

/// Overlay drawn above the page body. While a modal is open it consumes all
/// key presses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// One-line message, e.g. a link that could not be opened.
    Alert {
        /// Text shown in the alert.
        message: String,
    },
}
