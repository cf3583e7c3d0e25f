//! UI state: the current page, language and viewport bookkeeping.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::Page;
