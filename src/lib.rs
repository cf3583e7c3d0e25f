//! Library entry for `OpenIC` exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod content;
pub mod events;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
pub mod view;
