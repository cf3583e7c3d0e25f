//! `OpenIC` application module: terminal lifecycle and the event loop.

/// Runtime event loop and the input thread.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{StartOptions, run};
