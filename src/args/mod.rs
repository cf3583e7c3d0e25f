//! Command-line argument parsing and handling.

pub mod check;
pub mod definition;
pub mod print;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, OutputFormat, process_args};
pub use utils::determine_log_level;
