//! Command-line argument definition and processing.

use clap::{Parser, ValueEnum};

use crate::i18n::LanguageCode;
use crate::state::Page;

/// Output format for `--print`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Wrapped plain text.
    #[default]
    Text,
    /// The rendered page as JSON.
    Json,
}

/// `OpenIC` - a terminal guide to open-source IC design: process kits, EDA tools and the prototyping flow
#[derive(Parser, Debug)]
#[command(name = "openic")]
#[command(version)]
#[command(about = "A terminal guide to open-source IC design in Portuguese, English and Spanish", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Start language (overrides `default_language` in settings.conf)
    #[arg(long, value_enum)]
    pub lang: Option<LanguageCode>,

    /// Start page
    #[arg(long, value_enum)]
    pub page: Option<Page>,

    /// Print the selected page to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Output format for --print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Line width for --print --format text
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Check content completeness and cross-language parity, print the report and exit
    #[arg(long, conflicts_with = "print")]
    pub check_content: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Handle the non-interactive flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(exit_code)` when a one-shot mode ran (`--check-content`, `--print`);
///   `None` when the TUI should start.
///
/// Details:
/// - Reports go to stdout, errors to stderr.
pub fn process_args(args: &Args) -> Option<i32> {
    if args.check_content {
        let mut out = std::io::stdout().lock();
        return Some(crate::args::check::handle_check_content(&mut out));
    }
    if args.print {
        let mut out = std::io::stdout().lock();
        return Some(crate::args::print::handle_print(args, &mut out));
    }
    None
}
