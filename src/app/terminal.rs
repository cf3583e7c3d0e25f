use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Enter raw mode and the alternate screen.
///
/// Inputs:
/// - `mouse`: Also enable mouse capture (clickable tabs, languages and links)
///
/// # Errors
/// - Propagates terminal I/O errors from `crossterm`.
pub fn setup_terminal(mouse: bool) -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    if mouse {
        execute!(std::io::stdout(), EnableMouseCapture)?;
    }
    Ok(())
}

/// What: Undo [`setup_terminal`].
///
/// # Errors
/// - Propagates terminal I/O errors from `crossterm`.
///
/// Details:
/// - Mouse capture is disabled unconditionally; doing so when it was never
///   enabled is harmless.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
