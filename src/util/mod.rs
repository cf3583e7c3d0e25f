//! Small helpers that touch the host system.

use std::process::{Command, Stdio};

/// What: Check that `url` is something a browser should be asked to open.
///
/// # Errors
/// - Returns a message when the scheme is not `http` or `https`.
pub fn check_url(url: &str) -> Result<(), String> {
    let lower = url.trim().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Ok(())
    } else {
        Err(format!("unsupported URL: {url}"))
    }
}

/// What: Open `url` in the system browser as a new, independent browsing context.
///
/// Inputs:
/// - `url`: Absolute `http`/`https` URL
///
/// Output:
/// - `Ok(())` once the opener process has been spawned.
///
/// # Errors
/// - The URL scheme is not `http`/`https`.
/// - No opener program is available, or spawning it failed.
///
/// Details:
/// - The child is detached from the terminal (null stdio) and not awaited.
/// - Under `cfg(test)` nothing is spawned; only the URL check runs.
pub fn open_url(url: &str) -> Result<(), String> {
    check_url(url)?;
    if cfg!(test) {
        return Ok(());
    }
    spawn_opener(url)
}

#[cfg(target_os = "windows")]
fn spawn_opener(url: &str) -> Result<(), String> {
    // Empty title argument so `start` does not treat the URL as one
    Command::new("cmd")
        .args(["/c", "start", "", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("cmd start: {e}"))
}

/// Spawn `xdg-open` (Linux/BSD) or `open` (macOS), whichever is on `PATH`.
#[cfg(not(target_os = "windows"))]
fn spawn_opener(url: &str) -> Result<(), String> {
    let opener = ["xdg-open", "open"]
        .into_iter()
        .find_map(|cmd| which::which(cmd).ok())
        .ok_or_else(|| "neither xdg-open nor open found".to_string())?;
    Command::new(&opener)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("{}: {e}", opener.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_url_accepts_web_schemes_only() {
        assert!(check_url("https://efabless.com/").is_ok());
        assert!(check_url("HTTP://example.org").is_ok());
        assert!(check_url("file:///etc/passwd").is_err());
        assert!(check_url("javascript:alert(1)").is_err());
        assert!(check_url("").is_err());
    }

    #[test]
    fn open_url_does_not_spawn_under_test() {
        assert_eq!(open_url("https://github.com/RTimothyEdwards/open_pdks"), Ok(()));
        assert!(open_url("ftp://example.org").is_err());
    }
}
