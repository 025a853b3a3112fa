//! Best-effort clipboard integration.
//!
//! The rendered text is piped into whichever platform clipboard utility is
//! available. Failures never abort the command: the text was already printed,
//! so a missed copy is only logged.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

#[cfg(target_os = "macos")]
const UTILITIES: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const UTILITIES: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const UTILITIES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy `text` to the system clipboard.
///
/// Returns false when no utility accepted the text.
pub fn copy(text: &str) -> bool {
    for utility in UTILITIES {
        if pipe_to(utility, text) {
            debug!(utility = utility[0], "copied rendered text");
            return true;
        }
    }
    warn!("no clipboard utility accepted the text");
    false
}

fn pipe_to(utility: &[&str], text: &str) -> bool {
    let mut child = match Command::new(utility[0])
        .args(&utility[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(_) => return false,
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
    }

    child.wait().map(|status| status.success()).unwrap_or(false)
}
