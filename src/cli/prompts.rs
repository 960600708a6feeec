//! Status and warning messages for CLI output.
//!
//! Everything except errors and the passwords themselves is muted by `-q`.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET};

const YELLOW: &str = "\x1b[33m";

pub mod quiet {
    use super::*;

    static QUIET: AtomicBool = AtomicBool::new(false);

    pub fn set(quiet: bool) {
        QUIET.store(quiet, Ordering::SeqCst);
    }

    pub fn enabled() -> bool {
        QUIET.load(Ordering::Relaxed)
    }
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red). Never muted.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print a status line to stderr.
pub fn info(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn clipboard_copied() {
    info("Copied!");
}

/// Clipboard failures are always reported.
pub fn clipboard_error(err: &str) {
    eprintln!("{RED}Failed{RESET}: {err}");
}

pub fn saved_to_history(count: usize) {
    info(&format!("{count} password(s) saved to history"));
}
