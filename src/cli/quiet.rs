//! Global quiet mode state and tty checks.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and status lines; passwords are still printed.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Check if stdout is a tty (colors are only emitted there)
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}
