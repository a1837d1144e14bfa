//! Centralized warning and status messages for CLI output.

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn length_clamped(requested: usize, clamped: usize) {
    warn(&format!("Length {requested} is out of range, using {clamped}"));
}

/// No class enabled: the placeholder goes to stderr, never into a pipe.
pub fn no_class_selected(placeholder: &str) {
    warn(&format!("{placeholder} (digits, letters or symbols)"));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: u64) {
    if !quiet::enabled() {
        eprintln!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

pub fn clipboard_capped(requested: u64, cap: u64) {
    warn(&format!("Clipboard holds at most {cap} passwords, copying {cap} of {requested}"));
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}

pub fn settings_error(err: &str) {
    warn(&format!("Failed to save settings: {err}"));
}
