//! Terminal output utilities.
//!
//! Box drawing, meter bars, ANSI helpers. Every line ends in `\r\n` so the
//! same helpers work in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Move to top-left without clearing, for flicker-free redraws.
pub fn home() {
    print!("\x1b[H");
}

/// Clear everything below the cursor.
pub fn clear_below() {
    print!("\x1b[J");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

/// Print one line, clearing any leftovers to its right.
pub fn emit(line: &str) {
    print!("{line}\x1b[K\r\n");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        emit(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        emit(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);
    let padding = INNER_WIDTH.saturating_sub(display_len);
    emit(&format!("│ {}{} │", content, " ".repeat(padding)));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    emit(&format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    ));
}

/// Print a line with content on the left and right edges.
pub fn box_line_split(left: &str, right: &str) {
    let used = console_width(left) + console_width(right);
    let gap = INNER_WIDTH.saturating_sub(used);
    emit(&format!("│ {}{}{} │", left, " ".repeat(gap), right));
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    emit(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    emit(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    box_line(&format!("{}{}", flag_padded, first));

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        box_line(&format!("{}{}", indent, line));
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Meter Bars
// ============================================================================

/// Filled cells for `percent` of `width`.
pub fn filled_cells(percent: u8, width: usize) -> usize {
    if percent >= 100 {
        width
    } else {
        width * percent as usize / 100
    }
}

/// A one-line meter: `━━━━────` with the filled part in `color`.
pub fn meter(percent: u8, width: usize, color: &str) -> String {
    let filled = filled_cells(percent, width);
    format!(
        "{color}{}{RESET}{DIM}{}{RESET}",
        "━".repeat(filled),
        "─".repeat(width - filled)
    )
}

/// A slider track with a knob at `value` within `min..=max`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let pos = (value.clamp(min, max) - min) * (width - 1) / span;
    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push(match i.cmp(&pos) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        });
    }
    track
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}
