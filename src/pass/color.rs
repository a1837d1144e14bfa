//! Per-character coloring of a password for display.

use super::charset::{DIGITS, SYMBOLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Symbol,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if DIGITS.contains(c) {
            CharClass::Digit
        } else if SYMBOLS.contains(c) {
            CharClass::Symbol
        } else {
            CharClass::Other
        }
    }

    /// None means the terminal's default foreground.
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            CharClass::Digit => Some((0x14, 0x38, 0xDF)),
            CharClass::Symbol => Some((0xDF, 0x11, 0x11)),
            CharClass::Other => None,
        }
    }
}

/// 24-bit ANSI foreground escape.
pub fn fg(rgb: (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", rgb.0, rgb.1, rgb.2)
}

/// Render `pass` with one escape per class change, reset at the end.
pub fn colorize(pass: &str) -> String {
    let mut out = String::with_capacity(pass.len() * 4);
    let mut current = CharClass::Other;

    for c in pass.chars() {
        let class = CharClass::of(c);
        if class != current {
            match class.rgb() {
                Some(rgb) => out.push_str(&fg(rgb)),
                None => out.push_str("\x1b[39m"),
            }
            current = class;
        }
        out.push(c);
    }

    if current != CharClass::Other {
        out.push_str("\x1b[39m");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_alphabet() {
        assert!(DIGITS.chars().all(|c| CharClass::of(c) == CharClass::Digit));
        assert!(SYMBOLS.chars().all(|c| CharClass::of(c) == CharClass::Symbol));
        assert_eq!(CharClass::of('a'), CharClass::Other);
        assert_eq!(CharClass::of('Z'), CharClass::Other);
        assert_eq!(CharClass::of(' '), CharClass::Other);
    }

    #[test]
    fn plain_letters_get_no_escapes() {
        assert_eq!(colorize("Select an option"), "Select an option");
    }

    #[test]
    fn runs_share_one_escape() {
        let out = colorize("ab12!x");
        assert_eq!(
            out,
            "ab\x1b[38;2;20;56;223m12\x1b[38;2;223;17;17m!\x1b[39mx"
        );
    }

    #[test]
    fn trailing_colored_run_is_reset() {
        assert!(colorize("a9").ends_with("9\x1b[39m"));
    }
}
