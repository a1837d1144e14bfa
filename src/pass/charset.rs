//! Character set building for password generation.

use crate::settings::GenerationConfig;

pub const DIGITS: &str = "0123456789";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easy to confuse with one another.
pub const SIMILAR: &[u8] = b"il1Lo0O2ZzS5s";

/// Build the effective alphabet: enabled classes in the order digits,
/// letters, symbols, with look-alike glyphs stripped when requested.
pub fn build(config: &GenerationConfig) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size_upper_bound());

    if config.include_digits {
        chars.extend_from_slice(DIGITS.as_bytes());
    }

    if config.include_letters {
        chars.extend_from_slice(LETTERS.as_bytes());
    }

    if config.include_symbols {
        chars.extend_from_slice(SYMBOLS.as_bytes());
    }

    if config.exclude_similar {
        chars.retain(|c| !is_similar(*c));
    }

    chars
}

/// Size of the effective alphabet (for the header line and entropy).
pub fn size(config: &GenerationConfig) -> usize {
    build(config).len()
}

#[inline]
pub fn is_similar(c: u8) -> bool {
    SIMILAR.contains(&c)
}

const fn size_upper_bound() -> usize {
    DIGITS.len() + LETTERS.len() + SYMBOLS.len()
}
