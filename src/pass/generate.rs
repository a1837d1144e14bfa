//! Password generation.

use zeroize::Zeroize;

use super::charset;
use crate::entropy::RandomSource;
use crate::settings::GenerationConfig;

/// Shown in place of a password when no character class is enabled.
pub const NO_CLASS_SELECTED: &str = "Select an option";

/// Generate a single password. Every character is an independent uniform
/// draw (with replacement) from the effective alphabet.
pub fn generate<R: RandomSource + ?Sized>(config: &GenerationConfig, rng: &mut R) -> String {
    let chars = charset::build(config);
    if chars.is_empty() {
        return NO_CLASS_SELECTED.to_string();
    }

    let mut buf = Vec::with_capacity(config.length());
    generate_from_charset(&chars, config.length(), &mut buf, rng);
    let pass = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();
    pass
}

/// Fill `buf` with `length` draws from a pre-built, non-empty charset.
/// Caller owns the buffer and wipes it between calls.
#[inline]
pub fn generate_from_charset<R: RandomSource + ?Sized>(
    chars: &[u8],
    length: usize,
    buf: &mut Vec<u8>,
    rng: &mut R,
) {
    buf.clear();
    buf.extend((0..length).map(|_| chars[rng.index(chars.len())]));
}

/// True for the no-class placeholder rather than a real password.
pub fn is_placeholder(pass: &str) -> bool {
    pass == NO_CLASS_SELECTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{DIGITS, LETTERS, SYMBOLS, is_similar};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn length_matches_config_for_every_class_mix() {
        let mut rng = rng();
        for mask in 1..8u8 {
            for length in [4, 5, 16, 39, 40] {
                let config = GenerationConfig::new(
                    length,
                    mask & 1 != 0,
                    mask & 2 != 0,
                    mask & 4 != 0,
                    mask % 2 == 0,
                );
                let pass = generate(&config, &mut rng);
                assert_eq!(pass.chars().count(), length, "mask {mask}");
            }
        }
    }

    #[test]
    fn out_of_range_length_never_reaches_the_generator() {
        let mut rng = rng();
        let short = GenerationConfig::new(0, true, true, true, false);
        assert_eq!(generate(&short, &mut rng).len(), 4);
        let long = GenerationConfig::new(1_000, true, true, true, false);
        assert_eq!(generate(&long, &mut rng).len(), 40);
    }

    #[test]
    fn no_class_gives_placeholder_at_any_length() {
        let mut rng = rng();
        for length in [4, 11, 40] {
            for exclude in [false, true] {
                let config = GenerationConfig::new(length, false, false, false, exclude);
                let pass = generate(&config, &mut rng);
                assert_eq!(pass, "Select an option");
                assert!(is_placeholder(&pass));
            }
        }
    }

    #[test]
    fn characters_come_from_enabled_classes_only() {
        let mut rng = rng();
        let config = GenerationConfig::new(40, true, false, true, false);
        for _ in 0..50 {
            let pass = generate(&config, &mut rng);
            assert!(pass.chars().all(|c| DIGITS.contains(c) || SYMBOLS.contains(c)));
            assert!(!pass.chars().any(|c| LETTERS.contains(c)));
        }
    }

    #[test]
    fn exclude_similar_removes_look_alikes() {
        let mut rng = rng();
        let config = GenerationConfig::new(40, true, true, true, true);
        for _ in 0..200 {
            let pass = generate(&config, &mut rng);
            assert!(!pass.bytes().any(is_similar), "{pass}");
        }
    }

    #[test]
    fn default_config_draws_from_88_chars() {
        let mut rng = rng();
        let config = GenerationConfig::default();
        let alphabet = format!("{DIGITS}{LETTERS}{SYMBOLS}");
        let pass = generate(&config, &mut rng);
        assert_eq!(pass.len(), 16);
        assert!(pass.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GenerationConfig::default();
        let a = generate(&config, &mut StdRng::seed_from_u64(42));
        let b = generate(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_draws_are_independent() {
        let mut rng = rng();
        let config = GenerationConfig::new(40, true, true, true, false);
        let a = generate(&config, &mut rng);
        let b = generate(&config, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn per_position_distribution_is_roughly_uniform() {
        // Digits only, exclude-similar: alphabet "346789".
        let config = GenerationConfig::new(4, true, false, false, true);
        let alphabet = b"346789";
        let mut rng = rng();
        let trials = 30_000;
        let mut counts = [[0usize; 6]; 4];

        for _ in 0..trials {
            let pass = generate(&config, &mut rng);
            for (pos, b) in pass.bytes().enumerate() {
                let idx = alphabet.iter().position(|&c| c == b).unwrap();
                counts[pos][idx] += 1;
            }
        }

        let expected = trials as f64 / alphabet.len() as f64;
        for row in counts {
            for count in row {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "count {count} vs expected {expected}");
            }
        }
    }

    #[test]
    fn generate_from_charset_reuses_buffer() {
        let mut rng = rng();
        let mut buf = vec![b'x'; 64];
        generate_from_charset(b"ab", 8, &mut buf, &mut rng);
        assert_eq!(buf.len(), 8);
        assert!(buf.iter().all(|b| *b == b'a' || *b == b'b'));
    }
}
