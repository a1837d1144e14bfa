use clap::{ArgAction, Parser};

use crate::entropy::Engine;
use crate::settings::GenerationConfig;

/// Password generator with strength meter and clipboard copy.
///
/// Run without generation flags in a terminal to open the interactive view.
#[derive(Debug, Default, Parser)]
#[command(name = "strongpass", version)]
pub struct CliFlags {
    /// Characters per password, clamped to 4..=40
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate (streamed; at most 1000 with -b)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub number: Option<u64>,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out letters (a-z, A-Z)
    #[arg(long)]
    pub no_letters: bool,

    /// Leave out symbols (!@#$...)
    #[arg(long)]
    pub no_symbols: bool,

    /// Drop look-alike characters (i l 1 L o 0 O 2 Z z 5 s S)
    #[arg(short = 'x', long)]
    pub exclude_similar: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print the strength tier after each password
    #[arg(long)]
    pub strength: bool,

    /// Use the small non-cryptographic generator
    #[arg(long)]
    pub fast: bool,

    /// Open the interactive view even when other flags are given
    #[arg(short, long)]
    pub interactive: bool,

    /// Save the resulting options as defaults
    #[arg(long)]
    pub save: bool,

    /// Ignore saved defaults
    #[arg(short, long)]
    pub default: bool,

    /// Suppress everything except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// True when any flag asks for one-shot generation.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.no_digits
            || self.no_letters
            || self.no_symbols
            || self.exclude_similar
            || self.clipboard
            || self.strength
            || self.save
            || self.quiet
    }

    pub fn engine(&self) -> Engine {
        if self.fast { Engine::Fast } else { Engine::Secure }
    }

    /// Apply flags on top of `base`. Class flags only ever switch a class
    /// off, and `-x` only ever switches exclusion on.
    pub fn apply(&self, base: GenerationConfig) -> GenerationConfig {
        let mut config = base;
        if let Some(length) = self.length {
            config.set_length(length);
        }
        if self.no_digits {
            config.include_digits = false;
        }
        if self.no_letters {
            config.include_letters = false;
        }
        if self.no_symbols {
            config.include_symbols = false;
        }
        if self.exclude_similar {
            config.exclude_similar = true;
        }
        config
    }

    /// Requested length that clamping changed, if any.
    pub fn clamped_length(&self) -> Option<(usize, usize)> {
        let requested = self.length?;
        let clamped = crate::settings::clamp_length(requested);
        (requested != clamped).then_some((requested, clamped))
    }
}
