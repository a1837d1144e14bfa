//! Password generation settings.

mod file;

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 40;
pub const DEFAULT_LENGTH: usize = 16;

/// What to generate. `length` is private so it always sits in
/// `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    pub include_digits: bool,
    pub include_letters: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl GenerationConfig {
    pub fn new(
        length: usize,
        include_digits: bool,
        include_letters: bool,
        include_symbols: bool,
        exclude_similar: bool,
    ) -> Self {
        Self {
            length: clamp_length(length),
            include_digits,
            include_letters,
            include_symbols,
            exclude_similar,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
    }

    pub fn lengthen(&mut self) {
        self.set_length(self.length.saturating_add(1));
    }

    pub fn shorten(&mut self) {
        self.set_length(self.length.saturating_sub(1));
    }

    pub fn has_any_class(&self) -> bool {
        self.include_digits || self.include_letters || self.include_symbols
    }

    pub fn load_from_file() -> Result<Self> {
        let mut config = GenerationConfig::default();
        file::load(&file::default_path(), &mut config).map_err(Error::Settings)?;
        Ok(config)
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(&file::default_path(), self).map_err(Error::Settings)
    }

    pub fn file_path() -> PathBuf {
        file::default_path()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: true,
            include_letters: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

#[inline]
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}
