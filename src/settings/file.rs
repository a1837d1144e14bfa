//! Settings file persistence.
//!
//! One line: `length,digits,letters,symbols,exclude_similar`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::GenerationConfig;

const FIELDS: usize = 5;

pub fn save(path: &Path, config: &GenerationConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(encode(config).as_bytes())?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path, config: &mut GenerationConfig) -> std::io::Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(line.trim(), config) {
        tracing::warn!(path = %path.display(), "malformed settings file, rewriting defaults");
        *config = GenerationConfig::default();
        save(path, config)?;
    }

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/strongpass/settings", home))
}

fn encode(config: &GenerationConfig) -> String {
    format!(
        "{},{},{},{},{}\n",
        config.length,
        config.include_digits,
        config.include_letters,
        config.include_symbols,
        config.exclude_similar
    )
}

/// Returns false on a wrong field count. Unparsable fields keep their
/// current value.
fn decode(line: &str, config: &mut GenerationConfig) -> bool {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return false;
    }

    *config = GenerationConfig::new(
        parts[0].parse().unwrap_or(config.length),
        parts[1].parse().unwrap_or(config.include_digits),
        parts[2].parse().unwrap_or(config.include_letters),
        parts[3].parse().unwrap_or(config.include_symbols),
        parts[4].parse().unwrap_or(config.exclude_similar),
    );
    true
}
