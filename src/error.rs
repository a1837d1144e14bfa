//! Error types for strongpass.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Clipboard could not be opened or written.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Settings file could not be read or written.
    #[error("settings error: {0}")]
    Settings(#[source] std::io::Error),

    /// Raw mode, event read, or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
