mod args;
mod context;
pub mod prompts;
pub mod quiet;

pub use args::CliFlags;
pub use context::Context;

use crate::settings::GenerationConfig;

/// Saved defaults (unless `--default`) with the flags layered on top.
pub fn config_from(flags: &CliFlags) -> GenerationConfig {
    let saved = if flags.default {
        GenerationConfig::default()
    } else {
        GenerationConfig::load_from_file().unwrap_or_else(|e| {
            tracing::warn!("failed to load settings: {e}");
            GenerationConfig::default()
        })
    };
    flags.apply(saved)
}

/// One-shot generation from flags.
pub fn run(flags: CliFlags) {
    Context::new(flags).run();
}
