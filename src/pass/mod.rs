//! Password generation, strength tiers, and display coloring.

pub mod charset;
pub mod color;
mod generate;
pub mod strength;

pub use generate::{NO_CLASS_SELECTED, generate, generate_from_charset, is_placeholder};
pub use strength::{StrengthTier, estimate as estimate_strength};
