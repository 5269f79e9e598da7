//! tw-core: shared types for the titlewise workspace.
//!
//! This crate is the foundational dependency for `tw-parser`, providing a
//! unified error type, the identity configuration consumed by the segmenter,
//! and the provider identifier map filled by the ID extractor.

pub mod config;
pub mod error;
pub mod ids;

// Re-export the most commonly used items at the crate root.
pub use config::IdentityConfig;
pub use error::{Error, Result};
pub use ids::{MediaIds, Provider, UNKNOWN_SEASON};
