//! Word lists and the word pool
//!
//! Provides the embedded fallback list, text loading with silent fallback,
//! and the length-filtered pool that targets are drawn from.

mod embedded;
pub mod loader;
pub mod pool;

pub use embedded::{FALLBACK_COUNT, FALLBACK_WORDS};
pub use pool::{PoolError, PoolSource, WordPool, detect_available_lengths};
