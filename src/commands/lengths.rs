//! Word length overview

use crate::wordlists::{PoolSource, WordPool};

/// Word counts per available length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthReport {
    pub source: PoolSource,
    pub total: usize,
    pub active_length: usize,
    /// `(length, count)` in ascending length order
    pub counts: Vec<(usize, usize)>,
}

#[must_use]
pub fn list_lengths(pool: &WordPool) -> LengthReport {
    LengthReport {
        source: pool.source(),
        total: pool.words().len(),
        active_length: pool.active_length(),
        counts: pool.length_counts(),
    }
}
