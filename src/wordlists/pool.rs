//! Word pool with an active word length
//!
//! The pool keeps every loaded word, the sorted set of lengths present, and
//! the subset matching the active length that targets are drawn from.

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Where the words of a pool came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolSource {
    Loaded,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("word pool is empty")]
    Empty,
}

/// Loaded words plus the subset of the active length
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<Word>,
    available_lengths: Vec<usize>,
    active_length: usize,
    active: Vec<usize>,
    source: PoolSource,
}

/// Distinct word lengths present in `words`, ascending
#[must_use]
pub fn detect_available_lengths(words: &[Word]) -> Vec<usize> {
    let mut lengths: Vec<usize> = words.iter().map(Word::len).collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// The entry of `lengths` numerically closest to `requested`
///
/// Ties go to the entry that comes first, so with an ascending list the
/// shorter length wins.
#[must_use]
pub fn closest_length(lengths: &[usize], requested: usize) -> Option<usize> {
    lengths
        .iter()
        .copied()
        .reduce(|best, len| {
            if len.abs_diff(requested) < best.abs_diff(requested) {
                len
            } else {
                best
            }
        })
}

impl WordPool {
    /// Build a pool and activate `preferred_length`
    ///
    /// If no word has the preferred length, the smallest available length is
    /// activated instead.
    ///
    /// # Errors
    /// Returns `PoolError::Empty` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    /// use word_guess::wordlists::{PoolSource, WordPool};
    ///
    /// let words = ["cat", "tiger", "opaque"].map(|w| Word::new(w).unwrap()).to_vec();
    /// let pool = WordPool::new(words, 7, PoolSource::Loaded).unwrap();
    ///
    /// assert_eq!(pool.available_lengths(), &[3, 5, 6]);
    /// assert_eq!(pool.active_length(), 3);
    /// ```
    pub fn new(
        words: Vec<Word>,
        preferred_length: usize,
        source: PoolSource,
    ) -> Result<Self, PoolError> {
        let available_lengths = detect_available_lengths(&words);
        let Some(&smallest) = available_lengths.first() else {
            return Err(PoolError::Empty);
        };

        let active_length = if available_lengths.contains(&preferred_length) {
            preferred_length
        } else {
            tracing::warn!(
                requested = preferred_length,
                using = smallest,
                "No words of requested length, using smallest available"
            );
            smallest
        };

        tracing::debug!(
            words = words.len(),
            lengths = ?available_lengths,
            "Word pool built"
        );

        let mut pool = Self {
            words,
            available_lengths,
            active_length,
            active: Vec::new(),
            source,
        };
        pool.set_active_length(active_length);
        Ok(pool)
    }

    /// Activate the words of `requested` length
    ///
    /// Falls back to the closest available length when no word matches and
    /// returns the length that ended up active.
    pub fn set_active_length(&mut self, requested: usize) -> usize {
        self.active = self.indices_of_length(requested);

        if self.active.is_empty()
            && let Some(closest) = closest_length(&self.available_lengths, requested)
        {
            tracing::warn!(requested, using = closest, "Remapped word length");
            self.active = self.indices_of_length(closest);
            self.active_length = closest;
        } else {
            self.active_length = requested;
        }

        tracing::debug!(
            length = self.active_length,
            count = self.active.len(),
            "Filtered word pool by length"
        );
        self.active_length
    }

    fn indices_of_length(&self, length: usize) -> Vec<usize> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.len() == length)
            .map(|(i, _)| i)
            .collect()
    }

    /// Pick a target uniformly from the active subset
    ///
    /// Returns `None` only if the active subset is empty.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        if self.active.is_empty() {
            return None;
        }
        let index = self.active[rng.random_range(0..self.active.len())];
        self.words.get(index)
    }

    /// Words of the active length, in load order
    pub fn active_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.active.iter().map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub const fn active_length(&self) -> usize {
        self.active_length
    }

    #[must_use]
    pub fn available_lengths(&self) -> &[usize] {
        &self.available_lengths
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn source(&self) -> PoolSource {
        self.source
    }

    /// Number of words for each available length, ascending by length
    #[must_use]
    pub fn length_counts(&self) -> Vec<(usize, usize)> {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for word in &self.words {
            *counts.entry(word.len()).or_insert(0) += 1;
        }
        self.available_lengths
            .iter()
            .map(|&len| (len, counts.get(&len).copied().unwrap_or(0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn lengths_are_sorted_and_distinct() {
        let pool = words(&["tiger", "cat", "opaque", "grape", "dog"]);
        assert_eq!(detect_available_lengths(&pool), vec![3, 5, 6]);
        assert!(detect_available_lengths(&[]).is_empty());
    }

    #[test]
    fn closest_length_prefers_shorter_on_tie() {
        assert_eq!(closest_length(&[3, 5, 7], 6), Some(5));
        assert_eq!(closest_length(&[3, 5, 7], 4), Some(3));
        assert_eq!(closest_length(&[3, 5, 7], 12), Some(7));
        assert_eq!(closest_length(&[], 5), None);
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(
            WordPool::new(Vec::new(), 5, PoolSource::Loaded).unwrap_err(),
            PoolError::Empty
        );
    }

    #[test]
    fn preferred_length_is_kept_when_available() {
        let pool = WordPool::new(words(&["cat", "tiger", "grape"]), 5, PoolSource::Loaded).unwrap();
        assert_eq!(pool.active_length(), 5);
        assert_eq!(pool.active_count(), 2);
        assert!(pool.active_words().all(|w| w.len() == 5));
    }

    #[test]
    fn missing_preferred_length_resets_to_smallest() {
        let pool = WordPool::new(words(&["tiger", "opaque"]), 8, PoolSource::Loaded).unwrap();
        assert_eq!(pool.active_length(), 5);
    }

    #[test]
    fn set_active_length_falls_back_to_closest() {
        let mut pool =
            WordPool::new(words(&["cat", "tiger", "opaque"]), 5, PoolSource::Loaded).unwrap();

        assert_eq!(pool.set_active_length(6), 6);
        assert_eq!(pool.active_count(), 1);

        // 4 is equidistant from 3 and 5; the shorter wins
        assert_eq!(pool.set_active_length(4), 3);
        assert_eq!(pool.active_length(), 3);
        assert_eq!(pool.active_words().next().unwrap().text(), "cat");

        assert_eq!(pool.set_active_length(11), 6);
    }

    #[test]
    fn pick_target_draws_from_active_subset() {
        let pool = WordPool::new(
            words(&["cat", "tiger", "grape", "opaque"]),
            5,
            PoolSource::Fallback,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let target = pool.pick_target(&mut rng).unwrap();
            assert_eq!(target.len(), 5);
        }
        assert_eq!(pool.source(), PoolSource::Fallback);
    }

    #[test]
    fn length_counts_follow_available_lengths() {
        let pool = WordPool::new(
            words(&["cat", "dog", "tiger", "opaque"]),
            5,
            PoolSource::Loaded,
        )
        .unwrap();
        assert_eq!(pool.length_counts(), vec![(3, 2), (5, 1), (6, 1)]);
    }
}
