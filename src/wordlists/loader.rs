//! Word list loading utilities
//!
//! Raw text is turned into a pool of valid words. A missing, unreadable or
//! empty source never surfaces as an error: the embedded list is used instead.

use super::embedded::FALLBACK_WORDS;
use super::pool::{PoolSource, WordPool};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse newline-delimited text into words
///
/// Lines are trimmed and lowercased. Anything that is not 3-12 letters a-z is
/// skipped, as are repeated words.
///
/// # Examples
/// ```
/// use word_guess::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Tiger\n  grape \nno way\nox\ntiger\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["tiger", "grape"]);
/// ```
#[must_use]
pub fn parse_word_list(raw: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    raw.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Pool built from the embedded fallback list
#[must_use]
pub fn fallback_pool(preferred_length: usize) -> WordPool {
    let words = words_from_slice(FALLBACK_WORDS);
    match WordPool::new(words, preferred_length, PoolSource::Fallback) {
        Ok(pool) => pool,
        // build.rs rejects an empty or malformed fallback file
        Err(err) => unreachable!("embedded word list is invalid: {err}"),
    }
}

/// Build a pool from raw text, or from the fallback list
///
/// `None` stands for a source that could not be fetched at all.
#[must_use]
pub fn load_pool(raw: Option<&str>, preferred_length: usize) -> WordPool {
    let Some(raw) = raw else {
        tracing::warn!("No word list available, using built-in list");
        return fallback_pool(preferred_length);
    };

    let words = parse_word_list(raw);
    match WordPool::new(words, preferred_length, PoolSource::Loaded) {
        Ok(pool) => {
            tracing::info!(words = pool.words().len(), "Loaded word list");
            pool
        }
        Err(err) => {
            tracing::warn!(%err, "Word list empty or malformed, using built-in list");
            fallback_pool(preferred_length)
        }
    }
}

/// Load a pool from a file, falling back to the built-in list
///
/// # Examples
/// ```no_run
/// use word_guess::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("words.txt", 5);
/// println!("Loaded {} words", pool.words().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, preferred_length: usize) -> WordPool {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => load_pool(Some(&content), preferred_length),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "Failed to read word list");
            load_pool(None, preferred_length)
        }
    }
}

/// Load `path` when one is given, the built-in list otherwise
#[must_use]
pub fn load_source(path: Option<&Path>, preferred_length: usize) -> WordPool {
    match path {
        Some(path) => load_from_file(path, preferred_length),
        None => fallback_pool(preferred_length),
    }
}
