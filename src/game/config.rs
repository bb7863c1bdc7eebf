//! Game configuration

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use std::path::PathBuf;
use thiserror::Error;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 12;

/// Upper bound accepted for `max_attempts`
pub const MAX_ATTEMPTS_LIMIT: usize = 30;

/// Default target word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max attempts must be between 1 and {MAX_ATTEMPTS_LIMIT}, got {0}")]
    MaxAttempts(usize),
    #[error("word length must be between {MIN_WORD_LEN} and {MAX_WORD_LEN}, got {0}")]
    WordLength(usize),
}

/// Settings shared by every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// Preferred length; the pool may remap it to an available one
    pub word_length: usize,
    /// External word list, `None` for the built-in list
    pub wordlist: Option<PathBuf>,
    /// Seed for target selection, `None` for an OS-seeded generator
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
            wordlist: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError` naming the first out-of-range setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&self.max_attempts) {
            return Err(ConfigError::MaxAttempts(self.max_attempts));
        }
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&self.word_length) {
            return Err(ConfigError::WordLength(self.word_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 12);
        assert_eq!(config.word_length, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxAttempts(0)));

        let config = GameConfig {
            word_length: 13,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WordLength(13)));
    }
}
