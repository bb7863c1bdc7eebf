//! A sequence of rounds sharing one word pool
//!
//! The session owns the pool, the random source and the in-memory record of
//! finished games. Persisting records is left to the caller.

use super::config::{ConfigError, GameConfig};
use super::round::{GameRound, GuessError, GuessOutcome, RoundStatus};
use crate::core::Word;
use crate::wordlists::{PoolError, WordPool, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use thiserror::Error;

/// Number of finished games kept in memory
pub const RECORD_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word: String,
    pub word_length: usize,
    pub attempts: usize,
    pub won: bool,
}

pub struct Session {
    config: GameConfig,
    pool: WordPool,
    rng: StdRng,
    round: GameRound,
    records: VecDeque<GameRecord>,
    best_record: Option<usize>,
}

impl Session {
    /// Start a session on an already loaded pool
    ///
    /// The pool's active length takes precedence over `config.word_length`.
    ///
    /// # Errors
    /// Returns `SessionError::Config` for an invalid configuration and
    /// `SessionError::Pool` if no target can be drawn.
    pub fn new(mut config: GameConfig, pool: WordPool) -> Result<Self, SessionError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // The pool has already resolved the preferred length
        config.word_length = pool.active_length();
        let round = Self::draw_round(&pool, &mut rng, config.max_attempts)?;

        Ok(Self {
            config,
            pool,
            rng,
            round,
            records: VecDeque::new(),
            best_record: None,
        })
    }

    /// Load the configured word list (or the built-in one) and start a session
    ///
    /// # Errors
    /// Same as [`Session::new`].
    pub fn from_config(config: GameConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let pool = loader::load_source(config.wordlist.as_deref(), config.word_length);
        Self::new(config, pool)
    }

    fn draw_round(
        pool: &WordPool,
        rng: &mut StdRng,
        max_attempts: usize,
    ) -> Result<GameRound, PoolError> {
        let target = pool.pick_target(rng).ok_or(PoolError::Empty)?.clone();
        tracing::info!(
            length = target.len(),
            pool = pool.active_count(),
            max_attempts,
            "New round"
        );
        tracing::trace!(word = target.text(), "Round target");
        Ok(GameRound::new(target, max_attempts))
    }

    /// Replace the current round with a fresh one
    ///
    /// # Errors
    /// Returns `PoolError::Empty` if the active subset is empty.
    pub fn new_game(&mut self) -> Result<(), PoolError> {
        self.round = Self::draw_round(&self.pool, &mut self.rng, self.config.max_attempts)?;
        Ok(())
    }

    /// Switch word length and start a new round
    ///
    /// Returns the length actually used after the pool's fallback.
    ///
    /// # Errors
    /// Returns `PoolError::Empty` if the active subset is empty.
    pub fn set_word_length(&mut self, length: usize) -> Result<usize, PoolError> {
        let length = self.pool.set_active_length(length);
        self.config.word_length = length;
        self.new_game()?;
        Ok(length)
    }

    /// Submit a guess to the current round, recording the game once it ends
    ///
    /// # Errors
    /// Propagates the round's `GuessError`.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GuessError> {
        let mut outcome = self.round.submit(guess)?;
        match outcome.status {
            RoundStatus::Won { attempts } => {
                tracing::info!(attempts, "Round won");
                outcome.new_best = self.record(true, attempts);
            }
            RoundStatus::Lost => {
                tracing::info!(attempts = self.round.max_attempts(), "Round lost");
                self.record(false, self.round.max_attempts());
            }
            RoundStatus::InProgress | RoundStatus::Revealed => {}
        }
        Ok(outcome)
    }

    /// Give up on the current round and return its target
    ///
    /// An unfinished round is recorded as a loss with the attempts used so far.
    pub fn reveal(&mut self) -> Word {
        if self.round.status() == RoundStatus::InProgress {
            let used = self.round.current_attempt() - 1;
            self.round.reveal();
            tracing::info!(attempts = used, "Round revealed");
            self.record(false, used);
        }
        self.round.target().clone()
    }

    /// Store a finished game, returning whether it set a new best record
    fn record(&mut self, won: bool, attempts: usize) -> bool {
        let new_best = won && self.best_record.is_none_or(|best| attempts < best);
        if new_best {
            self.best_record = Some(attempts);
        }
        self.records.push_front(GameRecord {
            word: self.round.target().text().to_string(),
            word_length: self.round.word_length(),
            attempts,
            won,
        });
        self.records.truncate(RECORD_LIMIT);
        new_best
    }

    /// Active-length words still consistent with the round, excluding guesses
    #[must_use]
    pub fn hint_words(&self, limit: usize) -> Vec<&Word> {
        let deduction = self.round.deduction();
        let history = self.round.history();
        self.pool
            .active_words()
            .filter(|word| deduction.admits(word))
            .filter(|word| history.iter().all(|a| a.guess.text() != word.text()))
            .take(limit)
            .collect()
    }

    #[must_use]
    pub const fn round(&self) -> &GameRound {
        &self.round
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Finished games, most recent first
    pub fn records(&self) -> impl Iterator<Item = &GameRecord> + '_ {
        self.records.iter()
    }

    /// Fewest attempts of any won game
    #[must_use]
    pub const fn best_record(&self) -> Option<usize> {
        self.best_record
    }

    #[must_use]
    pub fn games_played(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn games_won(&self) -> usize {
        self.records.iter().filter(|r| r.won).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::load_pool;

    fn session(words: &str, length: usize, max_attempts: usize) -> Session {
        let config = GameConfig {
            max_attempts,
            word_length: length,
            seed: Some(42),
            ..GameConfig::default()
        };
        Session::new(config, load_pool(Some(words), length)).unwrap()
    }

    #[test]
    fn single_word_pool_is_deterministic() {
        let mut session = session("tiger\n", 5, 12);
        assert_eq!(session.round().target().text(), "tiger");

        session.submit_guess("grape").unwrap();
        let outcome = session.submit_guess("tiger").unwrap();
        assert_eq!(outcome.status, RoundStatus::Won { attempts: 2 });

        let record = session.records().next().unwrap();
        assert_eq!(record.word, "tiger");
        assert_eq!(record.attempts, 2);
        assert!(record.won);
        assert_eq!(session.best_record(), Some(2));
    }

    #[test]
    fn loss_is_recorded_with_max_attempts() {
        let mut session = session("tiger\ngrape\n", 5, 1);
        let guess = if session.round().target().text() == "tiger" {
            "grape"
        } else {
            "tiger"
        };
        let outcome = session.submit_guess(guess).unwrap();

        assert_eq!(outcome.status, RoundStatus::Lost);
        assert_eq!(session.games_played(), 1);
        assert_eq!(session.games_won(), 0);
        assert_eq!(session.records().next().unwrap().attempts, 1);
        assert_eq!(session.best_record(), None);
    }

    #[test]
    fn best_record_keeps_fewest_attempts() {
        let mut session = session("tiger\n", 5, 12);
        session.submit_guess("tiger").unwrap();
        session.new_game().unwrap();
        session.submit_guess("grape").unwrap();
        session.submit_guess("tiger").unwrap();

        assert_eq!(session.best_record(), Some(1));
        assert_eq!(session.games_played(), 2);
        assert_eq!(session.records().next().unwrap().attempts, 2);
    }

    #[test]
    fn only_strictly_fewer_attempts_set_new_best() {
        let mut session = session("tiger\n", 5, 12);
        session.submit_guess("grape").unwrap();
        assert!(session.submit_guess("tiger").unwrap().new_best);

        session.new_game().unwrap();
        session.submit_guess("grape").unwrap();
        let tie = session.submit_guess("tiger").unwrap();
        assert_eq!(tie.status, RoundStatus::Won { attempts: 2 });
        assert!(!tie.new_best);

        session.new_game().unwrap();
        assert!(session.submit_guess("tiger").unwrap().new_best);
        assert_eq!(session.best_record(), Some(1));
    }

    #[test]
    fn reveal_records_loss_once() {
        let mut session = session("tiger\n", 5, 12);
        session.submit_guess("grape").unwrap();

        assert_eq!(session.reveal().text(), "tiger");
        assert_eq!(session.reveal().text(), "tiger");
        assert_eq!(session.games_played(), 1);

        let record = session.records().next().unwrap();
        assert!(!record.won);
        assert_eq!(record.attempts, 1);
    }

    #[test]
    fn records_are_capped() {
        let mut session = session("tiger\n", 5, 12);
        for _ in 0..RECORD_LIMIT + 5 {
            session.submit_guess("tiger").unwrap();
            session.new_game().unwrap();
        }
        assert_eq!(session.games_played(), RECORD_LIMIT);
    }

    #[test]
    fn set_word_length_switches_pool() {
        let mut session = session("cat\ntiger\nopaque\n", 5, 12);
        assert_eq!(session.set_word_length(3).unwrap(), 3);
        assert_eq!(session.round().target().text(), "cat");

        // No 4-letter words: equidistant, shorter length wins
        assert_eq!(session.set_word_length(4).unwrap(), 3);
        assert_eq!(session.config().word_length, 3);
    }

    #[test]
    fn hint_words_follow_deductions() {
        let mut session = session("tiger\ngrape\ntimer\nbiker\n", 5, 12);
        while session.round().target().text() != "tiger" {
            session.new_game().unwrap();
        }
        session.submit_guess("grape").unwrap();

        let hints: Vec<&str> = session.hint_words(10).iter().map(|w| w.text()).collect();
        assert_eq!(hints, ["tiger"]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            Session::from_config(config),
            Err(SessionError::Config(ConfigError::MaxAttempts(0)))
        ));
    }
}
