//! A single playthrough against one target word

use crate::core::{DeductionState, EvaluateError, Feedback, Word, WordError, evaluate};
use thiserror::Error;

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
    /// The player gave up and asked for the answer
    Revealed,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Reasons a guess is turned away before anything is evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the round is already over")]
    RoundOver,
    #[error("fill in all {expected} letters (got {got})")]
    Incomplete { expected: usize, got: usize },
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// 1-based number of the attempt this guess used
    pub attempt: usize,
    pub feedback: Feedback,
    pub status: RoundStatus,
    /// Win that beat every earlier win of the session; only set by `Session`
    pub new_best: bool,
}

/// Target, attempt counter, history and deductions of one round
#[derive(Debug, Clone)]
pub struct GameRound {
    target: Word,
    max_attempts: usize,
    current_attempt: usize,
    history: Vec<Attempt>,
    deduction: DeductionState,
    status: RoundStatus,
}

impl GameRound {
    #[must_use]
    pub fn new(target: Word, max_attempts: usize) -> Self {
        let deduction = DeductionState::new(target.len());
        Self {
            target,
            max_attempts,
            current_attempt: 1,
            history: Vec::new(),
            deduction,
            status: RoundStatus::InProgress,
        }
    }

    /// Score a guess and fold it into the round
    ///
    /// Validation happens before any state changes, so a rejected guess
    /// leaves the round exactly as it was.
    ///
    /// # Errors
    /// - `GuessError::RoundOver` once the round is won, lost or revealed
    /// - `GuessError::Incomplete` if the guess length differs from the target
    /// - `GuessError::InvalidWord` if the guess contains non-letters
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    /// use word_guess::game::{GameRound, RoundStatus};
    ///
    /// let mut round = GameRound::new(Word::new("tiger").unwrap(), 12);
    /// round.submit("grape").unwrap();
    /// let outcome = round.submit("tiger").unwrap();
    ///
    /// assert_eq!(outcome.status, RoundStatus::Won { attempts: 2 });
    /// assert_eq!(round.current_attempt(), 2);
    /// ```
    pub fn submit(&mut self, guess: &str) -> Result<GuessOutcome, GuessError> {
        if self.status.is_finished() {
            return Err(GuessError::RoundOver);
        }

        let guess = guess.trim();
        let got = guess.chars().count();
        if got != self.word_length() {
            return Err(GuessError::Incomplete {
                expected: self.word_length(),
                got,
            });
        }

        let guess = Word::new(guess)?;
        let feedback = evaluate(&self.target, &guess)?;
        self.deduction.apply(&guess, &feedback)?;

        let attempt = self.current_attempt;
        tracing::debug!(
            attempt,
            guess = guess.text(),
            feedback = %feedback,
            "Evaluated guess"
        );

        self.history.push(Attempt {
            guess,
            feedback: feedback.clone(),
        });

        if feedback.is_solved() {
            self.status = RoundStatus::Won { attempts: attempt };
        } else {
            self.current_attempt += 1;
            if self.current_attempt > self.max_attempts {
                self.status = RoundStatus::Lost;
            }
        }

        Ok(GuessOutcome {
            attempt,
            feedback,
            status: self.status,
            new_best: false,
        })
    }

    /// End an unfinished round by revealing the target
    pub fn reveal(&mut self) -> &Word {
        if self.status == RoundStatus::InProgress {
            self.status = RoundStatus::Revealed;
        }
        &self.target
    }

    /// The hidden word; callers should only show it once the round is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// 1-based number of the next (or winning) attempt
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        match self.status {
            RoundStatus::InProgress => self.max_attempts + 1 - self.current_attempt,
            _ => 0,
        }
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub const fn deduction(&self) -> &DeductionState {
        &self.deduction
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }
}
