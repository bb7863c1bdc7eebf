//! Guess feedback calculation and representation
//!
//! Every position of a guess receives one verdict:
//! - Correct (right letter, right position)
//! - Present (letter in word, wrong position)
//! - Absent (no unmatched occurrence of the letter remains in the word)

use super::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji square used in shared results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error returned when a guess cannot be scored against a target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { target: usize, guess: usize },
}

/// Per-position verdicts for one guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    #[must_use]
    pub const fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    /// Feedback for a fully solved word of the given length
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![Verdict::Correct; len])
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Number of positions holding `verdict`
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Feedback;
    ///
    /// let p1: Feedback = "GY-GY".parse().unwrap();
    /// let p2: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty feedback string".to_string());
        }

        s.chars()
            .map(|ch| Verdict::from_char(ch).ok_or_else(|| format!("Invalid feedback string: {s}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `target`
///
/// Implements the two-pass rule with proper handling of duplicate letters:
/// 1. Exact matches are marked `Correct` and both occurrences are consumed
/// 2. Each remaining guess letter, left to right, consumes the leftmost
///    unconsumed matching target letter and becomes `Present`; otherwise it
///    stays `Absent`
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use word_guess::core::{Verdict, Word, evaluate};
///
/// let target = Word::new("apple").unwrap();
/// let guess = Word::new("appla").unwrap();
/// let feedback = evaluate(&target, &guess).unwrap();
///
/// assert_eq!(feedback.count(Verdict::Correct), 4);
/// assert_eq!(feedback.verdicts()[4], Verdict::Absent);
/// ```
pub fn evaluate(target: &Word, guess: &Word) -> Result<Feedback, EvaluateError> {
    if target.len() != guess.len() {
        return Err(EvaluateError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }

    let mut verdicts = vec![Verdict::Absent; guess.len()];
    // None marks a consumed target letter
    let mut remaining: Vec<Option<u8>> = target.chars().iter().copied().map(Some).collect();

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            verdicts[i] = Verdict::Correct;
            remaining[i] = None;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
            verdicts[i] = Verdict::Present;
            *slot = None;
        }
    }

    Ok(Feedback(verdicts))
}
