//! Letter sets and per-letter status tracking
//!
//! The alphabet is fixed at the 26 lowercase ASCII letters, so a set of
//! letters is a 26-bit mask and the status map is a fixed-size array.

use super::Verdict;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Index of a lowercase ASCII letter in the alphabet (0-25)
///
/// # Panics
/// Panics in debug mode if `letter` is not a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// A set of lowercase letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALPHABET: Self = Self((1 << ALPHABET_LEN) - 1);

    /// A set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn only(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter_index(letter));
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// What is known about a single letter across the whole round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

/// Status of every letter of the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStatusMap([LetterStatus; ALPHABET_LEN]);

impl Default for LetterStatusMap {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterStatusMap {
    /// All letters start out `Unknown`
    #[must_use]
    pub const fn new() -> Self {
        Self([LetterStatus::Unknown; ALPHABET_LEN])
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> LetterStatus {
        self.0[letter_index(letter)]
    }

    /// Fold one verdict for `letter` into its status
    ///
    /// `Correct` is final. `Present` is only replaced by `Correct`, and
    /// `Absent` never overwrites `Present` or `Correct`.
    pub fn record(&mut self, letter: u8, verdict: Verdict) {
        let slot = &mut self.0[letter_index(letter)];
        *slot = match (*slot, verdict) {
            (LetterStatus::Correct, _) => LetterStatus::Correct,
            (_, Verdict::Correct) => LetterStatus::Correct,
            (_, Verdict::Present) => LetterStatus::Present,
            (LetterStatus::Present, Verdict::Absent) => LetterStatus::Present,
            (_, Verdict::Absent) => LetterStatus::Absent,
        };
    }

    /// Iterate over `(letter, status)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.0.iter().copied())
    }

    /// All letters currently holding `status`
    #[must_use]
    pub fn letters_with(&self, status: LetterStatus) -> LetterSet {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(letter, _)| letter)
            .collect()
    }
}
