//! Core domain types for the guessing game
//!
//! This module contains the pure scoring and deduction logic. Nothing here
//! touches the terminal, the filesystem or a random source.

mod deduction;
mod letters;
mod verdict;
mod word;

pub use deduction::{DeductionState, PositionState};
pub use letters::{ALPHABET_LEN, LetterSet, LetterStatus, LetterStatusMap, letter_index};
pub use verdict::{EvaluateError, Feedback, Verdict, evaluate};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
