//! Single guess scoring command
//!
//! Scores one guess against a given target and reports what it reveals.

use crate::core::{DeductionState, Feedback, Word, evaluate};
use anyhow::{Context, Result};

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
    pub deduction: DeductionState,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult> {
    let target = Word::new(target).with_context(|| format!("Invalid target word '{target}'"))?;
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    let feedback = evaluate(&target, &guess)?;
    let deduction = DeductionState::new(target.len()).applied(&guess, &feedback)?;

    Ok(CheckResult {
        target,
        guess,
        feedback,
        deduction,
    })
}
