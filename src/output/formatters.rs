//! Formatting utilities for terminal output

use crate::core::{DeductionState, Feedback, LetterStatus, LetterStatusMap};
use crate::game::{GameRound, RoundStatus};

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Confirmed letters spaced out, e.g. "t _ g _ r"
#[must_use]
pub fn position_hint(deduction: &DeductionState) -> String {
    let hint = deduction.pattern_hint();
    let mut out = String::with_capacity(hint.len() * 2);
    for (i, ch) in hint.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Uppercase letters holding `status`, space separated
#[must_use]
pub fn letters_with_status(map: &LetterStatusMap, status: LetterStatus) -> String {
    map.letters_with(status)
        .iter()
        .map(|l| (l as char).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shareable summary of a finished round with its emoji grid
///
/// Returns `None` while the round is still in progress.
#[must_use]
pub fn share_text(round: &GameRound) -> Option<String> {
    let headline = match round.status() {
        RoundStatus::InProgress => return None,
        RoundStatus::Won { attempts } => format!(
            "I guessed the {}-letter word {} in {attempts}/{} attempts!",
            round.word_length(),
            round.target().text().to_uppercase(),
            round.max_attempts()
        ),
        RoundStatus::Lost | RoundStatus::Revealed => format!(
            "The {}-letter word {} beat me this time (X/{}).",
            round.word_length(),
            round.target().text().to_uppercase(),
            round.max_attempts()
        ),
    };

    let grid: Vec<String> = round
        .history()
        .iter()
        .map(|attempt| feedback_to_emoji(&attempt.feedback))
        .collect();

    if grid.is_empty() {
        Some(headline)
    } else {
        Some(format!("{headline}\n\n{}", grid.join("\n")))
    }
}
