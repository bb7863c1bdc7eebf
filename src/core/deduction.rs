//! Cumulative knowledge gathered over the guesses of one round
//!
//! `DeductionState` folds each evaluated guess into three structures:
//! the per-letter status map, one `PositionState` per index, and the set of
//! letters known to occur somewhere in the target.

use super::{EvaluateError, Feedback, LetterSet, LetterStatusMap, Verdict, Word};

/// What is known about a single position of the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionState {
    /// Letter confirmed at this position
    pub correct_letter: Option<u8>,
    /// Letters still consistent with this position
    pub possible: LetterSet,
    /// Letters known not to be at this position
    pub excluded: LetterSet,
}

impl Default for PositionState {
    fn default() -> Self {
        Self {
            correct_letter: None,
            possible: LetterSet::ALPHABET,
            excluded: LetterSet::EMPTY,
        }
    }
}

impl PositionState {
    fn confirm(&mut self, letter: u8) {
        self.correct_letter = Some(letter);
        self.possible = LetterSet::only(letter);
    }

    fn exclude(&mut self, letter: u8) {
        if self.correct_letter == Some(letter) {
            return;
        }
        self.possible.remove(letter);
        self.excluded.insert(letter);
    }
}

/// Letter and position knowledge for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionState {
    letter_status: LetterStatusMap,
    positions: Vec<PositionState>,
    candidates: LetterSet,
}

impl DeductionState {
    /// Fresh state for a target of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            letter_status: LetterStatusMap::new(),
            positions: vec![PositionState::default(); word_length],
            candidates: LetterSet::EMPTY,
        }
    }

    #[must_use]
    pub const fn letter_status(&self) -> &LetterStatusMap {
        &self.letter_status
    }

    #[must_use]
    pub fn positions(&self) -> &[PositionState] {
        &self.positions
    }

    /// Letters confirmed to occur somewhere in the target
    #[must_use]
    pub const fn candidates(&self) -> LetterSet {
        self.candidates
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    /// Fold one evaluated guess into the state
    ///
    /// A letter whose every occurrence in the guess is `Absent` is removed from
    /// all positions. An `Absent` occurrence of a letter that scored
    /// `Correct` or `Present` elsewhere in the same guess only rules that
    /// letter out at its own index.
    ///
    /// # Errors
    /// Returns `EvaluateError::LengthMismatch` if the guess or feedback length
    /// differs from the tracked word length. Nothing is modified in that case.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{DeductionState, LetterStatus, Word, evaluate};
    ///
    /// let target = Word::new("tiger").unwrap();
    /// let guess = Word::new("grape").unwrap();
    /// let feedback = evaluate(&target, &guess).unwrap();
    ///
    /// let mut state = DeductionState::new(5);
    /// state.apply(&guess, &feedback).unwrap();
    ///
    /// assert_eq!(state.letter_status().get(b'g'), LetterStatus::Present);
    /// assert_eq!(state.letter_status().get(b'a'), LetterStatus::Absent);
    /// assert!(!state.positions()[3].possible.contains(b'a'));
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), EvaluateError> {
        let expected = self.word_length();
        if guess.len() != expected || feedback.len() != expected {
            return Err(EvaluateError::LengthMismatch {
                target: expected,
                guess: guess.len().max(feedback.len()),
            });
        }

        let letters = guess.chars();
        let verdicts = feedback.verdicts();

        for (&letter, &verdict) in letters.iter().zip(verdicts) {
            self.letter_status.record(letter, verdict);
        }

        let found_in_guess: LetterSet = letters
            .iter()
            .zip(verdicts)
            .filter(|&(_, &v)| v != Verdict::Absent)
            .map(|(&letter, _)| letter)
            .collect();

        for (i, (&letter, &verdict)) in letters.iter().zip(verdicts).enumerate() {
            match verdict {
                Verdict::Correct => {
                    self.positions[i].confirm(letter);
                    self.candidates.insert(letter);
                }
                Verdict::Present => {
                    self.positions[i].exclude(letter);
                    self.candidates.insert(letter);
                }
                Verdict::Absent if found_in_guess.contains(letter) => {
                    self.positions[i].exclude(letter);
                }
                Verdict::Absent => {
                    for position in &mut self.positions {
                        position.exclude(letter);
                    }
                }
            }
        }

        Ok(())
    }

    /// Value-in, value-out form of [`apply`](Self::apply)
    ///
    /// # Errors
    /// Same as [`apply`](Self::apply).
    pub fn applied(mut self, guess: &Word, feedback: &Feedback) -> Result<Self, EvaluateError> {
        self.apply(guess, feedback)?;
        Ok(self)
    }

    /// Whether `word` is consistent with everything deduced so far
    ///
    /// Each letter must still be possible at its index and every candidate
    /// letter must occur in the word. Letter counts are not tracked, so a
    /// word can be admitted and still be ruled out by a duplicate-letter
    /// verdict.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.len() == self.word_length()
            && word
                .chars()
                .iter()
                .zip(&self.positions)
                .all(|(&letter, position)| position.possible.contains(letter))
            && self.candidates.iter().all(|letter| word.has_letter(letter))
    }

    /// Confirmed letters by position, `_` where still unknown
    #[must_use]
    pub fn pattern_hint(&self) -> String {
        self.positions
            .iter()
            .map(|p| p.correct_letter.map_or('_', char::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, evaluate};

    fn play(state: &mut DeductionState, target: &str, guess: &str) -> Feedback {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = evaluate(&target, &guess).unwrap();
        state.apply(&guess, &feedback).unwrap();
        feedback
    }

    #[test]
    fn fresh_state_allows_everything() {
        let state = DeductionState::new(5);
        assert_eq!(state.word_length(), 5);
        assert!(state.candidates().is_empty());
        assert!(state.positions().iter().all(|p| p.possible == LetterSet::ALPHABET
            && p.excluded.is_empty()
            && p.correct_letter.is_none()));
        assert_eq!(state.pattern_hint(), "_____");
    }

    #[test]
    fn grape_then_tiger() {
        let mut state = DeductionState::new(5);
        play(&mut state, "tiger", "grape");

        let status = state.letter_status();
        assert_eq!(status.get(b'g'), LetterStatus::Present);
        assert_eq!(status.get(b'r'), LetterStatus::Present);
        assert_eq!(status.get(b'e'), LetterStatus::Present);
        assert_eq!(status.get(b'a'), LetterStatus::Absent);
        assert_eq!(status.get(b'p'), LetterStatus::Absent);
        assert_eq!(state.candidates().to_string(), "egr");

        // Present letters are excluded only where they were guessed
        assert!(!state.positions()[0].possible.contains(b'g'));
        assert!(state.positions()[2].possible.contains(b'g'));
        assert!(state.positions()[0].excluded.contains(b'g'));

        // Absent letters are excluded everywhere
        for position in state.positions() {
            assert!(!position.possible.contains(b'a'));
            assert!(!position.possible.contains(b'p'));
            assert!(position.excluded.contains(b'p'));
        }

        let feedback = play(&mut state, "tiger", "tiger");
        assert!(feedback.is_solved());
        assert_eq!(state.pattern_hint(), "tiger");
        for (position, &letter) in state.positions().iter().zip(b"tiger") {
            assert_eq!(position.correct_letter, Some(letter));
            assert_eq!(position.possible, LetterSet::only(letter));
        }
        assert_eq!(state.letter_status().get(b'g'), LetterStatus::Correct);
    }

    #[test]
    fn absent_duplicate_keeps_confirmed_letter() {
        // EERIE vs ABIDE: the leading E's are absent, the last one is correct
        let mut state = DeductionState::new(5);
        let feedback = play(&mut state, "abide", "eerie");
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Correct
            ]
        );

        let positions = state.positions();
        assert_eq!(positions[4].correct_letter, Some(b'e'));
        assert_eq!(positions[4].possible, LetterSet::only(b'e'));
        // E is only ruled out where it was guessed and scored absent
        assert!(!positions[0].possible.contains(b'e'));
        assert!(!positions[1].possible.contains(b'e'));
        assert!(positions[2].possible.contains(b'e'));
        assert!(state.candidates().contains(b'e'));
        assert_eq!(state.letter_status().get(b'e'), LetterStatus::Correct);
        // R never scored, so it is gone everywhere
        assert!(positions.iter().all(|p| !p.possible.contains(b'r')));
    }

    #[test]
    fn later_absent_never_clears_confirmed_position() {
        let mut state = DeductionState::new(5);
        play(&mut state, "tiger", "tamer");
        assert_eq!(state.positions()[0].correct_letter, Some(b't'));

        // A later guess cannot strip the confirmed T
        play(&mut state, "tiger", "stunt");
        assert_eq!(state.positions()[0].correct_letter, Some(b't'));
        assert_eq!(state.positions()[0].possible, LetterSet::only(b't'));
        assert_eq!(state.letter_status().get(b't'), LetterStatus::Correct);
    }

    #[test]
    fn target_is_always_admitted() {
        let target = Word::new("allot").unwrap();
        let mut state = DeductionState::new(5);
        for guess in ["lolly", "atoll", "tools", "allot"] {
            play(&mut state, "allot", guess);
            assert!(state.admits(&target), "target rejected after {guess}");
        }
    }

    #[test]
    fn admits_rejects_inconsistent_words() {
        let mut state = DeductionState::new(5);
        play(&mut state, "tiger", "grape");

        assert!(!state.admits(&Word::new("grape").unwrap()));
        // Missing the candidate letter G
        assert!(!state.admits(&Word::new("timer").unwrap()));
        assert!(!state.admits(&Word::new("cat").unwrap()));
        assert!(state.admits(&Word::new("tiger").unwrap()));
    }

    #[test]
    fn mismatched_lengths_leave_state_untouched() {
        let mut state = DeductionState::new(5);
        let before = state.clone();
        let guess = Word::new("cat").unwrap();
        let feedback = Feedback::solved(3);

        assert!(state.apply(&guess, &feedback).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn applied_matches_apply() {
        let target = Word::new("tiger").unwrap();
        let guess = Word::new("grape").unwrap();
        let feedback = evaluate(&target, &guess).unwrap();

        let mut in_place = DeductionState::new(5);
        in_place.apply(&guess, &feedback).unwrap();
        let by_value = DeductionState::new(5).applied(&guess, &feedback).unwrap();

        assert_eq!(in_place, by_value);
    }
}
