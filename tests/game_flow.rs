//! End-to-end rounds through the public API.

use word_guess::core::{LetterStatus, Verdict};
use word_guess::game::{GameConfig, GuessError, RoundStatus, Session};
use word_guess::output::share_text;
use word_guess::wordlists::loader::load_pool;

fn session(words: &str, max_attempts: usize) -> Session {
    let config = GameConfig {
        max_attempts,
        seed: Some(11),
        ..GameConfig::default()
    };
    Session::new(config, load_pool(Some(words), 5)).unwrap()
}

#[test]
fn tiger_round_from_start_to_share() {
    let mut session = session("tiger\n", 12);

    let first = session.submit_guess("GRAPE").unwrap();
    assert_eq!(first.feedback.to_emoji(), "🟨🟨⬜⬜🟨");
    assert_eq!(first.status, RoundStatus::InProgress);

    let deduction = session.round().deduction();
    assert_eq!(deduction.letter_status().get(b'a'), LetterStatus::Absent);
    assert_eq!(deduction.letter_status().get(b'g'), LetterStatus::Present);
    assert_eq!(deduction.candidates().to_string(), "egr");
    assert!(!deduction.positions()[0].possible.contains(b'g'));
    assert!(
        deduction
            .positions()
            .iter()
            .all(|p| !p.possible.contains(b'a') && !p.possible.contains(b'p'))
    );

    let second = session.submit_guess("tiger").unwrap();
    assert_eq!(second.feedback.count(Verdict::Correct), 5);
    assert_eq!(second.status, RoundStatus::Won { attempts: 2 });
    assert_eq!(session.round().deduction().pattern_hint(), "tiger");

    let share = share_text(session.round()).unwrap();
    assert_eq!(
        share,
        "I guessed the 5-letter word TIGER in 2/12 attempts!\n\n🟨🟨⬜⬜🟨\n🟩🟩🟩🟩🟩"
    );
}

#[test]
fn losing_round_is_recorded() {
    let mut session = session("tiger\n", 2);
    session.submit_guess("grape").unwrap();
    let last = session.submit_guess("timer").unwrap();

    assert_eq!(last.status, RoundStatus::Lost);
    assert_eq!(session.submit_guess("tiger"), Err(GuessError::RoundOver));

    let record = session.records().next().unwrap();
    assert!(!record.won);
    assert_eq!(record.attempts, 2);
    assert!(share_text(session.round()).unwrap().starts_with("The 5-letter word TIGER"));
}

#[test]
fn rejected_guesses_leave_round_untouched() {
    let mut session = session("tiger\n", 3);

    assert!(matches!(
        session.submit_guess("tige"),
        Err(GuessError::Incomplete { expected: 5, got: 4 })
    ));
    assert!(matches!(
        session.submit_guess("tig3r"),
        Err(GuessError::InvalidWord(_))
    ));
    assert_eq!(session.round().current_attempt(), 1);
    assert!(session.round().history().is_empty());
    assert_eq!(session.games_played(), 0);
}
