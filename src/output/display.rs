//! Display functions for game state and command results

use super::formatters::{create_progress_bar, letters_with_status, position_hint};
use crate::commands::{CheckResult, LengthReport, SimulationResult};
use crate::core::{DeductionState, Feedback, LetterStatus, LetterStatusMap, Verdict, Word};
use crate::game::{GameRound, Session};
use crate::wordlists::PoolSource;
use colored::{ColoredString, Colorize};

fn colored_tile(letter: u8, verdict: Verdict) -> ColoredString {
    let tile = format!(" {} ", (letter as char).to_ascii_uppercase());
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// One guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| colored_tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print every guess of the round so far
pub fn print_guess_history(round: &GameRound) {
    println!();
    for (i, attempt) in round.history().iter().enumerate() {
        println!(
            "  {:>2}. {}",
            i + 1,
            colored_guess(&attempt.guess, &attempt.feedback)
        );
    }
    println!();
}

/// Print the keyboard-style letter board
pub fn print_letter_status(map: &LetterStatusMap) {
    let line: Vec<String> = map
        .iter()
        .map(|(letter, status)| {
            let upper = (letter as char).to_ascii_uppercase().to_string();
            match status {
                LetterStatus::Correct => upper.black().on_green().bold().to_string(),
                LetterStatus::Present => upper.black().on_yellow().bold().to_string(),
                LetterStatus::Absent => upper.bright_black().strikethrough().to_string(),
                LetterStatus::Unknown => upper.white().to_string(),
            }
        })
        .collect();
    println!("  {}\n", line.join(" "));
}

/// Print what the deductions say about the hidden word
pub fn print_candidate_panel(deduction: &DeductionState) {
    println!("  Pattern:   {}", position_hint(deduction).bright_green().bold());

    let present = deduction
        .candidates()
        .iter()
        .filter(|&l| {
            deduction
                .positions()
                .iter()
                .all(|p| p.correct_letter != Some(l))
        })
        .map(|l| (l as char).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>();
    if !present.is_empty() {
        println!("  Misplaced: {}", present.join(" ").yellow().bold());
    }

    let absent = letters_with_status(deduction.letter_status(), LetterStatus::Absent);
    if !absent.is_empty() {
        println!("  Absent:    {}", absent.bright_black());
    }
    println!();
}

/// Print finished games of the session, most recent first
pub fn print_records(session: &Session) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Played {}, won {}, best {}",
        session.games_played(),
        session.games_won(),
        session
            .best_record()
            .map_or_else(|| "-".to_string(), |best| best.to_string())
    );
    println!("{}", "─".repeat(60).cyan());

    for record in session.records() {
        let result = if record.won {
            format!("solved in {}", record.attempts).green()
        } else {
            format!("missed after {}", record.attempts).red()
        };
        println!(
            "  {:<12} {:>2} letters  {result}",
            record.word.to_uppercase(),
            record.word_length
        );
    }
    println!();
}

/// Print the result of the `check` command
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}   {}\n",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    print_candidate_panel(&result.deduction);
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Word length:      {}", result.word_length);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.max_attempts {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / result.games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
    let losses = result.games - result.wins;
    if losses > 0 {
        let pct = (losses as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("    X: {} {losses:4} ({pct:5.1}%)", bar.red());
    }
}

/// Print the word lengths the pool offers
pub fn print_lengths(report: &LengthReport) {
    let source = match report.source {
        PoolSource::Loaded => "loaded list",
        PoolSource::Fallback => "built-in list",
    };
    println!(
        "\n{} words from the {source}\n",
        report.total.to_string().bright_cyan().bold()
    );
    for &(length, count) in &report.counts {
        let marker = if length == report.active_length {
            "◀".bright_green().to_string()
        } else {
            String::new()
        };
        println!("   {length:>2} letters: {count:6} {marker}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn colored_guess_has_one_tile_per_letter() {
        colored::control::set_override(false);
        let target = Word::new("tiger").unwrap();
        let guess = Word::new("grape").unwrap();
        let feedback = evaluate(&target, &guess).unwrap();

        assert_eq!(colored_guess(&guess, &feedback), " G   R   A   P   E ");
    }
}
