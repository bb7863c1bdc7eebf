//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, get colored feedback.

use crate::game::{GameRound, GuessError, RoundStatus, Session};
use crate::output::display::{
    print_candidate_panel, print_guess_history, print_letter_status, print_records,
};
use crate::output::formatters::share_text;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round cannot be started.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the game loop reading commands and guesses from `input`
///
/// # Errors
///
/// Returns an error if reading fails or if a new round cannot be started.
pub fn run_simple_with<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Guess - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess every letter is marked:");
    println!("  - {} right letter, right spot", "green".green().bold());
    println!("  - {} in the word, wrong spot", "yellow".yellow().bold());
    println!("  - {} not in the word\n", "gray".bright_black().bold());
    println!("Commands start with ':' so any word can be guessed:");
    println!(
        "  :new  :reveal  :hint  :letters  :length <n>  :history  :quit\n"
    );

    announce_round(session);

    loop {
        let Some(line) = read_line(input, &prompt(session.round()))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let lowered = line.to_lowercase();
        let Some(command) = lowered.strip_prefix(':') else {
            if !lowered.is_empty() {
                play_guess(session, &lowered);
            }
            continue;
        };
        let mut parts = command.split_whitespace();

        match (parts.next(), parts.next()) {
            (None, _) => println!("❌ Missing command after ':'\n"),
            (Some("quit" | "q" | "exit"), _) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            (Some("new" | "n"), _) => {
                session.new_game().context("Failed to start a new round")?;
                announce_round(session);
            }
            (Some("reveal"), _) => {
                let target = session.reveal();
                println!(
                    "\nThe word was {}. Type ':new' to play again.\n",
                    target.text().to_uppercase().bright_yellow().bold()
                );
            }
            (Some("hint"), _) => {
                let hints = session.hint_words(10);
                if hints.is_empty() {
                    println!("No consistent words left in the list.\n");
                } else {
                    let list: Vec<String> =
                        hints.iter().map(|w| w.text().to_uppercase()).collect();
                    println!("Still possible: {}\n", list.join(", ").cyan());
                }
            }
            (Some("letters"), _) => {
                print_letter_status(session.round().deduction().letter_status());
                print_candidate_panel(session.round().deduction());
            }
            (Some("history"), _) => print_records(session),
            (Some("length"), Some(arg)) => match arg.parse::<usize>() {
                Ok(requested) => {
                    let used = session
                        .set_word_length(requested)
                        .context("Failed to start a new round")?;
                    if used != requested {
                        println!("No {requested}-letter words available, using {used}.");
                    }
                    announce_round(session);
                }
                Err(_) => println!("❌ '{arg}' is not a number\n"),
            },
            (Some("length"), None) => println!("Usage: :length <n>\n"),
            (Some(_), _) => println!("❌ Unknown command: {line}\n"),
        }
    }
}

/// Attempt counter shown before each input line
fn prompt(round: &GameRound) -> String {
    format!(
        "Guess {}/{}",
        round.current_attempt().min(round.max_attempts()),
        round.max_attempts()
    )
}

fn play_guess(session: &mut Session, guess: &str) {
    match session.submit_guess(guess) {
        Ok(outcome) => {
            print_guess_history(session.round());
            match outcome.status {
                RoundStatus::Won { attempts } => {
                    print_win(session, attempts, outcome.new_best);
                }
                RoundStatus::Lost => {
                    println!(
                        "\n{} The word was {}. Type ':new' to play again.\n",
                        "Out of attempts!".red().bold(),
                        session.round().target().text().to_uppercase().bold()
                    );
                }
                RoundStatus::InProgress | RoundStatus::Revealed => {
                    print_candidate_panel(session.round().deduction());
                    println!("{} attempts left\n", session.round().remaining_attempts());
                }
            }
        }
        Err(GuessError::RoundOver) => {
            println!("This round is over. Type ':new' to start another.\n");
        }
        Err(err) => println!("❌ {err}\n"),
    }
}

fn announce_round(session: &Session) {
    println!(
        "🔄 New game! The hidden word has {} letters and you have {} attempts.\n",
        session.round().word_length().to_string().bright_cyan().bold(),
        session.round().max_attempts()
    );
}

fn print_win(session: &Session, attempts: usize, new_best: bool) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "          🎉  W O R D   F O U N D !  🎉          "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );
    if new_best {
        println!("  {}", "New best record!".bright_yellow().bold());
    }
    if let Some(text) = share_text(session.round()) {
        println!("\n{text}\n");
    }
    println!("Type ':new' to play again.\n");
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
