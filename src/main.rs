//! Word Guess - CLI
//!
//! Variable-length word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_guess::{
    commands::{SimulationConfig, check_guess, list_lengths, run_simple, run_simulation},
    game::{
        GameConfig, Session,
        config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH},
    },
    logging,
    output::{print_check_result, print_lengths, print_simulation_result},
    wordlists::{WordPool, loader::load_source},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden word; every guess reveals which letters are right",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (built-in list if missing or unreadable)
    #[arg(short = 'w', long, global = true, env = "WORD_GUESS_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Preferred word length; the closest available length is used otherwise
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score one guess against a target word
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Let the automatic player play many rounds
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// List available word lengths
    Lengths,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_attempts: self.max_attempts,
            word_length: self.length,
            wordlist: self.wordlist.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so it only ever logs to a file
    let console = !matches!(command, Commands::Play);
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref(), console)?;

    let config = cli.game_config();
    config.validate().context("Invalid configuration")?;

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(config),
        Commands::Check { target, guess } => run_check_command(target, guess),
        Commands::Simulate { count, quiet } => {
            run_simulate_command(&config, *count, !*quiet);
            Ok(())
        }
        Commands::Lengths => {
            print_lengths(&list_lengths(&load_pool(&config)));
            Ok(())
        }
    }
}

fn load_pool(config: &GameConfig) -> WordPool {
    load_source(config.wordlist.as_deref(), config.word_length)
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess)?;
    print_check_result(&result);
    Ok(())
}

fn run_simulate_command(config: &GameConfig, count: usize, show_progress: bool) {
    let pool = load_pool(config);
    let seed = config.seed.unwrap_or_else(rand::random);

    println!(
        "Playing {count} rounds of {}-letter words ({} in list, seed {seed})...",
        pool.active_length(),
        pool.active_count()
    );

    let result = run_simulation(
        &pool,
        &SimulationConfig {
            games: count,
            max_attempts: config.max_attempts,
            seed,
            show_progress,
        },
    );
    print_simulation_result(&result);
}

fn run_simple_command(config: GameConfig) -> Result<()> {
    let mut session = Session::from_config(config).context("Failed to start a game")?;
    run_simple(&mut session)
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let session = Session::from_config(config).context("Failed to start a game")?;
    run_tui(App::new(session))
}
