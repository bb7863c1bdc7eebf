//! Self-play simulation
//!
//! Plays many rounds with an automatic player that always guesses the first
//! active word still admitted by the round's deductions.

use crate::core::Word;
use crate::game::{GameRound, RoundStatus};
use crate::wordlists::WordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub max_attempts: usize,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Aggregate results of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub word_length: usize,
    pub max_attempts: usize,
    pub average_attempts: f64,
    /// Winning attempt number -> number of games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play one round against `target` with the automatic player
#[must_use]
pub fn play_auto_round(pool: &WordPool, target: &Word, max_attempts: usize) -> GameRound {
    let mut round = GameRound::new(target.clone(), max_attempts);

    while round.status() == RoundStatus::InProgress {
        let next = pool.active_words().find(|word| {
            round.deduction().admits(word)
                && round.history().iter().all(|a| a.guess.text() != word.text())
        });

        let Some(guess) = next else {
            tracing::warn!(word = target.text(), "Automatic player ran out of words");
            break;
        };

        if let Err(err) = round.submit(guess.text()) {
            tracing::warn!(%err, "Automatic guess rejected");
            break;
        }
    }

    round
}

/// Run `config.games` automatic rounds on the pool's active length in parallel
pub fn run_simulation(pool: &WordPool, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("{}-letter words", pool.active_length()));
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<RoundStatus> = (0..config.games)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let target = pool.pick_target(&mut rng)?;
            let round = play_auto_round(pool, target, config.max_attempts);
            pb.inc(1);
            Some(round.status())
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_attempts = 0;
    for status in &outcomes {
        if let RoundStatus::Won { attempts } = *status {
            *distribution.entry(attempts).or_insert(0) += 1;
            total_attempts += attempts;
        }
    }
    let wins: usize = distribution.values().sum();

    tracing::info!(
        games = outcomes.len(),
        wins,
        length = pool.active_length(),
        "Simulation finished"
    );

    SimulationResult {
        games: outcomes.len(),
        wins,
        word_length: pool.active_length(),
        max_attempts: config.max_attempts,
        average_attempts: if wins == 0 {
            0.0
        } else {
            total_attempts as f64 / wins as f64
        },
        distribution,
        duration: start.elapsed(),
    }
}
