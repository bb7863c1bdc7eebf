//! Game state layered on top of the core
//!
//! A `GameRound` is one playthrough; a `Session` strings rounds together and
//! keeps the word pool, random source and game records.

pub mod config;
mod round;
mod session;

pub use config::{ConfigError, GameConfig};
pub use round::{Attempt, GameRound, GuessError, GuessOutcome, RoundStatus};
pub use session::{GameRecord, RECORD_LIMIT, Session, SessionError};
