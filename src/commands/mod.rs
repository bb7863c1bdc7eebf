//! Command implementations

pub mod check;
pub mod lengths;
pub mod simple;
pub mod simulate;

pub use check::{CheckResult, check_guess};
pub use lengths::{LengthReport, list_lengths};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, play_auto_round, run_simulation};
