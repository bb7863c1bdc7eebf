//! Terminal output formatting
//!
//! Display utilities for the game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidate_panel, print_check_result, print_guess_history, print_letter_status,
    print_lengths, print_records, print_simulation_result,
};
pub use formatters::share_text;
