//! Word Guess
//!
//! A variable-length word guessing game. Every guess is scored letter by
//! letter against a hidden word, and the round keeps track of what those
//! scores reveal about each position.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::{DeductionState, Verdict, Word, evaluate};
//!
//! let target = Word::new("tiger").unwrap();
//! let guess = Word::new("grape").unwrap();
//!
//! let feedback = evaluate(&target, &guess).unwrap();
//! assert_eq!(feedback.to_emoji(), "🟨🟨⬜⬜🟨");
//! assert_eq!(feedback.count(Verdict::Present), 3);
//!
//! let state = DeductionState::new(5).applied(&guess, &feedback).unwrap();
//! assert!(state.admits(&target));
//! ```

// Core domain types
pub mod core;

// Round and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
