//! Wordle Simulator
//!
//! Plays Wordle against a hidden target automatically: each turn ranks the
//! remaining candidates by positional letter frequency, plays the preferred
//! guess, and narrows the candidates with the resulting feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_simulator::core::{Pattern, Word};
//! use wordle_simulator::solver::simulate;
//! use wordle_simulator::wordlists::words_from_slice;
//!
//! // Calculate feedback
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &target).unwrap().to_string(), "BBGBG");
//!
//! // Simulate a game
//! let dictionary = words_from_slice(&["crane", "slate", "crate"]);
//! let transcript = simulate(&target, &dictionary).unwrap();
//! assert!(transcript.is_solved());
//! ```

// Core domain types
pub mod core;

// Guessing engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
