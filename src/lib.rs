//! Mastermind Solver
//!
//! A Mastermind code breaker using Knuth's minimax strategy, solving every
//! 4-peg, 6-color secret in at most five guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Alphabet, Score};
//!
//! let alphabet = Alphabet::new(["red", "blue", "green", "yellow"]).unwrap();
//! let secret = alphabet.parse_code("red, blue, green, yellow").unwrap();
//! let guess = alphabet.parse_code("red, yellow, green, blue").unwrap();
//!
//! // Calculate feedback
//! let score = Score::calculate(&guess, &secret).unwrap();
//! assert_eq!(score, Score::new(2, 2));
//! ```

// Core domain types
pub mod core;

// Game instance: secret, history, state machine
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
