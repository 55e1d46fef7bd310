//! Minimax-based Mastermind solver
//!
//! Implements Knuth's worst-case minimization over the code space.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition_sizes};
pub use selector::{optimal_guesses, select_best_guess, worst_cases};
