//! Mastermind solving algorithms
//!
//! Candidate tracking, minimax guess selection, the Knuth solver and the
//! loop that plays guessers against a game.

mod engine;
pub mod minimax;
mod progress;
mod runner;
pub mod strategy;
mod tracker;

pub use engine::KnuthSolver;
pub use progress::{MoveAssessment, ProgressTracker, assess_history};
pub use runner::{
    BatchResult, BatchSummary, GameRecord, MalformedPolicy, SolveConfig, TurnRecord, play_every_secret,
    play_game, run_games,
};
pub use strategy::{Guesser, Proposal, RandomConsistentGuesser, StrategyType};
pub use tracker::{CandidateTracker, filter_candidates};
