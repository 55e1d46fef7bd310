//! Guesser abstraction
//!
//! Defines the Guesser trait shared by the built-in solver and any external
//! guess source, plus a candidate-sampling baseline.

use super::engine::KnuthSolver;
use super::tracker::CandidateTracker;
use crate::core::{Code, CodeSpace, Score};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// What a guesser offers for the next turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// A well-formed code
    Guess(Code),
    /// No guess this turn
    Forfeit,
    /// Raw input that could not be turned into a code
    Malformed(String),
}

/// Anything that proposes guesses for a game
pub trait Guesser {
    /// Propose the next guess given the full (guess, score) history so far
    fn next_guess(&mut self, history: &[(Code, Score)]) -> Proposal;

    /// Called when the game is reset to a new secret
    fn notify_reset(&mut self);

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Knuth minimax (default)
    Knuth(KnuthSolver),
    /// Random pick among consistent codes
    Random(RandomConsistentGuesser),
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "knuth", "minimax", "random".
    /// Defaults to knuth if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, space: CodeSpace, seed: Option<u64>) -> Self {
        match name {
            "random" => Self::Random(RandomConsistentGuesser::new(space, seed)),
            _ => Self::Knuth(KnuthSolver::new(space)),
        }
    }
}

impl Guesser for StrategyType {
    fn next_guess(&mut self, history: &[(Code, Score)]) -> Proposal {
        match self {
            Self::Knuth(g) => g.next_guess(history),
            Self::Random(g) => g.next_guess(history),
        }
    }

    fn notify_reset(&mut self) {
        match self {
            Self::Knuth(g) => g.notify_reset(),
            Self::Random(g) => g.notify_reset(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Knuth(g) => g.name(),
            Self::Random(g) => g.name(),
        }
    }
}

/// Random strategy
///
/// Picks uniformly among codes still consistent with the history. Always a
/// logical guess, rarely an optimal one.
#[derive(Debug, Clone)]
pub struct RandomConsistentGuesser {
    space: CodeSpace,
    rng: StdRng,
}

impl RandomConsistentGuesser {
    /// Create a guesser; a fixed `seed` makes its choices reproducible
    #[must_use]
    pub fn new(space: CodeSpace, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        Self { space, rng }
    }
}

impl Guesser for RandomConsistentGuesser {
    fn next_guess(&mut self, history: &[(Code, Score)]) -> Proposal {
        let tracker = CandidateTracker::from_history(&self.space, history);
        match tracker.candidates().choose(&mut self.rng) {
            Some(code) => Proposal::Guess(code.clone()),
            None => {
                log::warn!("no consistent code left after {} guesses", history.len());
                Proposal::Forfeit
            }
        }
    }

    fn notify_reset(&mut self) {}

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_guess_is_consistent() {
        let space = CodeSpace::new(4, 6, true);
        let secret = Code::new(vec![1, 2, 3, 4], 6).unwrap();
        let first = Code::new(vec![0, 0, 1, 1], 6).unwrap();
        let history = vec![(first.clone(), Score::between(&first, &secret))];

        let mut guesser = RandomConsistentGuesser::new(space.clone(), Some(7));
        let Proposal::Guess(guess) = guesser.next_guess(&history) else {
            panic!("expected a guess");
        };

        let tracker = CandidateTracker::from_history(&space, &history);
        assert!(tracker.is_consistent(&guess));
    }

    #[test]
    fn random_guesser_forfeits_without_candidates() {
        let space = CodeSpace::new(2, 2, true);
        let code = Code::new(vec![0, 0], 2).unwrap();
        let history = vec![(code, Score::new(0, 2))];

        let mut guesser = RandomConsistentGuesser::new(space, Some(1));
        assert_eq!(guesser.next_guess(&history), Proposal::Forfeit);
    }

    #[test]
    fn seeded_random_guesser_is_reproducible() {
        let space = CodeSpace::new(4, 6, true);
        let mut a = RandomConsistentGuesser::new(space.clone(), Some(42));
        let mut b = RandomConsistentGuesser::new(space, Some(42));
        assert_eq!(a.next_guess(&[]), b.next_guess(&[]));
    }

    #[test]
    fn from_name_selects_strategy() {
        let space = CodeSpace::new(2, 2, true);
        assert_eq!(StrategyType::from_name("random", space.clone(), None).name(), "random");
        assert_eq!(StrategyType::from_name("knuth", space.clone(), None).name(), "knuth");
        assert_eq!(StrategyType::from_name("whatever", space, None).name(), "knuth");
    }
}
