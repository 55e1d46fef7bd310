//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::{Code, ScoreTable};
use crate::solver::tracker::CandidateTracker;
use rayon::prelude::*;

/// Worst-case remaining count for every guess in the pool, in pool order
#[must_use]
pub fn worst_cases(guess_pool: &[Code], candidates: &[Code], table: &ScoreTable) -> Vec<usize> {
    guess_pool
        .par_iter()
        .map(|guess| calculate_max_remaining(guess, candidates, table))
        .collect()
}

/// Guesses from the pool that reach the minimal worst case, in pool order
///
/// Returns the shared worst-case value alongside. Empty pool yields `None`.
#[must_use]
pub fn optimal_guesses<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
    table: &ScoreTable,
) -> Option<(Vec<&'a Code>, usize)> {
    let scores = worst_cases(guess_pool, candidates, table);
    let best = *scores.iter().min()?;

    let optimal = guess_pool
        .iter()
        .zip(&scores)
        .filter(|&(_, &score)| score == best)
        .map(|(guess, _)| guess)
        .collect();

    Some((optimal, best))
}

/// Select best guess by minimizing worst-case remaining candidates
///
/// Among guesses sharing the minimal worst case, the first one (in pool
/// order) that is still a candidate wins; failing that, the first overall.
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeSpace, ScoreTable};
/// use mastermind_solver::solver::CandidateTracker;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let space = CodeSpace::new(4, 6, true);
/// let table = ScoreTable::new(4);
/// let tracker = CandidateTracker::new(&space);
///
/// let (best, max_remaining) = select_best_guess(space.codes(), &tracker, &table).unwrap();
/// assert_eq!(best.to_string(), "1122");
/// assert_eq!(max_remaining, 256);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    tracker: &CandidateTracker,
    table: &ScoreTable,
) -> Option<(&'a Code, usize)> {
    let (optimal, best) = optimal_guesses(guess_pool, tracker.candidates(), table)?;

    let chosen = optimal
        .iter()
        .find(|guess| tracker.is_consistent(guess))
        .or_else(|| optimal.first())?;

    Some((*chosen, best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeSpace, Score};

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs.to_vec(), 6).unwrap()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let space = CodeSpace::new(4, 6, true);
        let table = ScoreTable::new(4);
        let mut tracker = CandidateTracker::new(&space);
        tracker.filter(&code(&[0, 0, 1, 1]), Score::new(0, 0));

        let pool = [code(&[0, 0, 0, 0]), code(&[2, 2, 3, 4])];
        let (best, max_remaining) = select_best_guess(&pool, &tracker, &table).unwrap();

        // 1111 tells nothing new once 1 and 2 are ruled out
        assert_eq!(best, &pool[1]);
        assert!(max_remaining < tracker.len());
    }

    #[test]
    fn worst_cases_follow_pool_order() {
        let space = CodeSpace::new(4, 6, true);
        let table = ScoreTable::new(4);
        let pool = [code(&[0, 0, 0, 0]), code(&[0, 0, 1, 1]), code(&[0, 1, 2, 3])];

        let scores = worst_cases(&pool, space.codes(), &table);
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 625);
        assert_eq!(scores[1], 256);
    }

    fn narrowed_tracker() -> CandidateTracker {
        // Leaves 0002, 0003, 0004, 0005
        let space = CodeSpace::new(4, 6, true);
        let mut tracker = CandidateTracker::new(&space);
        tracker.filter(&code(&[0, 0, 0, 0]), Score::new(3, 0));
        tracker.filter(&code(&[0, 0, 0, 1]), Score::new(3, 0));
        tracker
    }

    #[test]
    fn ties_prefer_candidates() {
        let table = ScoreTable::new(4);
        let tracker = narrowed_tracker();
        assert_eq!(tracker.len(), 4);

        let pool = [code(&[5, 5, 5, 5]), code(&[0, 0, 0, 2])];
        let (optimal, worst) = optimal_guesses(&pool, tracker.candidates(), &table).unwrap();
        assert_eq!(optimal.len(), 2);
        assert_eq!(worst, 3);

        let (best, _) = select_best_guess(&pool, &tracker, &table).unwrap();
        assert_eq!(best, &pool[1]);
    }

    #[test]
    fn ties_fall_back_to_first_overall() {
        let table = ScoreTable::new(4);
        let tracker = narrowed_tracker();

        let pool = [code(&[5, 5, 5, 5]), code(&[4, 4, 4, 4])];
        let (best, max_remaining) = select_best_guess(&pool, &tracker, &table).unwrap();

        assert_eq!(best, &pool[0]);
        assert_eq!(max_remaining, 3);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let space = CodeSpace::new(2, 2, true);
        let table = ScoreTable::new(2);
        let tracker = CandidateTracker::new(&space);

        assert!(select_best_guess(&[], &tracker, &table).is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let space = CodeSpace::new(3, 4, true);
        let table = ScoreTable::new(3);
        let tracker = CandidateTracker::new(&space);

        let first = select_best_guess(space.codes(), &tracker, &table);
        let second = select_best_guess(space.codes(), &tracker, &table);
        assert_eq!(first, second);
    }
}
