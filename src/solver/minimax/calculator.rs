//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible score.

use crate::core::{Code, Score, ScoreTable};

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible score that could result from this guess:
/// - Count how many candidates would produce that score
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeSpace, ScoreTable};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let space = CodeSpace::new(2, 2, true);
/// let table = ScoreTable::new(2);
/// let guess = &space.codes()[0]; // 00
///
/// // 01 and 10 both score (1, 0) against 00
/// assert_eq!(calculate_max_remaining(guess, space.codes(), &table), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code], table: &ScoreTable) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    partition_sizes(guess, candidates, table)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Tally candidates by the score they produce with the guess
///
/// The result is indexed like `table.scores()`.
#[must_use]
pub fn partition_sizes(guess: &Code, candidates: &[Code], table: &ScoreTable) -> Vec<usize> {
    let mut counts = vec![0usize; table.len()];

    for candidate in candidates {
        let score = Score::between(guess, candidate);
        debug_assert!(table.contains(score), "score {score} missing from table");
        if let Some(slot) = table.index_of(score) {
            counts[slot] += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeSpace;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs.to_vec(), 6).unwrap()
    }

    #[test]
    fn max_remaining_perfect_split() {
        // Each candidate lands in its own score
        let table = ScoreTable::new(4);
        let guess = code(&[0, 1, 2, 3]);
        let candidates = [code(&[0, 1, 2, 3]), code(&[4, 4, 4, 4])];

        assert_eq!(calculate_max_remaining(&guess, &candidates, &table), 1);
    }

    #[test]
    fn max_remaining_all_same_score() {
        // No shared colors with any candidate
        let table = ScoreTable::new(4);
        let guess = code(&[5, 5, 5, 5]);
        let candidates = [
            code(&[0, 0, 0, 0]),
            code(&[1, 1, 1, 1]),
            code(&[2, 2, 2, 2]),
        ];

        assert_eq!(calculate_max_remaining(&guess, &candidates, &table), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let table = ScoreTable::new(4);
        assert_eq!(calculate_max_remaining(&code(&[0, 0, 1, 1]), &[], &table), 0);
    }

    #[test]
    fn knuth_opening_worst_case() {
        // 1122 leaves at most 256 codes, the figure in Knuth's paper
        let space = CodeSpace::new(4, 6, true);
        let table = ScoreTable::new(4);
        let guess = code(&[0, 0, 1, 1]);

        assert_eq!(calculate_max_remaining(&guess, space.codes(), &table), 256);
    }

    #[test]
    fn partitions_cover_every_candidate() {
        let space = CodeSpace::new(4, 6, true);
        let table = ScoreTable::new(4);
        let guess = code(&[0, 1, 2, 3]);

        let sizes = partition_sizes(&guess, space.codes(), &table);
        assert_eq!(sizes.len(), table.len());
        assert_eq!(sizes.iter().sum::<usize>(), space.len());

        let solved = table.index_of(Score::solved(4)).unwrap();
        assert_eq!(sizes[solved], 1);
    }

    #[test]
    fn minimax_prefers_better_splits() {
        let table = ScoreTable::new(4);
        let candidates = [code(&[0, 0, 0, 0]), code(&[1, 1, 1, 1])];

        let bad = calculate_max_remaining(&code(&[5, 5, 5, 5]), &candidates, &table);
        let good = calculate_max_remaining(&code(&[0, 0, 0, 0]), &candidates, &table);

        assert!(good < bad);
    }
}
