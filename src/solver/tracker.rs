//! Candidate set bookkeeping
//!
//! Keeps the codes still consistent with every (guess, score) pair seen so
//! far, in enumeration order, plus a hash set for O(1) membership.

use crate::core::{Code, CodeSpace, Score};
use rustc_hash::FxHashSet;

/// Codes of `candidates` that would have produced `observed` for `guess`
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeSpace, Score};
/// use mastermind_solver::solver::filter_candidates;
///
/// let space = CodeSpace::new(2, 2, true);
/// let guess = space.codes()[1].clone(); // 01
/// let remaining = filter_candidates(space.codes(), &guess, Score::new(0, 2));
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].pegs(), &[1, 0]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Score) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| {
            candidate.len() == guess.len() && Score::between(guess, candidate) == observed
        })
        .cloned()
        .collect()
}

/// Set of codes consistent with all feedback applied so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTracker {
    candidates: Vec<Code>,
    members: FxHashSet<Code>,
}

impl CandidateTracker {
    /// Start from the full code space
    #[must_use]
    pub fn new(space: &CodeSpace) -> Self {
        Self::from_codes(space.codes().to_vec())
    }

    fn from_codes(candidates: Vec<Code>) -> Self {
        let members = candidates.iter().cloned().collect();
        Self {
            candidates,
            members,
        }
    }

    /// Replay a whole history on top of the full space
    #[must_use]
    pub fn from_history(space: &CodeSpace, history: &[(Code, Score)]) -> Self {
        let mut tracker = Self::new(space);
        for (guess, score) in history {
            tracker.filter(guess, *score);
        }
        tracker
    }

    /// Drop every candidate inconsistent with `(guess, observed)`
    ///
    /// Returns the number of candidates removed. Idempotent for a repeated
    /// pair, and the final set is independent of the order pairs arrive in.
    pub fn filter(&mut self, guess: &Code, observed: Score) -> usize {
        let before = self.candidates.len();
        self.candidates = filter_candidates(&self.candidates, guess, observed);
        if self.candidates.len() != before {
            self.members = self.candidates.iter().cloned().collect();
        }
        before - self.candidates.len()
    }

    /// Restore the full code space
    pub fn reset(&mut self, space: &CodeSpace) {
        *self = Self::new(space);
    }

    /// A guess is logical if it could still be the secret
    #[must_use]
    pub fn is_consistent(&self, guess: &Code) -> bool {
        self.members.contains(guess)
    }

    /// Remaining candidates in enumeration order
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs.to_vec(), 6).unwrap()
    }

    #[test]
    fn starts_with_full_space() {
        let space = CodeSpace::new(4, 6, true);
        let tracker = CandidateTracker::new(&space);
        assert_eq!(tracker.len(), 1296);
        assert!(tracker.is_consistent(&code(&[5, 4, 3, 2])));
    }

    #[test]
    fn filter_keeps_secret() {
        let space = CodeSpace::new(4, 6, true);
        let mut tracker = CandidateTracker::new(&space);
        let secret = code(&[3, 1, 4, 1]);
        let guess = code(&[0, 0, 1, 1]);

        let removed = tracker.filter(&guess, Score::between(&guess, &secret));

        assert!(removed > 0);
        assert!(tracker.is_consistent(&secret));
        assert!(!tracker.is_consistent(&guess));
        assert_eq!(tracker.len() + removed, 1296);
    }

    #[test]
    fn filter_is_idempotent() {
        let space = CodeSpace::new(4, 6, true);
        let mut tracker = CandidateTracker::new(&space);
        let guess = code(&[0, 0, 1, 1]);

        tracker.filter(&guess, Score::new(1, 1));
        let once = tracker.clone();
        let removed = tracker.filter(&guess, Score::new(1, 1));

        assert_eq!(removed, 0);
        assert_eq!(tracker, once);
    }

    #[test]
    fn filter_order_does_not_matter() {
        let space = CodeSpace::new(4, 6, true);
        let secret = code(&[2, 5, 2, 0]);
        let first = code(&[0, 0, 1, 1]);
        let second = code(&[2, 3, 4, 5]);
        let history = [
            (first.clone(), Score::between(&first, &secret)),
            (second.clone(), Score::between(&second, &secret)),
        ];

        let forward = CandidateTracker::from_history(&space, &history);
        let reversed: Vec<_> = history.iter().rev().cloned().collect();
        let backward = CandidateTracker::from_history(&space, &reversed);

        assert_eq!(forward.candidates(), backward.candidates());
    }

    #[test]
    fn impossible_feedback_empties_set() {
        let space = CodeSpace::new(4, 6, true);
        let mut tracker = CandidateTracker::new(&space);
        tracker.filter(&code(&[0, 0, 0, 0]), Score::new(0, 4));
        assert!(tracker.is_empty());
    }

    #[test]
    fn reset_restores_space() {
        let space = CodeSpace::new(3, 3, true);
        let mut tracker = CandidateTracker::new(&space);
        tracker.filter(&code(&[0, 1, 2]), Score::new(0, 0));
        assert!(tracker.len() < space.len());

        tracker.reset(&space);
        assert_eq!(tracker.candidates(), space.codes());
    }

    #[test]
    fn filter_candidates_ignores_length_mismatch() {
        let candidates = vec![code(&[0, 1]), code(&[0, 1, 2])];
        let remaining = filter_candidates(&candidates, &code(&[0, 1]), Score::new(2, 0));
        assert_eq!(remaining, vec![code(&[0, 1])]);
    }
}
