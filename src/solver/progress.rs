//! Move-by-move assessment of a guess history
//!
//! Replays (guess, score) pairs against a private candidate set and reports
//! how many codes remain, whether each guess was logical (still a candidate)
//! and, optionally, whether it was minimax-optimal.

use super::minimax::{calculate_max_remaining, optimal_guesses};
use super::tracker::CandidateTracker;
use crate::core::{Code, CodeSpace, Score, ScoreTable};
use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Analytics for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAssessment {
    pub turn: usize,
    pub remaining_before: usize,
    pub remaining_after: usize,
    /// The guess could have been the secret
    pub is_logical: bool,
    /// Present only when optimality was requested
    pub is_optimal: Option<bool>,
    /// Worst-case partition size of the guess over the candidates before it
    pub worst_case: Option<usize>,
}

/// Candidate bookkeeping for grading guesses from any source
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    space: CodeSpace,
    table: ScoreTable,
    tracker: CandidateTracker,
    unused: Vec<Code>,
    turn: usize,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(space: CodeSpace) -> Self {
        let table = ScoreTable::new(space.code_length());
        let tracker = CandidateTracker::new(&space);
        let unused = space.codes().to_vec();
        Self {
            space,
            table,
            tracker,
            unused,
            turn: 0,
        }
    }

    /// Candidates still possible
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tracker.len()
    }

    #[must_use]
    pub const fn tracker(&self) -> &CandidateTracker {
        &self.tracker
    }

    /// Apply one turn and grade it
    ///
    /// Optimality costs a full minimax pass over the unused guesses, so it
    /// is computed only when `assess_optimality` is set.
    ///
    /// # Errors
    /// Returns `GameError::EmptyCandidateSet` if the feedback rules out every
    /// code; the tracker is left empty and the game should be abandoned.
    pub fn record(
        &mut self,
        guess: &Code,
        score: Score,
        assess_optimality: bool,
    ) -> Result<MoveAssessment, GameError> {
        self.turn += 1;
        let remaining_before = self.tracker.len();
        let is_logical = self.tracker.is_consistent(guess);

        let (is_optimal, worst_case) = if assess_optimality {
            let worst = calculate_max_remaining(guess, self.tracker.candidates(), &self.table);
            let best = optimal_guesses(&self.unused, self.tracker.candidates(), &self.table)
                .map_or(worst, |(_, best)| best);
            (Some(worst <= best), Some(worst))
        } else {
            (None, None)
        };

        self.tracker.filter(guess, score);
        self.unused.retain(|code| code != guess);

        if self.tracker.is_empty() {
            log::error!(
                "no candidates left after turn {} ({guess} scored {score})",
                self.turn
            );
            return Err(GameError::EmptyCandidateSet { turn: self.turn });
        }

        Ok(MoveAssessment {
            turn: self.turn,
            remaining_before,
            remaining_after: self.tracker.len(),
            is_logical,
            is_optimal,
            worst_case,
        })
    }

    /// Back to the full code space
    pub fn reset(&mut self) {
        self.tracker.reset(&self.space);
        self.unused = self.space.codes().to_vec();
        self.turn = 0;
    }
}

/// Grade a whole history from scratch
///
/// # Errors
/// Returns `GameError::EmptyCandidateSet` at the first turn whose feedback
/// leaves no candidate.
pub fn assess_history(
    space: &CodeSpace,
    history: &[(Code, Score)],
    assess_optimality: bool,
) -> Result<Vec<MoveAssessment>, GameError> {
    let mut progress = ProgressTracker::new(space.clone());
    history
        .iter()
        .map(|(guess, score)| progress.record(guess, *score, assess_optimality))
        .collect()
}
