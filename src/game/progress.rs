//! Per-secret progress lookup
//!
//! Scores every code in the space against the secret once. For a score
//! (e, p), `remaining_states` counts codes whose own score dominates (e, p)
//! component-wise, and `percent` is the fraction of the space ruled out.

use crate::core::{Code, CodeSpace, Score};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Progress implied by a single feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1.0 means only the secret is left
    pub percent: f64,
    pub remaining_states: usize,
}

impl Progress {
    /// Progress reported for a score no code can produce
    pub const NONE: Self = Self {
        percent: 0.0,
        remaining_states: 0,
    };
}

/// Lookup from score to progress for one secret
#[derive(Debug, Clone, Default)]
pub struct ProgressTable {
    entries: FxHashMap<Score, Progress>,
}

impl ProgressTable {
    /// Build the table for `secret` over `space`
    #[must_use]
    pub fn compute(space: &CodeSpace, secret: &Code) -> Self {
        let mut hints: FxHashMap<Score, usize> = FxHashMap::default();
        for code in space {
            *hints.entry(Score::between(code, secret)).or_insert(0) += 1;
        }

        let total = space.len();
        let entries = hints
            .keys()
            .map(|&key| {
                let remaining_states: usize = hints
                    .iter()
                    .filter(|(other, _)| other.exact >= key.exact && other.partial >= key.partial)
                    .map(|(_, &count)| count)
                    .sum();
                let percent = if remaining_states == 1 {
                    1.0
                } else {
                    1.0 - remaining_states as f64 / total as f64
                };
                (
                    key,
                    Progress {
                        percent,
                        remaining_states,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Progress for an observed score, [`Progress::NONE`] if unreachable
    #[must_use]
    pub fn lookup(&self, score: Score) -> Progress {
        self.entries.get(&score).copied().unwrap_or(Progress::NONE)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CodeSpace, Code) {
        let space = CodeSpace::new(4, 6, true);
        let secret = Code::new(vec![0, 1, 2, 3], 6).unwrap();
        (space, secret)
    }

    #[test]
    fn solved_score_is_full_progress() {
        let (space, secret) = setup();
        let table = ProgressTable::compute(&space, &secret);

        let progress = table.lookup(Score::solved(4));
        assert_eq!(progress.remaining_states, 1);
        assert!((progress.percent - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_feedback_covers_whole_space() {
        let (space, secret) = setup();
        let table = ProgressTable::compute(&space, &secret);

        // Every code dominates (0, 0)
        let progress = table.lookup(Score::new(0, 0));
        assert_eq!(progress.remaining_states, space.len());
        assert!(progress.percent.abs() < f64::EPSILON);
    }

    #[test]
    fn progress_grows_with_better_feedback() {
        let (space, secret) = setup();
        let table = ProgressTable::compute(&space, &secret);

        let weak = table.lookup(Score::new(1, 0));
        let strong = table.lookup(Score::new(2, 2));
        assert!(strong.remaining_states < weak.remaining_states);
        assert!(strong.percent > weak.percent);
    }

    #[test]
    fn unreachable_score_has_no_progress() {
        let (space, secret) = setup();
        let table = ProgressTable::compute(&space, &secret);
        assert_eq!(table.lookup(Score::new(3, 1)), Progress::NONE);
    }

    #[test]
    fn table_covers_reachable_scores_only() {
        let (space, secret) = setup();
        let table = ProgressTable::compute(&space, &secret);
        assert!(!table.is_empty());
        assert!(table.len() <= 14);
    }
}
