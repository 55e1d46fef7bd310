//! Knuth five-guess solver

use super::minimax::select_best_guess;
use super::strategy::{Guesser, Proposal};
use super::tracker::CandidateTracker;
use crate::core::{Code, CodeSpace, GameConfig, Score, ScoreTable};

/// Main Mastermind solver
///
/// Owns its candidate set and unused guesses, derived from (but independent
/// of) the history it is shown. The history is applied incrementally; a
/// history that no longer extends what was seen triggers a rebuild.
///
/// Guesses come from the game's code space only. Without duplicates that
/// pool holds just the permutations, which can cost a guess over Knuth's
/// full product pool: for 3 pegs and 3 colors the worst case is 4 where a
/// guess like `122` would reach 3.
#[derive(Debug, Clone)]
pub struct KnuthSolver {
    space: CodeSpace,
    table: ScoreTable,
    tracker: CandidateTracker,
    unused: Vec<Code>,
    seen: Vec<(Code, Score)>,
}

impl KnuthSolver {
    /// Create a solver over the given code space
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
            seen: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(CodeSpace::from_config(config))
    }

    /// Opening guess: half first color, half second when that code exists
    #[must_use]
    pub fn first_guess(&self) -> Option<Code> {
        self.space.seed_guess()
    }

    /// Codes still consistent with the history seen so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        self.tracker.candidates()
    }

    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.tracker.len()
    }

    /// Guesses not yet played, in enumeration order
    #[must_use]
    pub fn unused(&self) -> &[Code] {
        &self.unused
    }

    #[must_use]
    pub const fn tracker(&self) -> &CandidateTracker {
        &self.tracker
    }

    /// Bring the candidate set and unused guesses in line with `history`
    pub fn sync(&mut self, history: &[(Code, Score)]) {
        if !history.starts_with(&self.seen) {
            log::debug!("history diverged from solver state, rebuilding");
            self.restart();
        }

        for (guess, score) in &history[self.seen.len()..] {
            self.tracker.filter(guess, *score);
            self.unused.retain(|code| code != guess);
            self.seen.push((guess.clone(), *score));
        }
    }

    fn restart(&mut self) {
        self.tracker.reset(&self.space);
        self.unused = self.space.codes().to_vec();
        self.seen.clear();
    }

    fn choose(&self) -> Option<Code> {
        if self.seen.is_empty() {
            return self.first_guess();
        }

        // If only one candidate remains, just guess it
        if let [only] = self.tracker.candidates() {
            return Some(only.clone());
        }

        select_best_guess(&self.unused, &self.tracker, &self.table)
            .map(|(best, worst)| {
                log::debug!(
                    "minimax pick {best} (worst case {worst} of {})",
                    self.tracker.len()
                );
                best.clone()
            })
            .or_else(|| self.tracker.candidates().first().cloned())
    }
}

impl Guesser for KnuthSolver {
    fn next_guess(&mut self, history: &[(Code, Score)]) -> Proposal {
        self.sync(history);

        if self.tracker.is_empty() {
            log::error!(
                "candidate set is empty after {} guesses; feedback is inconsistent",
                history.len()
            );
            return Proposal::Forfeit;
        }

        self.choose().map_or(Proposal::Forfeit, Proposal::Guess)
    }

    fn notify_reset(&mut self) {
        self.restart();
    }

    fn name(&self) -> &'static str {
        "knuth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs.to_vec(), 6).unwrap()
    }

    fn guess_of(proposal: Proposal) -> Code {
        match proposal {
            Proposal::Guess(code) => code,
            other => panic!("expected a guess, got {other:?}"),
        }
    }

    #[test]
    fn first_guess_is_1122() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, true));
        assert_eq!(guess_of(solver.next_guess(&[])), code(&[0, 0, 1, 1]));
    }

    #[test]
    fn first_guess_without_duplicates() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, false));
        assert_eq!(guess_of(solver.next_guess(&[])), code(&[0, 1, 2, 3]));
    }

    #[test]
    fn next_guess_filters_candidates() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, true));
        let secret = code(&[5, 4, 3, 2]);
        let first = code(&[0, 0, 1, 1]);
        let history = vec![(first.clone(), Score::between(&first, &secret))];

        let second = guess_of(solver.next_guess(&history));

        assert_ne!(second, first);
        assert!(solver.count_candidates() < 1296);
        assert!(solver.candidates().contains(&secret));
        assert_eq!(solver.unused().len(), 1295);
    }

    #[test]
    fn single_candidate_is_guessed() {
        let mut solver = KnuthSolver::new(CodeSpace::new(2, 2, false));
        let first = Code::new(vec![0, 1], 2).unwrap();
        let history = vec![(first, Score::new(0, 2))];

        let guess = guess_of(solver.next_guess(&history));
        assert_eq!(guess.pegs(), &[1, 0]);
    }

    #[test]
    fn forfeits_on_impossible_history() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, true));
        let history = vec![(code(&[0, 0, 0, 0]), Score::new(0, 4))];

        assert_eq!(solver.next_guess(&history), Proposal::Forfeit);
    }

    #[test]
    fn shorter_history_rebuilds_state() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, true));
        let first = code(&[0, 0, 1, 1]);
        solver.sync(&[(first, Score::new(0, 0))]);
        assert_eq!(solver.count_candidates(), 256);

        solver.sync(&[]);
        assert_eq!(solver.count_candidates(), 1296);
        assert_eq!(solver.unused().len(), 1296);
    }

    #[test]
    fn reset_restores_full_space() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, true));
        let first = code(&[0, 0, 1, 1]);
        solver.next_guess(&[(first, Score::new(1, 0))]);

        solver.notify_reset();
        assert_eq!(solver.candidates(), CodeSpace::new(4, 6, true).codes());
        assert_eq!(guess_of(solver.next_guess(&[])), code(&[0, 0, 1, 1]));
    }

    #[test]
    fn guesses_stay_in_permutation_space_without_duplicates() {
        let space = CodeSpace::new(3, 3, false);
        let mut solver = KnuthSolver::new(space.clone());

        for secret in &space {
            solver.notify_reset();
            let mut history: Vec<(Code, Score)> = Vec::new();
            loop {
                let guess = guess_of(solver.next_guess(&history));
                assert!(!guess.has_duplicates(), "{guess} repeats a color");
                let score = Score::between(&guess, secret);
                history.push((guess, score));
                if score.is_solved(3) {
                    break;
                }
                assert!(history.len() < 6, "secret {secret} not found");
            }
            assert!(history.len() <= 4, "secret {secret} took {} guesses", history.len());
        }
    }

    #[test]
    fn repeated_sync_is_incremental() {
        let mut solver = KnuthSolver::new(CodeSpace::new(4, 6, true));
        let secret = code(&[1, 1, 2, 3]);
        let first = code(&[0, 0, 1, 1]);
        let mut history = vec![(first.clone(), Score::between(&first, &secret))];

        let second = guess_of(solver.next_guess(&history));
        history.push((second.clone(), Score::between(&second, &secret)));
        solver.sync(&history);

        let rebuilt = CandidateTracker::from_history(&CodeSpace::new(4, 6, true), &history);
        assert_eq!(solver.candidates(), rebuilt.candidates());
        assert_eq!(solver.unused().len(), 1294);
    }
}
