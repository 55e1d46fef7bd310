//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Alphabet, GameConfig, Score};
use crate::game::Game;
use crate::solver::{GameRecord, Guesser, MalformedPolicy, SolveConfig, TurnRecord, play_game};
use anyhow::{Context, Result};

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub record: GameRecord,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: String,
    pub score: Score,
    pub hint: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub is_logical: bool,
    pub is_optimal: Option<bool>,
    pub worst_case: Option<usize>,
    /// Share of the space ruled out by this feedback
    pub percent: f64,
}

/// Solve a specific secret with the given guesser
///
/// `target` is a comma-separated list of color names from `alphabet`.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a legal code for the configuration
/// - The guesser proposes an illegal code or the candidate set empties
pub fn solve_code<G: Guesser + ?Sized>(
    config: GameConfig,
    alphabet: Alphabet,
    target: &str,
    guesser: &mut G,
) -> Result<SolveResult> {
    let secret = alphabet
        .parse_code(target)
        .with_context(|| format!("Invalid target code: {target}"))?;
    let mut game = Game::with_secret(config, alphabet, secret).context("Cannot start game")?;
    guesser.notify_reset();

    let solve_config = SolveConfig::new(MalformedPolicy::Forfeit, true);
    let record = play_game(&mut game, guesser, &solve_config)?;

    let guesses = record
        .turns
        .iter()
        .filter_map(|turn| match turn {
            TurnRecord::Guess {
                guess,
                score,
                hint,
                progress,
                assessment,
            } => Some(GuessStep {
                code: guess.join(", "),
                score: *score,
                hint: hint.clone(),
                candidates_before: assessment.remaining_before,
                candidates_after: assessment.remaining_after,
                is_logical: assessment.is_logical,
                is_optimal: assessment.is_optimal,
                worst_case: assessment.worst_case,
                percent: progress.percent,
            }),
            TurnRecord::Forfeit { .. } | TurnRecord::Malformed { .. } => None,
        })
        .collect();

    Ok(SolveResult {
        success: record.solved,
        guesses,
        target: game.alphabet().render(game.secret()),
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::KnuthSolver;

    fn rgby() -> (GameConfig, Alphabet) {
        let alphabet = Alphabet::new(["red", "blue", "green", "yellow"]).unwrap();
        (GameConfig::new(4, 4, 12, true), alphabet)
    }

    #[test]
    fn solve_code_succeeds() {
        let (config, alphabet) = rgby();
        let mut solver = KnuthSolver::from_config(&config);

        let result = solve_code(config, alphabet, "green, red, red, yellow", &mut solver).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "green, red, red, yellow");
        assert_eq!(result.guesses.len(), result.record.num_guesses);
        assert_eq!(result.guesses.last().unwrap().code, "green, red, red, yellow");
    }

    #[test]
    fn solve_records_history() {
        let (config, alphabet) = rgby();
        let mut solver = KnuthSolver::from_config(&config);

        let result = solve_code(config, alphabet, "blue, blue, blue, blue", &mut solver).unwrap();

        assert_eq!(result.guesses[0].code, "red, red, blue, blue");
        assert!(result.guesses[0].is_logical);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.worst_case.is_some());
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let (config, alphabet) = rgby();
        let mut solver = KnuthSolver::from_config(&config);

        assert!(solve_code(config, alphabet.clone(), "red, blue", &mut solver).is_err());
        assert!(solve_code(config, alphabet, "red, blue, green, teal", &mut solver).is_err());
    }

    #[test]
    fn solve_with_tight_budget() {
        let (mut config, alphabet) = rgby();
        config.max_guesses = 1;
        let mut solver = KnuthSolver::from_config(&config);

        let result = solve_code(config, alphabet, "yellow, green, blue, red", &mut solver).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }
}
