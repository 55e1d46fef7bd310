//! Termination bounds of the Knuth solver over entire code spaces

use mastermind_solver::core::{Alphabet, Code, GameConfig};
use mastermind_solver::game::Game;
use mastermind_solver::solver::{
    CandidateTracker, KnuthSolver, SolveConfig, play_every_secret, play_game,
};

fn game(config: GameConfig, colors: &[&str]) -> Game {
    let alphabet = Alphabet::new(colors.iter().copied()).unwrap();
    let first = Code::new((0..config.code_length as u8).collect(), colors.len()).unwrap();
    Game::with_secret(config, alphabet, first).unwrap()
}

#[test]
fn classic_game_solved_within_five_guesses() {
    let mut game = game(GameConfig::default(), &["a", "b", "c", "d", "e", "f"]);
    let mut solver = KnuthSolver::from_config(game.config());

    let batch =
        play_every_secret(&mut game, &mut solver, &SolveConfig::default(), None, |_| {}).unwrap();

    assert_eq!(batch.summary.runs, 1296);
    assert_eq!(batch.summary.total_solved, 1296);
    assert!(
        batch.summary.worst_case <= 5,
        "worst case {} guesses",
        batch.summary.worst_case
    );
    assert!(batch.summary.distribution.keys().all(|&n| (1..=5).contains(&n)));
}

#[test]
fn classic_game_keeps_secret_in_candidates() {
    let mut game = game(GameConfig::default(), &["a", "b", "c", "d", "e", "f"]);
    let mut solver = KnuthSolver::from_config(game.config());
    let secrets: Vec<Code> = game.space().codes().iter().step_by(97).cloned().collect();

    for secret in secrets {
        game.reset_with_secret(secret.clone()).unwrap();
        play_game(&mut game, &mut solver, &SolveConfig::default()).unwrap();

        for turn in 1..=game.history().len() {
            let tracker = CandidateTracker::from_history(game.space(), &game.history()[..turn]);
            assert!(tracker.is_consistent(&secret), "secret {secret} lost at turn {turn}");
        }
    }
}

#[test]
fn without_duplicates_solved_within_budget() {
    let config = GameConfig::new(4, 6, 12, false);
    let mut game = game(config, &["a", "b", "c", "d", "e", "f"]);
    let mut solver = KnuthSolver::from_config(game.config());

    let batch =
        play_every_secret(&mut game, &mut solver, &SolveConfig::default(), None, |_| {}).unwrap();

    assert_eq!(batch.summary.runs, 360);
    assert_eq!(batch.summary.total_solved, 360);
    assert!(batch.summary.worst_case < 12);
}

#[test]
fn two_by_two_without_duplicates_needs_two_guesses() {
    let config = GameConfig::new(2, 2, 12, false);
    let mut game = game(config, &["red", "blue"]);
    let mut solver = KnuthSolver::from_config(game.config());

    let batch =
        play_every_secret(&mut game, &mut solver, &SolveConfig::default(), None, |_| {}).unwrap();

    assert_eq!(batch.summary.runs, 2);
    assert_eq!(batch.summary.worst_case, 2);
}

#[test]
fn two_by_two_with_duplicates_needs_three_guesses() {
    // After "red, blue" both "red, red" and "blue, blue" score (1, 0), so no
    // strategy can guarantee two guesses here.
    let config = GameConfig::new(2, 2, 12, true);
    let mut game = game(config, &["red", "blue"]);
    let mut solver = KnuthSolver::from_config(game.config());

    let batch =
        play_every_secret(&mut game, &mut solver, &SolveConfig::default(), None, |_| {}).unwrap();

    assert_eq!(batch.summary.runs, 4);
    assert_eq!(batch.summary.total_solved, 4);
    assert_eq!(batch.summary.worst_case, 3);
}
