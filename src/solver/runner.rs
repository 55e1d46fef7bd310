//! Solver loop
//!
//! Drives a [`Guesser`] against a [`Game`] until it is won or lost, and
//! aggregates many such games into a batch report.

use super::progress::{MoveAssessment, ProgressTracker};
use super::strategy::{Guesser, Proposal};
use crate::core::Score;
use crate::game::{Game, GameError, GameSnapshot, GameStatus, Progress};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// What to do when a guesser hands back input that is not a code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Spend the turn as a non-match and carry on
    #[default]
    Forfeit,
    /// Stop the game with `GameError::MalformedInput`
    Abort,
}

/// Settings for the solver loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveConfig {
    pub malformed_policy: MalformedPolicy,
    /// Grade every guess against the minimax optimum (one extra pass per turn)
    pub assess_optimality: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(malformed_policy: MalformedPolicy, assess_optimality: bool) -> Self {
        Self {
            malformed_policy,
            assess_optimality,
        }
    }
}

/// One turn of a played game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnRecord {
    Guess {
        guess: Vec<String>,
        score: Score,
        hint: String,
        progress: Progress,
        assessment: MoveAssessment,
    },
    Forfeit {
        turn: usize,
    },
    Malformed {
        turn: usize,
        input: String,
    },
}

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub solved: bool,
    pub num_guesses: usize,
    /// Wall-clock seconds spent in the loop
    pub process_time: f64,
    /// Worst guess count over the batch's solved games so far
    pub worst_case: usize,
    pub game: GameSnapshot,
    pub progress_history: Vec<Progress>,
    pub turns: Vec<TurnRecord>,
}

/// Totals over a batch of games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub total_solved: usize,
    /// Guesses spent on solved games; lost games are left out
    pub total_guesses: usize,
    /// Most guesses any solved game needed
    pub worst_case: usize,
    /// Solved games keyed by guess count
    pub distribution: BTreeMap<usize, usize>,
}

impl BatchSummary {
    /// Fold one finished game into the totals
    pub fn add(&mut self, record: &GameRecord) {
        self.runs += 1;
        if record.solved {
            self.total_solved += 1;
            self.total_guesses += record.num_guesses;
            self.worst_case = self.worst_case.max(record.num_guesses);
            *self.distribution.entry(record.num_guesses).or_insert(0) += 1;
        }
    }

    /// Mean guesses per solved game
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.total_solved == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.total_solved as f64
        }
    }
}

/// Every game of a batch plus its summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub summary: BatchSummary,
    pub records: Vec<GameRecord>,
}

impl BatchResult {
    fn push(&mut self, mut record: GameRecord) {
        self.summary.add(&record);
        record.worst_case = self.summary.worst_case;
        self.records.push(record);
    }

    /// Pretty-printed JSON of the whole batch
    ///
    /// # Errors
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Play the current game to completion
///
/// The game should be fresh; turns already in its history are fed to the
/// guesser but not re-assessed.
///
/// # Errors
/// - `GameError::InvalidGuess` if the guesser proposes an illegal code
/// - `GameError::EmptyCandidateSet` if feedback rules out every code
/// - `GameError::MalformedInput` under [`MalformedPolicy::Abort`]
pub fn play_game<G: Guesser + ?Sized>(
    game: &mut Game,
    guesser: &mut G,
    config: &SolveConfig,
) -> Result<GameRecord, GameError> {
    let start = Instant::now();
    let mut progress = ProgressTracker::new(game.space().clone());
    for (guess, score) in game.history() {
        progress.record(guess, *score, false)?;
    }

    let mut turns = Vec::new();
    let mut progress_history = Vec::new();

    while game.status() == GameStatus::Ongoing {
        let turn = game.attempts() + 1;
        match guesser.next_guess(game.history()) {
            Proposal::Guess(code) => {
                let feedback = game.submit(&code)?;
                let assessment = progress.record(&code, feedback.score, config.assess_optimality)?;
                log::debug!(
                    "turn {turn}: {} scored {} ({} candidates left)",
                    game.alphabet().render(&code),
                    feedback.score,
                    assessment.remaining_after
                );

                progress_history.push(feedback.progress);
                turns.push(TurnRecord::Guess {
                    guess: game.alphabet().decode(&code),
                    score: feedback.score,
                    hint: feedback.hint,
                    progress: feedback.progress,
                    assessment,
                });
            }
            Proposal::Forfeit => {
                log::warn!("{} forfeited turn {turn}", guesser.name());
                game.forfeit()?;
                progress_history.push(Progress::NONE);
                turns.push(TurnRecord::Forfeit { turn });
            }
            Proposal::Malformed(input) => match config.malformed_policy {
                MalformedPolicy::Forfeit => {
                    log::warn!("malformed guess on turn {turn}, forfeiting: {input:?}");
                    game.forfeit()?;
                    progress_history.push(Progress::NONE);
                    turns.push(TurnRecord::Malformed { turn, input });
                }
                MalformedPolicy::Abort => {
                    log::warn!("malformed guess on turn {turn}, aborting: {input:?}");
                    return Err(GameError::MalformedInput(input));
                }
            },
        }
    }

    let solved = game.status() == GameStatus::Won;
    let num_guesses = game.attempts();
    log::info!(
        "{} {} in {num_guesses} guesses",
        guesser.name(),
        if solved { "solved" } else { "lost" }
    );

    Ok(GameRecord {
        solved,
        num_guesses,
        process_time: start.elapsed().as_secs_f64(),
        worst_case: num_guesses,
        game: game.snapshot(),
        progress_history,
        turns,
    })
}

/// Play `runs` games, drawing a new secret before each
///
/// # Errors
/// Stops at the first game that fails; see [`play_game`].
pub fn run_games<G: Guesser + ?Sized, R: Rng + ?Sized>(
    game: &mut Game,
    guesser: &mut G,
    runs: usize,
    config: &SolveConfig,
    rng: &mut R,
) -> Result<BatchResult, GameError> {
    let mut batch = BatchResult::default();
    for run in 0..runs {
        game.reset(rng);
        guesser.notify_reset();
        let record = play_game(game, guesser, config)?;
        log::debug!("run {} of {runs}: {} guesses", run + 1, record.num_guesses);
        batch.push(record);
    }
    Ok(batch)
}

/// Play one game for every code in the space as the secret
///
/// `on_game` sees each record as it finishes, e.g. to drive a progress bar.
///
/// # Errors
/// Stops at the first game that fails; see [`play_game`].
pub fn play_every_secret<G, F>(
    game: &mut Game,
    guesser: &mut G,
    config: &SolveConfig,
    limit: Option<usize>,
    mut on_game: F,
) -> Result<BatchResult, GameError>
where
    G: Guesser + ?Sized,
    F: FnMut(&GameRecord),
{
    let secrets: Vec<_> = game
        .space()
        .codes()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    let mut batch = BatchResult::default();
    for secret in secrets {
        game.reset_with_secret(secret)?;
        guesser.notify_reset();
        let record = play_game(game, guesser, config)?;
        on_game(&record);
        batch.push(record);
    }
    Ok(batch)
}
