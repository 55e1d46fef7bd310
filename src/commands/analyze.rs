//! History analysis command
//!
//! Grades a played history and reports what the minimax engine would do next.

use crate::core::{Alphabet, Code, CodeSpace, GameConfig, Score, ScoreTable};
use crate::solver::minimax::optimal_guesses;
use crate::solver::{Guesser, KnuthSolver, MoveAssessment, Proposal, assess_history};
use anyhow::{Context, Result, anyhow, bail};

/// How many codes to list in each preview
const PREVIEW: usize = 10;

/// Result of analyzing a history
pub struct AnalysisResult {
    pub total_codes: usize,
    pub remaining: usize,
    /// First few remaining candidates
    pub candidates: Vec<String>,
    pub assessments: Vec<MoveAssessment>,
    /// First few minimax-optimal next guesses
    pub optimal_guesses: Vec<String>,
    pub optimal_count: usize,
    /// Worst-case partition size of an optimal next guess
    pub worst_case: usize,
    pub recommended: Option<String>,
}

/// Parse one history entry: `"<colors> = <exact>,<partial>"`
///
/// # Errors
///
/// Returns an error if the entry has no `=`, the code is not legal for the
/// configuration, or the score is malformed.
pub fn parse_history_entry(
    config: &GameConfig,
    alphabet: &Alphabet,
    entry: &str,
) -> Result<(Code, Score)> {
    let (code_text, score_text) = entry
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("Expected '<colors> = <exact>,<partial>', got '{entry}'"))?;

    let code = alphabet
        .parse_code(code_text)
        .with_context(|| format!("Invalid code in '{entry}'"))?;
    if code.len() != config.code_length {
        bail!(
            "Code in '{entry}' has {} colors, expected {}",
            code.len(),
            config.code_length
        );
    }

    let score: Score = score_text.parse().map_err(|e: String| anyhow!(e))?;
    if usize::from(score.total()) > config.code_length {
        bail!("Score {score} exceeds code length {}", config.code_length);
    }

    Ok((code, score))
}

/// Analyze a history of (guess, score) pairs
///
/// # Errors
///
/// Returns an error if an entry cannot be parsed or the feedback is
/// inconsistent with every code.
pub fn analyze_history(
    config: &GameConfig,
    alphabet: &Alphabet,
    entries: &[String],
) -> Result<AnalysisResult> {
    config.validate()?;
    let history = entries
        .iter()
        .map(|entry| parse_history_entry(config, alphabet, entry))
        .collect::<Result<Vec<_>>>()?;

    let space = CodeSpace::from_config(config);
    let assessments = assess_history(&space, &history, true)?;

    let mut solver = KnuthSolver::new(space.clone());
    let recommended = match solver.next_guess(&history) {
        Proposal::Guess(code) => Some(alphabet.render(&code)),
        Proposal::Forfeit | Proposal::Malformed(_) => None,
    };

    let table = ScoreTable::new(config.code_length);
    let (optimal, worst_case) =
        optimal_guesses(solver.unused(), solver.candidates(), &table).unwrap_or_default();

    Ok(AnalysisResult {
        total_codes: space.len(),
        remaining: solver.count_candidates(),
        candidates: solver
            .candidates()
            .iter()
            .take(PREVIEW)
            .map(|c| alphabet.render(c))
            .collect(),
        assessments,
        optimal_guesses: optimal.iter().take(PREVIEW).map(|c| alphabet.render(c)).collect(),
        optimal_count: optimal.len(),
        worst_case,
        recommended,
    })
}
