//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use crate::game::Game;
use crate::solver::{BatchResult, Guesser, SolveConfig, play_every_secret};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Secrets that took the most guesses, at most ten
    pub worst_codes: Vec<(String, usize)>,
    pub batch: BatchResult,
}

/// Run the guesser on every secret (or the first `limit` in enumeration order)
///
/// # Errors
///
/// Returns an error if any game fails; see [`play_every_secret`].
pub fn run_test_all<G: Guesser + ?Sized>(
    game: &mut Game,
    guesser: &mut G,
    config: &SolveConfig,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let total = limit.map_or(game.space().len(), |l| l.min(game.space().len()));

    let pb = if show_progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();
    let mut played = 0usize;
    let mut guesses_so_far = 0usize;

    let batch = play_every_secret(game, guesser, config, limit, |record| {
        played += 1;
        guesses_so_far += record.num_guesses;
        if played % 10 == 0 {
            let avg = guesses_so_far as f64 / played as f64;
            pb.set_message(format!("Avg: {avg:.2} | Worst: {}", record.worst_case));
        }
        pb.inc(1);
    })?;

    pb.finish_with_message("Complete!");

    Ok(summarize(batch, total_start.elapsed()))
}

fn summarize(batch: BatchResult, total_time: Duration) -> TestAllStatistics {
    let solved_counts = || {
        batch
            .records
            .iter()
            .filter(|r| r.solved)
            .map(|r| r.num_guesses)
    };

    let solved = batch.summary.total_solved;
    let average_guesses = batch.summary.average_guesses();

    let mut worst_codes: Vec<(String, usize)> = batch
        .records
        .iter()
        .map(|r| (r.game.secret_code.join(", "), r.num_guesses))
        .collect();
    worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: batch.summary.runs,
        solved,
        failed: batch.summary.runs - solved,
        guess_distribution: batch.summary.distribution.clone(),
        total_time,
        average_guesses,
        max_guesses: batch.summary.worst_case,
        min_guesses: solved_counts().min().unwrap_or(0),
        worst_codes,
        batch,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\nOverall Performance");
    println!("  Total secrets tested: {}", stats.total_codes);
    println!(
        "  Successfully solved:  {} ({:.1}%)",
        stats.solved,
        stats.solved as f64 / total * 100.0
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} ({:.1}%)",
            stats.failed,
            stats.failed as f64 / total * 100.0
        );
    }
    println!("  Average guesses:      {:.3}", stats.average_guesses);
    println!("  Fewest guesses:       {}", stats.min_guesses);
    println!("  Most guesses:         {}", stats.max_guesses);
    println!("  Total time:           {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\nGuess Distribution");
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!("{}{}", "█".repeat(bar_len), "░".repeat(40 - bar_len));
        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.worst_codes.is_empty() {
        println!("\nHardest Secrets");
        for (code, guesses) in stats.worst_codes.iter().take(5) {
            println!("  [{code}] ({guesses} guesses)");
        }
    }

    // Knuth's bound for the classic 4-peg, 6-color game
    if stats.batch.records.first().is_some_and(|r| {
        r.game.code_length == 4 && r.game.possible_colors.len() == 6 && r.game.duplicates_allowed
    }) {
        println!("\nKnuth bound (5 guesses): {}", if stats.max_guesses <= 5 { "held" } else { "broken" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, GameConfig};
    use crate::solver::KnuthSolver;

    fn game(config: GameConfig, colors: &[&str]) -> Game {
        let alphabet = Alphabet::new(colors.iter().copied()).unwrap();
        let secret = alphabet.parse_code(&colors[..config.code_length].join(", ")).unwrap();
        Game::with_secret(config, alphabet, secret).unwrap()
    }

    #[test]
    fn test_all_covers_space() {
        let mut game = game(GameConfig::new(3, 3, 10, true), &["red", "blue", "green"]);
        let mut solver = KnuthSolver::from_config(game.config());

        let stats = run_test_all(&mut game, &mut solver, &SolveConfig::default(), None, false).unwrap();

        assert_eq!(stats.total_codes, 27);
        assert_eq!(stats.solved, 27);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 27);
        assert!(stats.average_guesses >= 1.0);
    }

    #[test]
    fn test_all_respects_limit() {
        let mut game = game(GameConfig::new(4, 6, 12, true), &["a", "b", "c", "d", "e", "f"]);
        let mut solver = KnuthSolver::from_config(game.config());

        let stats = run_test_all(&mut game, &mut solver, &SolveConfig::default(), Some(20), false).unwrap();

        assert_eq!(stats.total_codes, 20);
        assert!(stats.max_guesses <= 5);
        assert_eq!(stats.worst_codes.len(), 10);
        assert!(stats.worst_codes[0].1 >= stats.worst_codes[9].1);
    }
}
