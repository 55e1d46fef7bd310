//! Benchmark command
//!
//! Plays many games against random secrets and optionally saves the records.

use crate::game::Game;
use crate::solver::{BatchResult, Guesser, SolveConfig, run_games};
use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub batch: BatchResult,
    pub duration: Duration,
    pub games_per_second: f64,
    pub saved_to: Option<PathBuf>,
}

/// Run `runs` games, each with a fresh random secret
///
/// When `output_dir` is given the batch is written there as `result.json`.
///
/// # Errors
///
/// Returns an error if a game fails (see [`run_games`]) or the result file
/// cannot be written.
pub fn run_benchmark<G: Guesser + ?Sized, R: Rng + ?Sized>(
    game: &mut Game,
    guesser: &mut G,
    runs: usize,
    config: &SolveConfig,
    rng: &mut R,
    output_dir: Option<&Path>,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let batch = run_games(game, guesser, runs, config, rng)?;
    let duration = start.elapsed();

    let saved_to = output_dir.map(|dir| save_batch(&batch, dir)).transpose()?;

    Ok(BenchmarkResult {
        games_per_second: batch.summary.runs as f64 / duration.as_secs_f64().max(f64::EPSILON),
        batch,
        duration,
        saved_to,
    })
}

/// Write a batch as pretty JSON to `<dir>/result.json`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_batch(batch: &BatchResult, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join("result.json");
    let json = batch
        .to_json_pretty()
        .context("Failed to serialize results")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("saved {} game records to {}", batch.records.len(), path.display());
    Ok(path)
}
