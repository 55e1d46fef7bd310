//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as key pegs: `●` exact, `○` partial, `·` miss
#[must_use]
pub fn score_pegs(score: Score, code_length: usize) -> String {
    let exact = usize::from(score.exact);
    let partial = usize::from(score.partial);
    let misses = code_length.saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(misses))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a 0..=1 share as a bar
#[must_use]
pub fn percent_bar(percent: f64, width: usize) -> String {
    create_progress_bar(percent, 1.0, width)
}
