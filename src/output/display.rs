//! Display functions for command results

use super::formatters::{percent_bar, score_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let code_length = result.record.game.code_length;

    println!("\n{}", "─".repeat(60));
    println!("Solving: [{}]", result.target);
    println!("{}", "─".repeat(60));

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: [{}] {} {}",
            i + 1,
            step.code,
            score_pegs(step.score, code_length),
            step.score
        );

        if verbose {
            println!("  {}", step.hint);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Progress:   [{}] {:.1}%",
                percent_bar(step.percent, 20),
                step.percent * 100.0
            );
            if let Some(worst) = step.worst_case {
                println!("  Worst case: {worst}");
            }
            println!(
                "  Logical:    {}{}",
                if step.is_logical { "yes" } else { "no" },
                match step.is_optimal {
                    Some(true) => ", optimal",
                    Some(false) => ", not optimal",
                    None => "",
                }
            );
        }
    }

    let forfeits = result.record.num_guesses - result.guesses.len();
    if forfeits > 0 {
        println!("\n{forfeits} turn(s) forfeited");
    }

    println!();
    if result.success {
        println!("Solved in {} guesses!", result.record.num_guesses);
    } else {
        println!("Failed to solve in {} guesses", result.record.num_guesses);
    }
}

/// Print the result of history analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60));
    println!(" HISTORY ANALYSIS ");
    println!("{}", "═".repeat(60));

    for a in &result.assessments {
        println!(
            "  Turn {}: {} → {} candidates, {}{}",
            a.turn,
            a.remaining_before,
            a.remaining_after,
            if a.is_logical { "logical" } else { "not logical" },
            match a.is_optimal {
                Some(true) => ", optimal",
                Some(false) => ", not optimal",
                None => "",
            }
        );
    }

    println!(
        "\nRemaining: {} of {} codes",
        result.remaining, result.total_codes
    );
    for candidate in &result.candidates {
        println!("  - [{candidate}]");
    }
    if result.remaining > result.candidates.len() {
        println!("  ... and {} more", result.remaining - result.candidates.len());
    }

    println!(
        "\nMinimax: {} optimal guesses, worst case {} candidates",
        result.optimal_count, result.worst_case
    );
    for guess in &result.optimal_guesses {
        println!("  - [{guess}]");
    }

    if let Some(next) = &result.recommended {
        println!("\nRecommended next guess: [{next}]");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let summary = &result.batch.summary;

    println!("\n{}", "═".repeat(60));
    println!(" BENCHMARK RESULTS ");
    println!("{}", "═".repeat(60));

    println!("\nPerformance:");
    println!("   Games played:     {}", summary.runs);
    println!("   Solved:           {}", summary.total_solved);
    println!("   Average guesses:  {:.2}", summary.average_guesses());
    println!("   Worst case:       {}", summary.worst_case);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\nDistribution:");
    let runs = summary.runs.max(1) as f64;
    for (guess_count, &count) in &summary.distribution {
        let share = count as f64 / runs;
        println!(
            "   {guess_count:2}: {} {count:4} ({:5.1}%)",
            percent_bar(share, 40),
            share * 100.0
        );
    }

    if let Some(path) = &result.saved_to {
        println!("\nResults saved to {}", path.display());
    }
}
