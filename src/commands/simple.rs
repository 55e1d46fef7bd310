//! Simple interactive CLI mode
//!
//! The solver suggests guesses; the user plays them against a secret held
//! elsewhere and types back the feedback.

use crate::core::{Alphabet, Code, GameConfig, Score};
use crate::output::formatters::score_pegs;
use crate::solver::{Guesser, KnuthSolver, Proposal};
use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &GameConfig, alphabet: &Alphabet) -> Result<()> {
    println!("\nMastermind Solver - Interactive Mode\n");
    println!("Colors: {alphabet}");
    println!("Code length: {}", config.code_length);
    println!("I'll suggest minimax guesses. After each guess, enter the feedback");
    println!("as '<exact>,<partial>' (e.g. '1,2'), or 'win' if it was right.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut solver = KnuthSolver::from_config(config);
    let mut history: Vec<(Code, Score)> = Vec::new();

    loop {
        let guess = match solver.next_guess(&history) {
            Proposal::Guess(guess) => guess,
            Proposal::Forfeit | Proposal::Malformed(_) => {
                println!("\nNo candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");
                match get_user_input("Command")?.as_str() {
                    "undo" | "u" => {
                        if history.pop().is_none() {
                            println!("Nothing to undo!\n");
                        }
                    }
                    "new" | "n" => {
                        history.clear();
                        println!("\nNew game started!\n");
                    }
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
                continue;
            }
        };

        println!("{}", "─".repeat(60));
        println!(
            "Turn {}: {} candidates remaining",
            history.len() + 1,
            solver.count_candidates()
        );
        println!("{}", "─".repeat(60));
        println!("\nSuggested guess: {}\n", alphabet.render(&guess));

        if solver.count_candidates() <= 10 {
            println!("Remaining candidates:");
            for candidate in solver.candidates() {
                println!("  - {}", alphabet.render(candidate));
            }
            println!();
        }

        let feedback = loop {
            let input = get_user_input("Enter feedback (e,p, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    println!("\nNew game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("Undone! Back to turn {}\n", history.len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => break Some(Score::solved(config.code_length)),
                _ => match input.parse::<Score>() {
                    Ok(score) if usize::from(score.total()) <= config.code_length => break Some(score),
                    _ => println!("Invalid feedback! Use e.g. '2,1' or 'win'\n"),
                },
            }
        };

        let Some(score) = feedback else {
            continue;
        };
        history.push((guess, score));

        if score.is_solved(config.code_length) {
            println!("\n{}", "═".repeat(60));
            println!("  Solved in {} guesses!", history.len());
            for (i, (code, score)) in history.iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    i + 1,
                    alphabet.render(code),
                    score_pegs(*score, config.code_length)
                );
            }
            println!("{}\n", "═".repeat(60));

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    history.clear();
                    println!("\nNew game started!\n");
                }
                _ => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Input closed");
    }

    Ok(input.trim().to_string())
}
