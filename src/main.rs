//! Mastermind Solver - CLI
//!
//! Knuth minimax code breaker with solve, analyze, benchmark and
//! exhaustive test modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        analyze_history, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        save_batch, solve_code,
    },
    core::{Alphabet, GameConfig, Palette},
    game::Game,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Guesser, MalformedPolicy, SolveConfig, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind solver using Knuth's five-guess minimax strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: knuth (default) or random
    #[arg(short, long, global = true, default_value = "knuth")]
    strategy: String,

    /// Code length
    #[arg(short = 'l', long, global = true, default_value_t = 4)]
    length: usize,

    /// Number of colors in play
    #[arg(short = 'c', long, global = true, default_value_t = 6)]
    colors: usize,

    /// Guess budget per game
    #[arg(short = 'm', long, global = true, default_value_t = 12)]
    max_guesses: usize,

    /// Disallow repeated colors in the secret
    #[arg(long, global = true)]
    no_duplicates: bool,

    /// Comma-separated color names (default: first N palette colors)
    #[arg(short = 'a', long, global = true)]
    alphabet: Option<String>,

    /// Draw the colors at random from the palette instead of taking the first N
    #[arg(long, global = true)]
    sample_alphabet: bool,

    /// Seed for secrets and random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: the solver suggests, you report feedback
    Simple,

    /// Solve a specific secret
    Solve {
        /// The secret, e.g. "red, blue, green, yellow"
        code: String,

        /// Show per-turn analytics
        #[arg(long)]
        details: bool,
    },

    /// Analyze a history of guesses
    Analyze {
        /// Entries of the form "<colors> = <exact>,<partial>"
        entries: Vec<String>,
    },

    /// Play games against random secrets
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Directory for result.json
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop on malformed guesses instead of forfeiting the turn
        #[arg(long)]
        abort_on_malformed: bool,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,

        /// Directory for result.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = GameConfig::new(cli.length, cli.colors, cli.max_guesses, !cli.no_duplicates);
    config.validate().context("Invalid game configuration")?;

    let mut rng = cli.seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let alphabet = load_alphabet(&cli, &mut rng)?;
    log::debug!("playing with colors {alphabet}");

    let space = mastermind_solver::core::CodeSpace::from_config(&config);
    let mut guesser = StrategyType::from_name(&cli.strategy, space, cli.seed);

    match cli.command {
        Commands::Simple => run_simple(&config, &alphabet),
        Commands::Solve { code, details } => {
            let result = solve_code(config, alphabet, &code, &mut guesser)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { entries } => {
            let result = analyze_history(&config, &alphabet, &entries)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            output,
            abort_on_malformed,
        } => {
            let policy = if abort_on_malformed {
                MalformedPolicy::Abort
            } else {
                MalformedPolicy::Forfeit
            };
            let mut game = Game::with_alphabet(config, alphabet, &mut rng)?;
            println!("Running {count} games with {} strategy...", guesser.name());

            let result = run_benchmark(
                &mut game,
                &mut guesser,
                count,
                &SolveConfig::new(policy, false),
                &mut rng,
                output.as_deref(),
            )?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit, output } => {
            let mut game = Game::with_alphabet(config, alphabet, &mut rng)?;
            run_test_all_command(&mut game, &mut guesser, limit, output)
        }
    }
}

fn run_test_all_command<G: Guesser>(
    game: &mut Game,
    guesser: &mut G,
    limit: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\n{game}");
    println!("Testing against {} possible secrets", game.space().len());
    println!("Strategy: {}\n", guesser.name());

    let stats = run_test_all(game, guesser, &SolveConfig::default(), limit, true)?;
    print_test_all_statistics(&stats);

    if let Some(dir) = output {
        let path = save_batch(&stats.batch, &dir)?;
        println!("\nResults saved to {}", path.display());
    }
    Ok(())
}

/// Pick the game's colors from `--alphabet`, or the default palette
fn load_alphabet(cli: &Cli, rng: &mut StdRng) -> Result<Alphabet> {
    if let Some(names) = &cli.alphabet {
        let alphabet = Alphabet::new(names.split(',').map(str::trim).filter(|n| !n.is_empty()))
            .context("Invalid --alphabet")?;
        anyhow::ensure!(
            alphabet.len() == cli.colors,
            "--alphabet lists {} colors but --colors is {}",
            alphabet.len(),
            cli.colors
        );
        return Ok(alphabet);
    }

    let palette = Palette::default();
    let alphabet = if cli.sample_alphabet {
        palette.sample(cli.colors, rng)
    } else {
        palette.first(cli.colors)
    };
    alphabet.context("Palette cannot supply the requested colors")
}
