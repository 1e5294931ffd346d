//! Card Seeker - CLI
//!
//! Interactive "guess the card" game over a bulk catalog file, plus
//! automated simulation and benchmarking of the question selector.

use anyhow::{Context, Result};
use cardseeker::{
    catalog::load_from_file,
    commands::{run_benchmark, run_play, simulate_card},
    core::Card,
    output::{print_benchmark_result, print_outcome, print_simulate_result},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cardseeker",
    about = "Guess-the-card game driven by greedy median-split questions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the bulk catalog JSON file
    #[arg(short = 'c', long, global = true, default_value = "data/oracle-cards.json")]
    catalog: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default): answer questions until one card remains
    Play,

    /// Simulate a game with truthful answers for a known target card
    Simulate {
        /// The target card name
        name: String,

        /// Show per-round candidate counts and pruning
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the question selector over sampled cards
    Benchmark {
        /// Number of random cards to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cards = load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from '{}'", cli.catalog))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cards),
        Commands::Simulate { name, verbose } => run_simulate_command(&cards, &name, verbose),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cards, count);
            Ok(())
        }
    }
}

fn run_play_command(cards: &[Card]) -> Result<()> {
    let outcome = run_play(cards);
    print_outcome(&outcome);
    Ok(())
}

fn run_simulate_command(cards: &[Card], name: &str, verbose: bool) -> Result<()> {
    let result = simulate_card(cards, name).map_err(|e| anyhow::anyhow!(e))?;
    print_simulate_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(cards: &[Card], count: usize) {
    println!("Running benchmark on {count} random cards...");
    let result = run_benchmark(cards, count);
    print_benchmark_result(&result);
}
