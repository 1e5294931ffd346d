//! Display functions for command results

use super::formatters::{answer_str, create_progress_bar, format_candidates};
use crate::commands::{BenchmarkResult, SimulateResult};
use crate::solver::Outcome;
use colored::Colorize;

/// How many candidates a diagnostic listing names before truncating
const LISTING_LIMIT: usize = 10;

/// Print a session's terminal outcome
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Solved(name) => {
            println!(
                "\n{}",
                format!("You must have chosen {name}!").green().bold()
            );
        }
        Outcome::Aborted(names) => {
            println!(
                "\n{} {} candidates were still in play:",
                "Gave up.".yellow().bold(),
                names.len()
            );
            println!("  {}", format_candidates(names, LISTING_LIMIT));
        }
        Outcome::Ambiguous(names) => {
            println!(
                "\n{}",
                "No card matches those answers.".red().bold()
            );
            println!(
                "Last consistent candidates ({}): {}",
                names.len(),
                format_candidates(names, LISTING_LIMIT)
            );
        }
        Outcome::Exhausted(names) => {
            println!(
                "\n{}",
                "Out of distinguishing questions.".yellow().bold()
            );
            println!(
                "These {} candidates share every remaining feature: {}",
                names.len(),
                format_candidates(names, LISTING_LIMIT)
            );
        }
    }
}

/// Print the result of a simulated game
pub fn print_simulate_result(result: &SimulateResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Simulating: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for log in &result.rounds {
        println!(
            "\nQ{}: {} -> {}",
            log.round,
            log.question,
            answer_str(log.answer).bright_white().bold()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                log.candidates_before, log.candidates_after
            );
            if log.columns_pruned > 0 {
                println!("  Pruned:     {} constant columns", log.columns_pruned);
            }
        }
    }

    println!();
    if result.found_target() {
        println!(
            "{}",
            format!("✅ Found it in {} questions!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Did not resolve to the target after {} questions",
                result.rounds.len()
            )
            .red()
            .bold()
        );
        print_outcome(&result.outcome);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Cards tested:     {}", result.total_cards);
    println!(
        "   Found:            {} {}",
        result.found,
        format!(
            "({:.1}%)",
            result.found as f64 / result.total_cards.max(1) as f64 * 100.0
        )
        .green()
    );
    if result.missed > 0 {
        println!(
            "   Missed:           {} {}",
            result.missed,
            "(resolved elsewhere or ran dry)".yellow()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Cards/second:     {:.1}", result.cards_per_second);

    println!("\n📈 {}", "Rounds Distribution:".bright_cyan().bold());
    let mut rounds: Vec<usize> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    let max_count = result.distribution.values().copied().max().unwrap_or(1);

    for r in rounds {
        let count = result.distribution[&r];
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {r:3} rounds: {} {count}", bar.green());
    }
}
