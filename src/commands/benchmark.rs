//! Benchmark command
//!
//! Simulates oracle-answered games against a sample of catalog cards and
//! aggregates how many rounds the splitter needs.

use crate::core::Card;
use crate::features::build_table;
use crate::solver::{OracleAnswers, Outcome, Session};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_cards: usize,
    /// Sessions that resolved to the simulated target
    pub found: usize,
    /// Sessions that resolved elsewhere (NaN-featured targets) or ran dry
    pub missed: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub cards_per_second: f64,
}

/// Run oracle-answered games against `count` randomly sampled cards
///
/// The feature table is built once and shared; each game plays on a fresh
/// view.
pub fn run_benchmark(cards: &[Card], count: usize) -> BenchmarkResult {
    let table = build_table(cards);
    let targets: Vec<&Card> = cards.choose_multiple(&mut rand::rng(), count).collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut found = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, target) in targets.iter().enumerate() {
        let mut session = Session::new(&table);
        let outcome = if let Some(mut oracle) = OracleAnswers::for_card(&table, target.name()) {
            session.run(&mut oracle)
        } else {
            // Duplicate names collapse to one row; treat as a miss
            Outcome::Ambiguous(Vec::new())
        };

        let rounds = session.rounds().len();
        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;

        if matches!(&outcome, Outcome::Solved(name) if name == target.name()) {
            found += 1;
        }

        if idx % 10 == 0 && idx > 0 {
            let avg = total_rounds as f64 / idx as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_cards = targets.len();

    BenchmarkResult {
        total_cards,
        found,
        missed: total_cards - found,
        total_rounds,
        average_rounds: if total_cards > 0 {
            total_rounds as f64 / total_cards as f64
        } else {
            0.0
        },
        min_rounds: if total_cards > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        cards_per_second: total_cards as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Card> {
        (0..8)
            .map(|i| {
                Card::new(format!("Card {i}"))
                    .unwrap()
                    .with_cmc(f64::from(i))
                    .with_power(i.to_string())
                    .with_toughness(i.to_string())
                    .with_type_line(if i % 2 == 0 { "Creature" } else { "Sorcery" })
                    .with_colors(vec![if i % 3 == 0 { "R" } else { "U" }.to_string()])
            })
            .collect()
    }

    #[test]
    fn benchmark_runs_and_finds_distinct_cards() {
        let cards = sample_catalog();
        let result = run_benchmark(&cards, 8);

        assert_eq!(result.total_cards, 8);
        // Every card here is fully featured with a unique cmc, so every
        // truthful game must converge to its target
        assert_eq!(result.found, 8);
        assert_eq!(result.missed, 0);
        assert!(result.average_rounds >= 1.0);
        assert!(result.min_rounds >= 1);
    }

    #[test]
    fn benchmark_distribution_sums_to_total() {
        let cards = sample_catalog();
        let result = run_benchmark(&cards, 5);

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_cards);
    }

    #[test]
    fn benchmark_empty_sample() {
        let cards = sample_catalog();
        let result = run_benchmark(&cards, 0);

        assert_eq!(result.total_cards, 0);
        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.min_rounds, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let cards = sample_catalog();
        let result = run_benchmark(&cards, 6);

        assert!(result.average_rounds >= result.min_rounds as f64);
        assert!(result.average_rounds <= result.max_rounds as f64);
        assert_eq!(result.found + result.missed, result.total_cards);
    }
}
