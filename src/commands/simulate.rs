//! Automated game simulation
//!
//! Plays a full session with truthful answers for a known target card and
//! records the solution path.

use crate::core::Card;
use crate::features::build_table;
use crate::solver::{OracleAnswers, Outcome, RoundLog, Session};

/// Result of simulating a game against a known target
pub struct SimulateResult {
    pub target: String,
    pub outcome: Outcome,
    pub rounds: Vec<RoundLog>,
}

impl SimulateResult {
    /// Whether the session resolved to the simulated target
    #[must_use]
    pub fn found_target(&self) -> bool {
        matches!(&self.outcome, Outcome::Solved(name) if *name == self.target)
    }
}

/// Simulate a game where every question is answered truthfully for `target`
///
/// A target with a NaN cell on a questioned feature truthfully answers "no"
/// and is then eliminated by the complementary filter, so a simulation can
/// resolve to a different card or end ambiguous; the round log shows where.
///
/// # Errors
///
/// Returns an error if the target name is not in the catalog.
pub fn simulate_card(cards: &[Card], target: &str) -> Result<SimulateResult, String> {
    let table = build_table(cards);

    let mut oracle = OracleAnswers::for_card(&table, target)
        .ok_or_else(|| format!("Card '{target}' is not in the catalog"))?;

    let mut session = Session::new(&table);
    let outcome = session.run(&mut oracle);

    Ok(SimulateResult {
        target: target.to_string(),
        outcome,
        rounds: session.rounds().to_vec(),
    })
}
