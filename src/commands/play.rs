//! Interactive game command
//!
//! Text-based question loop over stdin: the solver asks, the player answers,
//! the candidate set shrinks until one card remains or the player exits.

use crate::core::Card;
use crate::features::build_table;
use crate::solver::{Outcome, Session, StdinAnswers};

/// Run the interactive guessing game over the given catalog
///
/// Builds the feature table, plays a single session against stdin, and
/// returns the terminal outcome. All terminal outcomes are normal program
/// results; none maps to a failure exit code.
pub fn run_play(cards: &[Card]) -> Outcome {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Card Seeker - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a card from the catalog and I'll guess it.");
    println!("Each round I ask the yes/no question that best splits the field.");
    println!("Answer with 'y' or 'n'; 'exit' (or anything else) gives up.\n");
    println!("{} cards in play.\n", cards.len());

    let table = build_table(cards);
    let mut session = Session::new(&table).with_progress();

    session.run(&mut StdinAnswers)
}
