//! Card Seeker
//!
//! An interactive "guess the card" game over a fixed catalog: cards flatten
//! into a numeric feature table, and a greedy median-split selector asks the
//! yes/no question that best shrinks the candidate set each round.
//!
//! # Quick Start
//!
//! ```rust
//! use cardseeker::core::Card;
//! use cardseeker::features::build_table;
//! use cardseeker::solver::choose_question;
//!
//! let cards = vec![
//!     Card::new("Grizzly Bears").unwrap().with_cmc(2.0),
//!     Card::new("Serra Angel").unwrap().with_cmc(5.0),
//! ];
//!
//! let table = build_table(&cards);
//! let question = choose_question(&table.view()).unwrap();
//! println!("First question: {question}");
//! ```

// Core domain types
pub mod core;

// Catalog loading
pub mod catalog;

// Feature engineering
pub mod features;

// Question selection and the game session
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
