//! Core domain types for the card-guessing game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and independent of catalog format and I/O.

mod card;
mod question;

pub use card::{Card, CardError};
pub use question::{Answer, CmpOp, Question};
