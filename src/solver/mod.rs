//! Question selection and the game session
//!
//! The splitter scores every live feature's best median split and picks the
//! globally best question; the session owns the working view and drives the
//! ask/filter/prune loop to a terminal outcome.

mod session;
mod splitter;

pub use session::{
    AnswerSource, OracleAnswers, Outcome, RoundLog, ScriptedAnswers, Session, StdinAnswers,
};
pub use splitter::{SplitScore, choose_question, score_column};
