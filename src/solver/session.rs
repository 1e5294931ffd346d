//! Interactive game session
//!
//! The `Session` owns the working view over the feature table and drives the
//! round loop: ask the best question, apply the answer as a row filter, prune
//! constant columns, check termination. Answers arrive through the
//! `AnswerSource` seam so the same loop serves the stdin game, the automated
//! oracle simulation, and tests.

use crate::core::{Answer, Question};
use crate::features::{FeatureTable, TableView};
use crate::solver::choose_question;
use std::io::{self, Write};

/// Supplies the answer for each round's question
pub trait AnswerSource {
    /// Answer `question`, the `round`-th question of the session (1-based)
    fn answer(&mut self, round: usize, question: &Question) -> Answer;
}

/// Terminal state of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one candidate remained
    Solved(String),
    /// The player exited (explicitly or with an unrecognized reply);
    /// carries the candidates that were still alive
    Aborted(Vec<String>),
    /// A filter eliminated every candidate; carries the previous round's
    /// set, since the last answer contradicted all of them
    Ambiguous(Vec<String>),
    /// No live feature column could produce a split while more than one
    /// candidate remained
    Exhausted(Vec<String>),
}

impl Outcome {
    /// Candidates associated with the outcome (the answer for `Solved`,
    /// the diagnostic listing otherwise)
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        match self {
            Self::Solved(name) => std::slice::from_ref(name),
            Self::Aborted(names) | Self::Ambiguous(names) | Self::Exhausted(names) => names,
        }
    }
}

/// Record of one completed round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundLog {
    pub round: usize,
    pub question: Question,
    pub answer: Answer,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub columns_pruned: usize,
}

/// One game over a feature table
///
/// The session only ever filters its own view; the underlying table stays
/// immutable ground truth, so further sessions over the same table start
/// from the full catalog.
pub struct Session<'a> {
    view: TableView<'a>,
    rounds: Vec<RoundLog>,
    progress: bool,
}

impl<'a> Session<'a> {
    /// Start a session over the full table
    #[must_use]
    pub fn new(table: &'a FeatureTable) -> Self {
        Self {
            view: table.view(),
            rounds: Vec::new(),
            progress: false,
        }
    }

    /// Print the remaining candidate count after each round
    #[must_use]
    pub const fn with_progress(mut self) -> Self {
        self.progress = true;
        self
    }

    /// Rounds completed so far
    #[must_use]
    pub fn rounds(&self) -> &[RoundLog] {
        &self.rounds
    }

    /// Play the session to a terminal outcome
    ///
    /// Every round either strictly shrinks the candidate set or leaves the
    /// questioned column constant over the survivors, where pruning removes
    /// it, so the loop is bounded by rows plus columns.
    pub fn run<S: AnswerSource>(&mut self, source: &mut S) -> Outcome {
        let mut round = 0;

        loop {
            let mut names = self.view.candidate_names();
            if names.len() == 1 {
                return Outcome::Solved(names.remove(0));
            }
            if names.is_empty() {
                // Only reachable when the catalog itself was empty
                return Outcome::Ambiguous(names);
            }

            let Some(question) = choose_question(&self.view) else {
                return Outcome::Exhausted(names);
            };

            round += 1;
            let answer = source.answer(round, &question);
            let yes = match answer {
                Answer::Yes => true,
                Answer::No => false,
                Answer::Exit => return Outcome::Aborted(names),
            };

            let col = self
                .view
                .column_of(question.feature())
                .expect("selector only proposes live columns");
            self.view
                .retain(col, question.filter_op(yes), question.threshold());

            let candidates_after = self.view.candidate_count();
            let columns_pruned = self.view.prune_constant_columns();

            self.rounds.push(RoundLog {
                round,
                question,
                answer,
                candidates_before: names.len(),
                candidates_after,
                columns_pruned,
            });

            if self.progress {
                println!("{candidates_after} cards remaining...");
            }

            if candidates_after == 0 {
                return Outcome::Ambiguous(names);
            }
        }
    }
}

/// Interactive answers read line-by-line from stdin
///
/// Prompts `Q<n>: Is <feature> <op> <threshold>? (y/n/exit)> ` and blocks
/// for a reply. End-of-input and I/O errors read as an exit.
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn answer(&mut self, round: usize, question: &Question) -> Answer {
        print!("Q{round}: {question} (y/n/exit)> ");
        if io::stdout().flush().is_err() {
            return Answer::Exit;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => Answer::Exit,
            Ok(_) => Answer::classify(&input),
        }
    }
}

/// Truthful answers for a known target card
///
/// Looks the question's feature up in the target's row and answers whether
/// the stated comparison holds. A NaN cell answers "no" to every question
/// on that feature; per the comparison policy the subsequent filter then
/// eliminates the target too, so a simulation can end ambiguous.
pub struct OracleAnswers<'a> {
    table: &'a FeatureTable,
    row: usize,
}

impl<'a> OracleAnswers<'a> {
    /// Oracle for the named card, or `None` if it is not in the table
    #[must_use]
    pub fn for_card(table: &'a FeatureTable, name: &str) -> Option<Self> {
        table.row_of(name).map(|row| Self { table, row })
    }
}

impl AnswerSource for OracleAnswers<'_> {
    fn answer(&mut self, _round: usize, question: &Question) -> Answer {
        let col = self
            .table
            .columns()
            .iter()
            .position(|c| c == question.feature());

        match col {
            Some(col)
                if question
                    .op()
                    .holds(self.table.value(self.row, col), question.threshold()) =>
            {
                Answer::Yes
            }
            Some(_) => Answer::No,
            None => Answer::Exit,
        }
    }
}

/// Fixed answer script; answers `Exit` once exhausted
pub struct ScriptedAnswers {
    script: Vec<Answer>,
    next: usize,
}

impl ScriptedAnswers {
    #[must_use]
    pub const fn new(script: Vec<Answer>) -> Self {
        Self { script, next: 0 }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(&mut self, _round: usize, _question: &Question) -> Answer {
        let answer = self.script.get(self.next).copied().unwrap_or(Answer::Exit);
        self.next += 1;
        answer
    }
}
