//! Yes/no threshold questions
//!
//! A `Question` is a (feature, comparison operator, threshold) triple. It is
//! derived fresh each round from the surviving candidates, because the best
//! threshold depends on the surviving population's median.

use std::fmt;

/// Comparison operator attached to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// Strictly greater than the threshold
    Gt,
    /// Greater than or equal to the threshold
    Ge,
    /// Strictly less than the threshold
    Lt,
    /// Less than or equal to the threshold
    Le,
}

impl CmpOp {
    /// Whether `value` satisfies this operator against `threshold`
    ///
    /// NaN satisfies none of the four operators, so a row with a missing or
    /// unparseable value is excluded from both sides of any real-valued
    /// split. This is IEEE comparison behavior, kept as explicit policy.
    #[inline]
    #[must_use]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Gt => value > threshold,
            Self::Ge => value >= threshold,
            Self::Lt => value < threshold,
            Self::Le => value <= threshold,
        }
    }

    /// The logical negation of this operator
    ///
    /// `¬(v > t)` is `v <= t` and so on. Used to translate a "no" answer
    /// into the complementary row filter.
    #[inline]
    #[must_use]
    pub const fn negated(self) -> Self {
        match self {
            Self::Gt => Self::Le,
            Self::Ge => Self::Lt,
            Self::Lt => Self::Ge,
            Self::Le => Self::Gt,
        }
    }

    /// Operator spelling used in prompts
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One yes/no question posed to the player
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    feature: String,
    op: CmpOp,
    threshold: f64,
}

impl Question {
    /// Create a question asking whether `<feature> <op> <threshold>`
    #[must_use]
    pub fn new(feature: impl Into<String>, op: CmpOp, threshold: f64) -> Self {
        Self {
            feature: feature.into(),
            op,
            threshold,
        }
    }

    /// Name of the feature column this question examines
    #[inline]
    #[must_use]
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Comparison operator as stated in the prompt
    #[inline]
    #[must_use]
    pub const fn op(&self) -> CmpOp {
        self.op
    }

    /// Threshold value (the live candidates' median at selection time)
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Operator to apply to rows given the player's answer
    ///
    /// "yes" means the row satisfies the operator as stated; "no" means it
    /// satisfies the logical negation. Covers all four operator/answer
    /// combinations.
    #[must_use]
    pub const fn filter_op(&self, answer_is_yes: bool) -> CmpOp {
        if answer_is_yes {
            self.op
        } else {
            self.op.negated()
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Is {} {} {}?", self.feature, self.op, self.threshold)
    }
}

/// Classification of a line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Explicit "exit" or any unrecognized reply; both end the session
    Exit,
}

impl Answer {
    /// Classify a raw input line
    ///
    /// Only `"y"` and `"n"` (after trimming) continue the game; `"exit"`
    /// and every other string read as an exit.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        match input.trim() {
            "y" => Self::Yes,
            "n" => Self::No,
            _ => Self::Exit,
        }
    }
}
