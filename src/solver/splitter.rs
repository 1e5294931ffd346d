//! Greedy median-split question selection
//!
//! Each round, every live feature column is scored by the best binary split
//! at its median: rows partition into strictly-above / equal / strictly-below,
//! the equal group merges into whichever strict side currently holds fewer
//! rows (adjusting `>` to `>=` or `<` to `<=`), and the score is the
//! resulting smaller side's fraction of the live population. The globally
//! lowest score wins, ties broken by schema column order. This is a one-step
//! greedy heuristic, not an information-gain optimal selector.

use crate::core::{CmpOp, Question};
use crate::features::TableView;
use rayon::prelude::*;

/// Scored best split for one feature column
#[derive(Debug, Clone, PartialEq)]
pub struct SplitScore {
    /// Smaller-side fraction of the live population; lower is better
    pub score: f64,
    /// Operator describing the smaller side after the equal-group merge
    pub op: CmpOp,
    /// The live rows' median for this column
    pub threshold: f64,
    /// Predicted smaller-side row count after the equal-group merge
    pub smaller_count: usize,
    /// Predicted larger-side row count after the equal-group merge
    pub larger_count: usize,
}

/// Median of the non-NaN values, pandas-style
///
/// Even counts interpolate the mean of the two middle values. Returns `None`
/// when no value is real, in which case the column cannot produce a split.
fn median(values: &[f64]) -> Option<f64> {
    let mut real: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if real.is_empty() {
        return None;
    }

    real.sort_unstable_by(f64::total_cmp);
    let mid = real.len() / 2;

    if real.len() % 2 == 1 {
        Some(real[mid])
    } else {
        Some(f64::midpoint(real[mid - 1], real[mid]))
    }
}

/// Score one column's best median split over the live rows
///
/// NaN cells land in neither side of the partition but still count toward
/// the live total, so a NaN-heavy column scores as a lopsided split.
#[must_use]
pub fn score_column(view: &TableView<'_>, col: usize) -> Option<SplitScore> {
    let values: Vec<f64> = view.column_values(col).collect();
    let threshold = median(&values)?;

    let mut above = 0usize;
    let mut equal = 0usize;
    let mut below = 0usize;
    for &v in &values {
        if v > threshold {
            above += 1;
        } else if v == threshold {
            equal += 1;
        } else if v < threshold {
            below += 1;
        }
        // NaN joins no group
    }

    // Merge the equal group into the side currently holding fewer strict
    // rows, widening that side's operator to include the median itself
    let mut op_above = CmpOp::Gt;
    let mut op_below = CmpOp::Lt;
    if above < below {
        above += equal;
        op_above = CmpOp::Ge;
    } else {
        below += equal;
        op_below = CmpOp::Le;
    }

    let total = values.len();
    let (smaller_count, larger_count, op) = if above < below {
        (above, below, op_above)
    } else {
        (below, above, op_below)
    };

    Some(SplitScore {
        score: smaller_count as f64 / total as f64,
        op,
        threshold,
        smaller_count,
        larger_count,
    })
}

/// Pick the best question for the current view
///
/// Scores every live column in parallel and takes the arg-min by
/// `(score, column position)`, which makes the tie-break (first column in
/// schema order) independent of the parallel reduction order. Returns `None`
/// when no live column can produce a split.
#[must_use]
pub fn choose_question(view: &TableView<'_>) -> Option<Question> {
    let columns: Vec<(usize, &str)> = view.live_columns().collect();

    columns
        .par_iter()
        .enumerate()
        .filter_map(|(position, &(col, name))| {
            score_column(view, col).map(|split| (position, name, split))
        })
        .min_by(|(pos_a, _, a), (pos_b, _, b)| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| pos_a.cmp(pos_b))
        })
        .map(|(_, name, split)| Question::new(name, split.op, split.threshold))
}
