//! Feature table and its filtered working view
//!
//! `FeatureTable` is the immutable ground truth built once per game: one row
//! per card, one column per derived feature, no ragged rows. `TableView` is
//! the game loop's logical copy — it filters rows and drops columns by index
//! without ever touching the underlying table, so independent sessions over
//! the same table can never interfere.

use crate::core::CmpOp;
use rustc_hash::FxHashMap;

/// Immutable feature matrix keyed by card name
#[derive(Debug, Clone)]
pub struct FeatureTable {
    columns: Vec<String>,
    names: Vec<String>,
    rows: Vec<Vec<f64>>,
    row_index: FxHashMap<String, usize>,
}

impl FeatureTable {
    /// Assemble a table from parallel column/name/row vectors
    ///
    /// # Panics
    /// Panics if any row's length differs from the column count or the name
    /// count differs from the row count. The builder is the only producer
    /// and always satisfies this.
    #[must_use]
    pub fn new(columns: Vec<String>, names: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        assert_eq!(names.len(), rows.len(), "one name per row");
        assert!(
            rows.iter().all(|row| row.len() == columns.len()),
            "every row must have a value for every column"
        );

        let row_index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self {
            columns,
            names,
            rows,
            row_index,
        }
    }

    /// Column names in schema order
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row keys (card names) in catalog order
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value at (row, column)
    #[inline]
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Row position of a card name, if present
    #[must_use]
    pub fn row_of(&self, name: &str) -> Option<usize> {
        self.row_index.get(name).copied()
    }

    /// A fresh view with every row and column live
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            table: self,
            live_rows: (0..self.rows.len()).collect(),
            live_cols: (0..self.columns.len()).collect(),
        }
    }
}

/// Two cells are the same for pruning purposes when they are numerically
/// equal or both NaN. Plain `==` would keep an all-NaN column alive forever.
#[inline]
fn cells_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Live row/column subset of a [`FeatureTable`]
///
/// Rows shrink monotonically as answers arrive; columns are dropped
/// permanently once constant across the survivors.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a FeatureTable,
    live_rows: Vec<usize>,
    live_cols: Vec<usize>,
}

impl<'a> TableView<'a> {
    /// Number of surviving candidates
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.live_rows.len()
    }

    /// Number of live feature columns
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.live_cols.len()
    }

    /// Names of the surviving candidates, in catalog order
    #[must_use]
    pub fn candidate_names(&self) -> Vec<String> {
        self.live_rows
            .iter()
            .map(|&row| self.table.names()[row].clone())
            .collect()
    }

    /// Live columns as (table column index, column name) pairs, schema order
    pub fn live_columns(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.live_cols
            .iter()
            .map(|&col| (col, self.table.columns()[col].as_str()))
    }

    /// Values of one table column over the live rows
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.live_rows.iter().map(move |&row| self.table.value(row, col))
    }

    /// Table column index of a live feature by name
    #[must_use]
    pub fn column_of(&self, feature: &str) -> Option<usize> {
        self.live_cols
            .iter()
            .copied()
            .find(|&col| self.table.columns()[col] == feature)
    }

    /// Whether the named row survives in this view
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table
            .row_of(name)
            .is_some_and(|row| self.live_rows.contains(&row))
    }

    /// Keep only rows whose `col` value satisfies `op` against `threshold`
    ///
    /// NaN cells satisfy no operator, so rows with a missing value on this
    /// feature are eliminated regardless of the answer that produced the
    /// filter. The survivor set is always a subset of the current one.
    pub fn retain(&mut self, col: usize, op: CmpOp, threshold: f64) {
        self.live_rows
            .retain(|&row| op.holds(self.table.value(row, col), threshold));
    }

    /// Drop every live column whose value is identical across all survivors
    ///
    /// A constant column can never discriminate again, so the drop is
    /// permanent. Returns the number of columns dropped.
    pub fn prune_constant_columns(&mut self) -> usize {
        let Some(&first_row) = self.live_rows.first() else {
            return 0;
        };

        let table = self.table;
        let live_rows = &self.live_rows;
        let before = self.live_cols.len();

        self.live_cols.retain(|&col| {
            let baseline = table.value(first_row, col);
            live_rows
                .iter()
                .any(|&row| !cells_equal(table.value(row, col), baseline))
        });

        before - self.live_cols.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> FeatureTable {
        FeatureTable::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["one".to_string(), "two".to_string(), "three".to_string()],
            vec![
                vec![1.0, 0.0, 5.0],
                vec![2.0, 0.0, 5.0],
                vec![3.0, 1.0, f64::NAN],
            ],
        )
    }

    #[test]
    fn fresh_view_sees_everything() {
        let table = sample_table();
        let view = table.view();
        assert_eq!(view.candidate_count(), 3);
        assert_eq!(view.column_count(), 3);
        assert_eq!(view.candidate_names(), vec!["one", "two", "three"]);
    }

    #[test]
    #[should_panic(expected = "every row must have a value")]
    fn ragged_rows_rejected() {
        FeatureTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec!["one".to_string()],
            vec![vec![1.0]],
        );
    }

    #[test]
    fn retain_filters_rows_and_leaves_table_untouched() {
        let table = sample_table();
        let mut view = table.view();

        view.retain(0, CmpOp::Ge, 2.0);
        assert_eq!(view.candidate_names(), vec!["two", "three"]);

        // Ground truth unchanged; a second session starts fresh
        assert_eq!(table.len(), 3);
        assert_eq!(table.view().candidate_count(), 3);
    }

    #[test]
    fn retain_eliminates_nan_rows_on_either_answer() {
        let table = sample_table();

        // "three" has NaN in column c: excluded by > and by <=
        let mut yes = table.view();
        yes.retain(2, CmpOp::Gt, 4.0);
        assert!(!yes.contains("three"));

        let mut no = table.view();
        no.retain(2, CmpOp::Le, 4.0);
        assert!(!no.contains("three"));
    }

    #[test]
    fn prune_drops_constant_columns_only() {
        let table = sample_table();
        let mut view = table.view();

        // Column b is constant over rows one/two after filtering out three
        view.retain(0, CmpOp::Lt, 3.0);
        let dropped = view.prune_constant_columns();

        // b (all 0.0) and c (all 5.0) are constant; a still varies
        assert_eq!(dropped, 2);
        let live: Vec<&str> = view.live_columns().map(|(_, name)| name).collect();
        assert_eq!(live, vec!["a"]);
    }

    #[test]
    fn prune_treats_all_nan_as_constant() {
        let table = FeatureTable::new(
            vec!["x".to_string(), "y".to_string()],
            vec!["one".to_string(), "two".to_string()],
            vec![vec![f64::NAN, 1.0], vec![f64::NAN, 2.0]],
        );
        let mut view = table.view();

        assert_eq!(view.prune_constant_columns(), 1);
        let live: Vec<&str> = view.live_columns().map(|(_, name)| name).collect();
        assert_eq!(live, vec!["y"]);
    }

    #[test]
    fn pruned_columns_have_two_distinct_survivor_values() {
        let table = sample_table();
        let mut view = table.view();
        view.prune_constant_columns();

        for (col, _) in view.live_columns() {
            let values: Vec<f64> = view.column_values(col).collect();
            let first = values[0];
            assert!(
                values.iter().any(|&v| !cells_equal(v, first)),
                "live column {col} is constant"
            );
        }
    }

    #[test]
    fn column_lookup_respects_liveness() {
        let table = sample_table();
        let mut view = table.view();
        assert!(view.column_of("b").is_some());

        view.retain(0, CmpOp::Lt, 3.0);
        view.prune_constant_columns();
        assert!(view.column_of("b").is_none());
        assert!(view.column_of("a").is_some());
    }
}
