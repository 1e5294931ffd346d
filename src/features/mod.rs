//! Feature engineering
//!
//! Turns heterogeneous, partially-null card attributes into a flat numeric
//! feature table, and provides the filtered working view the game loop
//! shrinks round by round. Booleans encode as 1.0/0.0; missing or
//! unparseable values as NaN.

mod builder;
mod table;

pub use builder::{CARE_WORDS, build_table};
pub use table::{FeatureTable, TableView};
