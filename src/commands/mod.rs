//! Command implementations

pub mod benchmark;
pub mod play;
pub mod simulate;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use simulate::{SimulateResult, simulate_card};
