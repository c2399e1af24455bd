//! Command implementations

pub mod benchmark;
pub mod rank;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use rank::{RankResult, rank_words};
pub use solve::{SolveConfig, SolveResult, solve_word};
