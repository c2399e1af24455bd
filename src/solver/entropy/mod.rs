//! Positional letter-frequency entropy scoring
//!
//! Builds a per-position letter histogram over the current candidates and
//! scores each candidate by the log-probability of its letters.

mod calculator;
mod selector;

pub use calculator::{PositionFrequency, log_probability};
pub use selector::score_by_entropy;
