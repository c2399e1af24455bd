//! Core domain types for the simulation
//!
//! Words, feedback patterns and the error types shared by every layer.
//! Everything here is pure and deterministic.

mod error;
mod pattern;
mod word;

pub use error::{EngineError, WordError};
pub use pattern::{Mark, Pattern};
pub use word::Word;
