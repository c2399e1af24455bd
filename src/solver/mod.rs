//! Guessing engine
//!
//! Candidate filtering, candidate scoring, guess selection and the
//! simulation loop that ties them together.

mod engine;
pub mod entropy;
mod filter;
pub mod frequency;
pub mod observer;
mod policy;
pub mod strategy;

pub use engine::{Outcome, Play, Simulator, Transcript, TurnRecord, simulate};
pub use filter::filter_candidates;
pub use observer::{
    LogObserver, NoopObserver, RecordingObserver, ScoringPass, SimulationObserver,
};
pub use policy::GuessSelection;
pub use strategy::{EntropyScorer, LetterFrequencyScorer, ScoredWord, Scorer, ScoringMethod};
