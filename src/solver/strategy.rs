//! Scoring strategies
//!
//! Defines the Scorer trait and concrete implementations.

use super::policy::GuessSelection;
use crate::core::{EngineError, Word};
use std::fmt;
use std::str::FromStr;

/// A candidate paired with its ranking score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Stable ascending sort by score
///
/// Equal scores keep their input order.
pub(crate) fn sort_ascending(scored: &mut [ScoredWord]) {
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
}

/// A way of ranking the current candidates
pub trait Scorer: Sync {
    /// Score every candidate, sorted ascending by score
    ///
    /// Returns an empty list when there are no candidates.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the candidates differ in length.
    fn score(&self, candidates: &[Word]) -> Result<Vec<ScoredWord>, EngineError>;

    /// Which end of the ranking this scorer considers the best guess
    fn default_selection(&self) -> GuessSelection {
        GuessSelection::MinScore
    }
}

/// Positional log-probability scoring
///
/// Lower scores mean rarer letters in their positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyScorer;

impl Scorer for EntropyScorer {
    fn score(&self, candidates: &[Word]) -> Result<Vec<ScoredWord>, EngineError> {
        super::entropy::score_by_entropy(candidates)
    }
}

/// Positional letter-count scoring
///
/// Higher scores mean more common letters, so the best guess is the maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterFrequencyScorer;

impl Scorer for LetterFrequencyScorer {
    fn score(&self, candidates: &[Word]) -> Result<Vec<ScoredWord>, EngineError> {
        super::frequency::score_by_frequency(candidates)
    }

    fn default_selection(&self) -> GuessSelection {
        GuessSelection::MaxScore
    }
}

/// Enum wrapper for all scorer types
///
/// Allows runtime selection of scorer while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum ScoringMethod {
    /// Positional log-probability (default)
    Entropy(EntropyScorer),
    /// Positional letter counts
    LetterFrequency(LetterFrequencyScorer),
}

impl Default for ScoringMethod {
    fn default() -> Self {
        Self::Entropy(EntropyScorer)
    }
}

impl Scorer for ScoringMethod {
    fn score(&self, candidates: &[Word]) -> Result<Vec<ScoredWord>, EngineError> {
        match self {
            Self::Entropy(s) => s.score(candidates),
            Self::LetterFrequency(s) => s.score(candidates),
        }
    }

    fn default_selection(&self) -> GuessSelection {
        match self {
            Self::Entropy(s) => s.default_selection(),
            Self::LetterFrequency(s) => s.default_selection(),
        }
    }
}

impl ScoringMethod {
    /// Create a scoring method from its name
    ///
    /// Supported names: "entropy", "frequency" (alias "letter-frequency").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "entropy" => Some(Self::Entropy(EntropyScorer)),
            "frequency" | "letter-frequency" => Some(Self::LetterFrequency(LetterFrequencyScorer)),
            _ => None,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::LetterFrequency(_) => "frequency",
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("Unknown scoring method: {s} (expected entropy or frequency)"))
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
