//! Word ranking command
//!
//! Scores a whole dictionary and reports the guesses the engine would prefer.

use crate::core::{EngineError, Word};
use crate::solver::{GuessSelection, ScoredWord, Scorer};

/// Result of ranking a dictionary
pub struct RankResult {
    /// Best entries first, according to the selection policy
    pub entries: Vec<ScoredWord>,
    pub total_candidates: usize,
    pub selection: GuessSelection,
}

/// Rank every word in `dictionary` and keep the `top` best
///
/// "Best" follows `selection`: lowest scores first for `MinScore`, highest
/// first for `MaxScore`.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if the dictionary mixes word lengths.
pub fn rank_words<S: Scorer>(
    dictionary: &[Word],
    scorer: &S,
    selection: GuessSelection,
    top: usize,
) -> Result<RankResult, EngineError> {
    let ranking = scorer.score(dictionary)?;

    let entries = match selection {
        GuessSelection::MinScore => ranking.into_iter().take(top).collect(),
        GuessSelection::MaxScore => ranking.into_iter().rev().take(top).collect(),
    };

    Ok(RankResult {
        entries,
        total_candidates: dictionary.len(),
        selection,
    })
}
