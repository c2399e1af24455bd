//! Ranking candidates by log-probability

use super::calculator::{PositionFrequency, log_probability};
use crate::core::{EngineError, Word};
use crate::solver::strategy::{ScoredWord, sort_ascending};
use rayon::prelude::*;

/// Score every candidate and sort ascending (rarest letters first)
///
/// Returns an empty list for empty input. Ties keep the input order, so
/// the result is identical however the work is split across threads.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if the candidates differ in length.
///
/// # Examples
/// ```
/// use wordle_simulator::core::Word;
/// use wordle_simulator::solver::entropy::score_by_entropy;
///
/// let candidates = vec![
///     Word::new("crane").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("slate").unwrap(),
/// ];
///
/// let scored = score_by_entropy(&candidates).unwrap();
/// assert_eq!(scored.len(), 3);
/// assert_eq!(scored[0].word.text(), "slate"); // S and L are unique to it
/// ```
pub fn score_by_entropy(candidates: &[Word]) -> Result<Vec<ScoredWord>, EngineError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let table = PositionFrequency::build(candidates)?;

    let mut scored: Vec<ScoredWord> = candidates
        .par_iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            score: log_probability(word, &table),
        })
        .collect();

    sort_ascending(&mut scored);
    Ok(scored)
}
