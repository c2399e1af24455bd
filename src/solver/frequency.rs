//! Letter-frequency scoring
//!
//! Scores a word by how many candidates share each of its letters in the
//! same position. Common-letter words score high.

use super::entropy::PositionFrequency;
use super::strategy::{ScoredWord, sort_ascending};
use crate::core::{EngineError, Word};
use rayon::prelude::*;

/// Sum of positional letter counts for `word`
#[must_use]
pub fn frequency_sum(word: &Word, table: &PositionFrequency) -> usize {
    word.letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table.count(position, letter))
        .sum()
}

/// Score every candidate by positional letter frequency, sorted ascending
///
/// # Errors
/// Returns `EngineError::InvalidInput` if the candidates differ in length.
pub fn score_by_frequency(candidates: &[Word]) -> Result<Vec<ScoredWord>, EngineError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let table = PositionFrequency::build(candidates)?;

    let mut scored: Vec<ScoredWord> = candidates
        .par_iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            score: frequency_sum(word, &table) as f64,
        })
        .collect();

    sort_ascending(&mut scored);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequency_sum_counts_shared_positions() {
        let candidates = words(&["crane", "crate", "slate"]);
        let table = PositionFrequency::build(&candidates).unwrap();

        // c:2 r:2 a:3 t:2 e:3
        assert_eq!(frequency_sum(&candidates[1], &table), 12);
        // s:1 l:1 a:3 t:2 e:3
        assert_eq!(frequency_sum(&candidates[2], &table), 10);
    }

    #[test]
    fn most_common_word_ranks_last() {
        let candidates = words(&["crane", "crate", "slate"]);
        let scored = score_by_frequency(&candidates).unwrap();

        assert_eq!(scored.first().unwrap().word.text(), "slate");
        assert_eq!(scored.last().unwrap().word.text(), "crate");
    }

    #[test]
    fn empty_candidates_give_empty_scores() {
        assert!(score_by_frequency(&[]).unwrap().is_empty());
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        assert!(score_by_frequency(&words(&["crane", "tool"])).is_err());
    }
}
