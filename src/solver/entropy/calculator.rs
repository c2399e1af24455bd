//! Position letter frequency table and log-probability score

use crate::core::{EngineError, Word};
use rustc_hash::FxHashMap;

/// Per-position letter counts over one candidate set
///
/// Rebuilt from scratch every turn; never outlives the candidate set it
/// was built from.
#[derive(Debug, Clone, Default)]
pub struct PositionFrequency {
    counts: Vec<FxHashMap<u8, usize>>,
    total: usize,
}

impl PositionFrequency {
    /// Count letters at every position in a single pass
    ///
    /// The word length is taken from the first candidate.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the candidates differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_simulator::core::Word;
    /// use wordle_simulator::solver::entropy::PositionFrequency;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("crate").unwrap()];
    /// let table = PositionFrequency::build(&words).unwrap();
    ///
    /// assert_eq!(table.count(0, b'c'), 2);
    /// assert_eq!(table.count(3, b'n'), 1);
    /// assert!((table.probability(3, b't') - 0.5).abs() < f64::EPSILON);
    /// ```
    pub fn build(candidates: &[Word]) -> Result<Self, EngineError> {
        let Some(first) = candidates.first() else {
            return Ok(Self::default());
        };

        let word_length = first.len();
        let mut counts = vec![FxHashMap::default(); word_length];

        for word in candidates {
            word.check_len(word_length)?;
            for (position, &letter) in word.letters().iter().enumerate() {
                *counts[position].entry(letter).or_insert(0) += 1;
            }
        }

        Ok(Self {
            counts,
            total: candidates.len(),
        })
    }

    /// Length of the words the table was built from (0 when empty)
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.counts.len()
    }

    /// Number of candidates counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// How many candidates have `letter` at `position`
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> usize {
        self.counts
            .get(position)
            .and_then(|letters| letters.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of candidates with `letter` at `position`
    #[must_use]
    pub fn probability(&self, position: usize, letter: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(position, letter) as f64 / self.total as f64
    }
}

/// Sum of `log2(p)` over the word's positions
///
/// `p` is the fraction of candidates sharing the word's letter at that
/// position. Positions with zero frequency are skipped. A word drawn from the
/// table's own candidates always has `p >= 1/N`, so the result lies in
/// `[len * log2(1/N), 0]`.
///
/// Lower means rarer letters in their positions.
#[must_use]
pub fn log_probability(word: &Word, table: &PositionFrequency) -> f64 {
    word.letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table.probability(position, letter))
        .filter(|&p| p > 0.0)
        .map(f64::log2)
        .sum()
}
