//! Candidate filtering
//!
//! Keeps the candidates that would have produced the observed feedback had
//! they been the target.

use crate::core::{EngineError, Pattern, Word};
use rayon::prelude::*;

/// Filter candidates to those consistent with `observed` for `guess`
///
/// A word `w` survives iff `Pattern::calculate(guess, w) == observed`. The
/// surviving words keep their input order.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if the observed pattern or any
/// candidate differs in length from the guess. Nothing is filtered in that
/// case.
///
/// # Examples
/// ```
/// use wordle_simulator::core::{Pattern, Word};
/// use wordle_simulator::solver::filter_candidates;
///
/// let candidates = vec![
///     Word::new("irate").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grate").unwrap(),
/// ];
/// let guess = Word::new("crane").unwrap();
/// let observed: Pattern = "GGGBG".parse().unwrap();
///
/// let remaining = filter_candidates(&candidates, &guess, &observed).unwrap();
/// assert_eq!(remaining, vec![Word::new("crate").unwrap()]);
/// ```
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    observed: &Pattern,
) -> Result<Vec<Word>, EngineError> {
    if observed.len() != guess.len() {
        return Err(EngineError::InvalidInput {
            word: observed.to_string(),
            expected: guess.len(),
            found: observed.len(),
        });
    }
    for candidate in candidates {
        candidate.check_len(guess.len())?;
    }

    Ok(candidates
        .par_iter()
        .filter(|&candidate| Pattern::compute(guess, candidate) == *observed)
        .cloned()
        .collect())
}
