//! Word solving command
//!
//! Simulates a full game against one target word.

use crate::core::{EngineError, Word};
use crate::solver::{Scorer, SimulationObserver, Simulator, Transcript};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    /// Whether the target appears in the dictionary; absent targets are still played
    pub in_dictionary: bool,
    pub transcript: Transcript,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.transcript.is_solved()
    }
}

/// Solve a specific word against `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not alphabetic)
/// - A dictionary word differs in length from the target
pub fn solve_word<S: Scorer>(
    config: SolveConfig,
    simulator: &Simulator<S>,
    dictionary: &[Word],
    observer: &mut dyn SimulationObserver,
) -> Result<SolveResult, EngineError> {
    let target = Word::new(&config.target)?;
    let in_dictionary = dictionary.contains(&target);

    if !in_dictionary {
        log::warn!("target '{target}' is not in the dictionary, proceeding anyway");
    }

    let transcript = simulator.run_observed(&target, dictionary, observer)?;

    Ok(SolveResult {
        target: target.text().to_string(),
        in_dictionary,
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{NoopObserver, Outcome, RecordingObserver};
    use crate::wordlists::words_from_slice;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "plane", "shine", "flame", "blame",
    ];

    #[test]
    fn solve_word_succeeds() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("flame".to_string());

        let result =
            solve_word(config, &Simulator::default(), &dictionary, &mut NoopObserver).unwrap();

        assert!(result.success());
        assert!(result.in_dictionary);
        assert_eq!(result.target, "flame");
    }

    #[test]
    fn solve_normalizes_target_case() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("CRANE".to_string());

        let result =
            solve_word(config, &Simulator::default(), &dictionary, &mut NoopObserver).unwrap();

        assert_eq!(result.target, "crane");
        assert!(result.in_dictionary);
    }

    #[test]
    fn solve_absent_target_proceeds_and_fails() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("zzzzz".to_string());

        let result =
            solve_word(config, &Simulator::default(), &dictionary, &mut NoopObserver).unwrap();

        assert!(!result.in_dictionary);
        assert!(!result.success());
        assert_eq!(result.transcript.outcome, Outcome::Exhausted);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("cr4ne".to_string());

        let result = solve_word(config, &Simulator::default(), &dictionary, &mut NoopObserver);
        assert!(matches!(result, Err(EngineError::InvalidWord(_))));
    }

    #[test]
    fn solve_wrong_length_target_returns_error() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("tool".to_string());

        let result = solve_word(config, &Simulator::default(), &dictionary, &mut NoopObserver);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn solve_reports_to_observer() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("shine".to_string());
        let mut observer = RecordingObserver::new();

        let result = solve_word(config, &Simulator::default(), &dictionary, &mut observer).unwrap();

        assert_eq!(observer.passes.len(), result.transcript.turns());
        assert_eq!(observer.outcome, Some(Outcome::Solved));
    }
}
