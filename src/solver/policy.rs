//! Guess selection policy
//!
//! Scorers return their ranking in ascending order; the policy decides which
//! end of it is played.

use super::strategy::ScoredWord;
use std::fmt;
use std::str::FromStr;

/// Which end of the ascending ranking becomes the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessSelection {
    /// First entry: lowest score (rarest letters for the entropy scorer)
    #[default]
    MinScore,
    /// Last entry: highest score; among tied maxima the last in input order
    MaxScore,
}

impl GuessSelection {
    /// Pick the guess from an ascending ranking
    ///
    /// Returns `None` if the ranking is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_simulator::core::Word;
    /// use wordle_simulator::solver::{GuessSelection, ScoredWord};
    ///
    /// let ranking = vec![
    ///     ScoredWord { word: Word::new("slate").unwrap(), score: -3.7 },
    ///     ScoredWord { word: Word::new("crate").unwrap(), score: -1.7 },
    /// ];
    ///
    /// assert_eq!(GuessSelection::MinScore.pick(&ranking).unwrap().word.text(), "slate");
    /// assert_eq!(GuessSelection::MaxScore.pick(&ranking).unwrap().word.text(), "crate");
    /// assert!(GuessSelection::MinScore.pick(&[]).is_none());
    /// ```
    #[must_use]
    pub fn pick(self, ranking: &[ScoredWord]) -> Option<&ScoredWord> {
        match self {
            Self::MinScore => ranking.first(),
            Self::MaxScore => ranking.last(),
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinScore => "min",
            Self::MaxScore => "max",
        }
    }
}

impl FromStr for GuessSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "min-score" => Ok(Self::MinScore),
            "max" | "max-score" => Ok(Self::MaxScore),
            _ => Err(format!("Unknown selection policy: {s} (expected min or max)")),
        }
    }
}

impl fmt::Display for GuessSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
