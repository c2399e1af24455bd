//! Wordle feedback calculation and representation
//!
//! A pattern holds one mark per letter of the guess:
//! - Black (letter not available in the target)
//! - Yellow (letter in target, wrong position)
//! - Green (letter in correct position)
//!
//! Canonical text form is one of `G`, `Y`, `B` per position, e.g. `"YYGYY"`.

use super::{EngineError, Word};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Black,
    Yellow,
    Green,
}

impl Mark {
    /// Canonical single-character form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Emoji square
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Black => '⬛',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `B`/`b`/`-`/`_`/⬛/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '-' | '_' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess against one target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Mark>);

impl Pattern {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All greens for a word of `len` letters
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Mark::Green; len])
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements Wordle's duplicate-letter rules: greens are assigned first
    /// and consume the target's letter budget, then yellows are assigned left
    /// to right from whatever budget is left.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_simulator::core::{Pattern, Word};
    ///
    /// let guess = Word::new("abcde").unwrap();
    /// let target = Word::new("edcba").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target).unwrap();
    /// assert_eq!(pattern.to_string(), "YYGYY");
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, EngineError> {
        guess.check_len(target.len())?;
        Ok(Self::compute(guess, target))
    }

    /// Comparator body; callers guarantee equal lengths
    pub(crate) fn compute(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len());

        let mut marks = vec![Mark::Black; target.len()];
        let mut available = target.char_counts();

        // Greens must all be settled before any yellow is handed out
        for (i, (g, t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                marks[i] = Mark::Green;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, letter) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Black
                && let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                marks[i] = Mark::Yellow;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Green)
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Green).count()
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Convert pattern to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse a pattern from a string like "GYB" or "🟩🟨⬛"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Pattern must not be empty".to_string());
        }
        s.chars()
            .map(|ch| Mark::from_symbol(ch).ok_or_else(|| format!("Invalid pattern string: {s}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
