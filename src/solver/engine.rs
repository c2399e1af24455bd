//! Simulation loop
//!
//! Each turn scores the current candidates, plays the guess chosen by the
//! selection policy against the hidden target, and filters the candidates
//! with the resulting feedback.

use super::filter::filter_candidates;
use super::observer::{NoopObserver, SimulationObserver};
use super::policy::GuessSelection;
use super::strategy::{Scorer, ScoringMethod};
use crate::core::{EngineError, Pattern, Word};
use std::fmt;
use std::time::Instant;

/// Terminal state of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guess produced all-green feedback
    Solved,
    /// The candidate set ran dry before the target was guessed
    Exhausted,
    /// The turn cap was reached first
    TurnLimit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solved => "solved",
            Self::Exhausted => "no words left",
            Self::TurnLimit => "turn limit reached",
        })
    }
}

/// A guess played during one turn
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub guess: Word,
    pub feedback: Pattern,
    /// Score the guess was ranked with
    pub score: f64,
    /// Size of the candidate set the guess was chosen from
    pub candidates: usize,
}

/// One entry of the transcript
///
/// `play` is `None` for the terminal "no guess / no words left" record.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub turn: usize,
    pub play: Option<Play>,
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.play {
            Some(play) => write!(f, "Turn {}: {} -> {}", self.turn, play.guess, play.feedback),
            None => write!(f, "Turn {}: no guess -> no words left", self.turn),
        }
    }
}

/// Ordered record of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub target: Word,
    pub records: Vec<TurnRecord>,
    pub outcome: Outcome,
}

impl Transcript {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Number of turn records, sentinel included
    #[must_use]
    pub fn turns(&self) -> usize {
        self.records.len()
    }

    /// The guesses in the order they were played
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.records
            .iter()
            .filter_map(|record| record.play.as_ref().map(|play| &play.guess))
    }
}

/// Drives a simulation with a given scorer and selection policy
pub struct Simulator<S: Scorer> {
    scorer: S,
    selection: GuessSelection,
    max_turns: Option<usize>,
}

impl Default for Simulator<ScoringMethod> {
    fn default() -> Self {
        Self::new(ScoringMethod::default(), GuessSelection::default())
    }
}

impl<S: Scorer> Simulator<S> {
    /// Create a simulator without an explicit turn cap
    pub const fn new(scorer: S, selection: GuessSelection) -> Self {
        Self {
            scorer,
            selection,
            max_turns: None,
        }
    }

    /// Create a simulator using the scorer's preferred selection policy
    pub fn with_default_selection(scorer: S) -> Self {
        let selection = scorer.default_selection();
        Self::new(scorer, selection)
    }

    /// Stop after `max_turns` turns even if unsolved
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    pub const fn selection(&self) -> GuessSelection {
        self.selection
    }

    /// Simulate a game against `target`
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if any dictionary word differs in
    /// length from the target.
    pub fn run(&self, target: &Word, dictionary: &[Word]) -> Result<Transcript, EngineError> {
        self.run_observed(target, dictionary, &mut NoopObserver)
    }

    /// Simulate a game, reporting progress to `observer`
    ///
    /// Without an explicit cap the loop is bounded by `dictionary.len() + 1`
    /// turns: every unsuccessful guess is removed from the candidates.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if any dictionary word differs in
    /// length from the target.
    pub fn run_observed(
        &self,
        target: &Word,
        dictionary: &[Word],
        observer: &mut dyn SimulationObserver,
    ) -> Result<Transcript, EngineError> {
        for word in dictionary {
            word.check_len(target.len())?;
        }

        let limit = self.max_turns.unwrap_or(dictionary.len() + 1);
        let mut candidates = dictionary.to_vec();
        let mut records = Vec::new();
        let mut turn = 0;

        let outcome = loop {
            if turn >= limit {
                break Outcome::TurnLimit;
            }
            turn += 1;

            observer.turn_started(turn, candidates.len());
            let start = Instant::now();
            let ranking = self.scorer.score(&candidates)?;
            observer.scored(turn, candidates.len(), start.elapsed());

            let Some(best) = self.selection.pick(&ranking) else {
                records.push(TurnRecord { turn, play: None });
                break Outcome::Exhausted;
            };

            let feedback = Pattern::compute(&best.word, target);
            let solved = feedback.is_perfect();
            let next = if solved {
                None
            } else {
                Some(filter_candidates(&candidates, &best.word, &feedback)?)
            };

            records.push(TurnRecord {
                turn,
                play: Some(Play {
                    guess: best.word.clone(),
                    feedback,
                    score: best.score,
                    candidates: candidates.len(),
                }),
            });

            match next {
                Some(remaining) => candidates = remaining,
                None => break Outcome::Solved,
            }
        };

        observer.finished(outcome, records.len());

        Ok(Transcript {
            target: target.clone(),
            records,
            outcome,
        })
    }
}

/// Simulate a game with the default scorer and selection policy
///
/// # Errors
/// Returns `EngineError::InvalidInput` if any dictionary word differs in
/// length from the target.
///
/// # Examples
/// ```
/// use wordle_simulator::core::Word;
/// use wordle_simulator::solver::{Outcome, simulate};
///
/// let dictionary = vec![Word::new("abcde").unwrap()];
/// let target = Word::new("abcde").unwrap();
///
/// let transcript = simulate(&target, &dictionary).unwrap();
/// assert_eq!(transcript.outcome, Outcome::Solved);
/// assert_eq!(transcript.records[0].to_string(), "Turn 1: abcde -> GGGGG");
/// ```
pub fn simulate(target: &Word, dictionary: &[Word]) -> Result<Transcript, EngineError> {
    Simulator::default().run(target, dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::observer::RecordingObserver;
    use crate::solver::strategy::{EntropyScorer, LetterFrequencyScorer};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(w: &str) -> Word {
        Word::new(w).unwrap()
    }

    const FIVE_LETTER: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "plane", "shine", "flame", "blame",
        "chore", "grace", "climb", "blitz", "plaza", "sling", "crisp", "brick", "stare", "glare",
    ];

    #[test]
    fn single_word_dictionary_is_solved_in_one_turn() {
        let transcript = simulate(&word("abcde"), &words(&["abcde"])).unwrap();

        assert_eq!(transcript.outcome, Outcome::Solved);
        assert_eq!(transcript.turns(), 1);

        let play = transcript.records[0].play.as_ref().unwrap();
        assert_eq!(play.guess.text(), "abcde");
        assert_eq!(play.feedback.to_string(), "GGGGG");
        assert_eq!(play.candidates, 1);
    }

    #[test]
    fn empty_dictionary_is_exhausted_immediately() {
        let transcript = simulate(&word("abcde"), &[]).unwrap();

        assert_eq!(transcript.outcome, Outcome::Exhausted);
        assert_eq!(transcript.records, vec![TurnRecord { turn: 1, play: None }]);
        assert_eq!(
            transcript.records[0].to_string(),
            "Turn 1: no guess -> no words left"
        );
    }

    #[test]
    fn absent_target_ends_exhausted() {
        let transcript = simulate(&word("abcdz"), &words(&["abcde", "abcdf"])).unwrap();

        assert_eq!(transcript.outcome, Outcome::Exhausted);
        assert!(!transcript.is_solved());
        assert_eq!(transcript.turns(), 3);
        assert!(transcript.records.last().unwrap().play.is_none());

        let guesses: Vec<&str> = transcript.guesses().map(Word::text).collect();
        assert_eq!(guesses, ["abcde", "abcdf"]);
    }

    #[test]
    fn tie_with_min_selection_guesses_first_word() {
        let dictionary = words(&["aabb", "bbaa"]);
        let simulator = Simulator::new(EntropyScorer, GuessSelection::MinScore);
        let transcript = simulator.run(&word("aabb"), &dictionary).unwrap();

        assert_eq!(transcript.outcome, Outcome::Solved);
        assert_eq!(transcript.turns(), 1);
    }

    #[test]
    fn tie_with_max_selection_shrinks_to_one_candidate() {
        let dictionary = words(&["aabb", "bbaa"]);
        let simulator = Simulator::new(EntropyScorer, GuessSelection::MaxScore);
        let transcript = simulator.run(&word("aabb"), &dictionary).unwrap();

        assert_eq!(transcript.outcome, Outcome::Solved);
        assert_eq!(transcript.turns(), 2);

        let first = transcript.records[0].play.as_ref().unwrap();
        assert_eq!(first.guess.text(), "bbaa");
        assert_eq!(first.feedback.to_string(), "YYYY");

        let second = transcript.records[1].play.as_ref().unwrap();
        assert_eq!(second.candidates, 1);
        assert_eq!(second.guess.text(), "aabb");
    }

    #[test]
    fn every_dictionary_target_is_solved() {
        let dictionary = words(FIVE_LETTER);
        let simulators = [
            Simulator::new(ScoringMethod::default(), GuessSelection::MinScore),
            Simulator::new(ScoringMethod::default(), GuessSelection::MaxScore),
            Simulator::with_default_selection(ScoringMethod::LetterFrequency(
                LetterFrequencyScorer,
            )),
        ];

        for simulator in &simulators {
            for target in &dictionary {
                let transcript = simulator.run(target, &dictionary).unwrap();
                assert!(transcript.is_solved(), "failed on {target}");
                assert_eq!(transcript.guesses().last(), Some(target));
                assert!(transcript.turns() <= dictionary.len());
            }
        }
    }

    #[test]
    fn candidate_counts_never_grow() {
        let dictionary = words(FIVE_LETTER);
        let transcript = simulate(&word("glare"), &dictionary).unwrap();

        let counts: Vec<usize> = transcript
            .records
            .iter()
            .filter_map(|r| r.play.as_ref().map(|p| p.candidates))
            .collect();

        assert_eq!(counts[0], dictionary.len());
        for pair in counts.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn turn_numbers_are_sequential() {
        let transcript = simulate(&word("blitz"), &words(FIVE_LETTER)).unwrap();
        for (i, record) in transcript.records.iter().enumerate() {
            assert_eq!(record.turn, i + 1);
        }
    }

    #[test]
    fn simulation_is_deterministic() {
        let dictionary = words(FIVE_LETTER);
        let target = word("shine");

        assert_eq!(
            simulate(&target, &dictionary).unwrap(),
            simulate(&target, &dictionary).unwrap()
        );
    }

    #[test]
    fn turn_cap_stops_unsolved_game() {
        // "xyz" has the rarest letters and is guessed first
        let dictionary = words(&["abc", "abd", "xyz", "abe"]);
        let simulator = Simulator::new(EntropyScorer, GuessSelection::MinScore).with_max_turns(1);
        let transcript = simulator.run(&word("abe"), &dictionary).unwrap();

        assert_eq!(transcript.outcome, Outcome::TurnLimit);
        assert_eq!(transcript.turns(), 1);
        assert_eq!(transcript.guesses().next().unwrap().text(), "xyz");
    }

    #[test]
    fn mismatched_dictionary_is_rejected() {
        let err = simulate(&word("abcde"), &words(&["abcde", "tool"])).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput {
                word: "tool".to_string(),
                expected: 5,
                found: 4,
            }
        );
    }

    #[test]
    fn observer_sees_every_scoring_pass() {
        let dictionary = words(&["abcde", "abcdf"]);
        let mut observer = RecordingObserver::new();
        let transcript = Simulator::default()
            .run_observed(&word("abcdz"), &dictionary, &mut observer)
            .unwrap();

        let turns: Vec<usize> = observer.passes.iter().map(|p| p.turn).collect();
        assert_eq!(turns, [1, 2, 3]);
        assert_eq!(observer.passes[2].candidates, 0);
        assert_eq!(observer.outcome, Some(transcript.outcome));
    }
}
