//! Benchmark command
//!
//! Simulates many games and aggregates turn statistics.

use crate::core::{EngineError, Word};
use crate::solver::{Outcome, Scorer, Simulator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub turn_limited: usize,
    /// Turns used by solved games
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns → number of solved games
    pub distribution: HashMap<usize, usize>,
    /// Unsolved targets and the solved targets that took the most turns
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct random targets from `dictionary`
///
/// A fixed `seed` makes the sample reproducible. Asking for more words
/// than the dictionary holds returns all of them.
#[must_use]
pub fn sample_targets(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    dictionary
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Simulate a game for every target and collect statistics
///
/// Games run in parallel; the statistics do not depend on scheduling.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if a target or dictionary word
/// differs in length from the others.
pub fn run_benchmark<S: Scorer>(
    simulator: &Simulator<S>,
    dictionary: &[Word],
    targets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult, EngineError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let transcripts = targets
        .par_iter()
        .map(|target| {
            let transcript = simulator.run(target, dictionary);
            pb.inc(1);
            transcript
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut solved = 0;
    let mut exhausted = 0;
    let mut turn_limited = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut ranked: Vec<(bool, usize, &str)> = Vec::with_capacity(transcripts.len());

    for transcript in &transcripts {
        let turns = transcript.turns();
        match transcript.outcome {
            Outcome::Solved => {
                solved += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_turns = max_turns.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            Outcome::Exhausted => exhausted += 1,
            Outcome::TurnLimit => turn_limited += 1,
        }
        ranked.push((transcript.is_solved(), turns, transcript.target.text()));
    }

    // Unsolved games first, then by turns used
    ranked.sort_by_key(|&(solved, turns, _)| (solved, std::cmp::Reverse(turns)));
    let hardest = ranked
        .into_iter()
        .take(5)
        .map(|(_, turns, word)| (word.to_string(), turns))
        .collect();

    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        exhausted,
        turn_limited,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        hardest,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
