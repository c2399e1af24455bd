//! Observability hooks for the simulation loop
//!
//! The loop reports turn starts, scoring passes and the final outcome to an
//! observer. Observers never influence the simulation.

use super::engine::Outcome;
use std::time::Duration;

/// Receives progress reports from a running simulation
pub trait SimulationObserver {
    /// A turn is about to score `candidates` words
    fn turn_started(&mut self, _turn: usize, _candidates: usize) {}

    /// A scoring pass over `candidates` words finished after `elapsed`
    fn scored(&mut self, _turn: usize, _candidates: usize, _elapsed: Duration) {}

    /// The simulation reached a terminal state after `turns` records
    fn finished(&mut self, _outcome: Outcome, _turns: usize) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Observer that forwards reports to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SimulationObserver for LogObserver {
    fn turn_started(&mut self, turn: usize, candidates: usize) {
        log::debug!("turn {turn}, candidates size: {candidates}");
    }

    fn scored(&mut self, turn: usize, candidates: usize, elapsed: Duration) {
        log::debug!(
            "turn {turn}: scored {candidates} candidates in {:.3}ms",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    fn finished(&mut self, outcome: Outcome, turns: usize) {
        log::info!("game finished: {outcome} after {turns} turns");
    }
}

/// A pair of observers receives every report, first then second
impl<A: SimulationObserver, B: SimulationObserver> SimulationObserver for (A, B) {
    fn turn_started(&mut self, turn: usize, candidates: usize) {
        self.0.turn_started(turn, candidates);
        self.1.turn_started(turn, candidates);
    }

    fn scored(&mut self, turn: usize, candidates: usize, elapsed: Duration) {
        self.0.scored(turn, candidates, elapsed);
        self.1.scored(turn, candidates, elapsed);
    }

    fn finished(&mut self, outcome: Outcome, turns: usize) {
        self.0.finished(outcome, turns);
        self.1.finished(outcome, turns);
    }
}

/// One timed scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPass {
    pub turn: usize,
    pub candidates: usize,
    pub elapsed: Duration,
}

/// Observer that keeps every scoring pass and the final outcome
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub passes: Vec<ScoringPass>,
    pub outcome: Option<Outcome>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time spent scoring
    #[must_use]
    pub fn total_scoring_time(&self) -> Duration {
        self.passes.iter().map(|p| p.elapsed).sum()
    }
}

impl SimulationObserver for RecordingObserver {
    fn scored(&mut self, turn: usize, candidates: usize, elapsed: Duration) {
        self.passes.push(ScoringPass {
            turn,
            candidates,
            elapsed,
        });
    }

    fn finished(&mut self, outcome: Outcome, _turns: usize) {
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_collects_passes() {
        let mut observer = RecordingObserver::new();
        observer.turn_started(1, 10);
        observer.scored(1, 10, Duration::from_millis(2));
        observer.scored(2, 3, Duration::from_millis(1));
        observer.finished(Outcome::Solved, 2);

        assert_eq!(observer.passes.len(), 2);
        assert_eq!(observer.passes[1].candidates, 3);
        assert_eq!(observer.total_scoring_time(), Duration::from_millis(3));
        assert_eq!(observer.outcome, Some(Outcome::Solved));
    }

    #[test]
    fn paired_observers_both_receive_reports() {
        let mut pair = (RecordingObserver::new(), RecordingObserver::new());
        pair.scored(1, 4, Duration::from_millis(1));
        pair.finished(Outcome::Exhausted, 1);

        assert_eq!(pair.0.passes, pair.1.passes);
        assert_eq!(pair.1.outcome, Some(Outcome::Exhausted));
    }

    #[test]
    fn noop_observer_accepts_reports() {
        let mut observer = NoopObserver;
        observer.turn_started(1, 1);
        observer.scored(1, 1, Duration::ZERO);
        observer.finished(Outcome::Exhausted, 1);
    }
}
