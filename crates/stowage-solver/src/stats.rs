//! Search statistics.

use std::time::{Duration, Instant};

/// Counters for one planning run.
///
/// # Example
///
/// ```
/// use stowage_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_expansion();
/// stats.record_generated(true);
/// stats.record_generated(false);
///
/// assert_eq!(stats.nodes_expanded, 1);
/// assert_eq!(stats.states_generated, 2);
/// assert_eq!(stats.duplicates_pruned, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    finished: Option<Duration>,
    /// States taken off the frontier and expanded.
    pub nodes_expanded: u64,
    /// Successor states produced by the move generator.
    pub states_generated: u64,
    /// Successors dropped because their key was already explored.
    pub duplicates_pruned: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished = Some(self.running_time());
    }

    /// Time since [`SearchStats::start`], or the frozen time once finished.
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.running_time())
    }

    fn running_time(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    /// Records one generated successor and whether it was new.
    pub fn record_generated(&mut self, fresh: bool) {
        self.states_generated += 1;
        if !fresh {
            self.duplicates_pruned += 1;
        }
    }

    /// Expansions per second.
    pub fn expansions_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.nodes_expanded as f64 / secs) as u64
        } else {
            0
        }
    }
}
