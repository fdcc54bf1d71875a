//! Search budgets.
//!
//! Without a budget the search runs until the frontier is empty. A budget
//! is consulted once per frontier pop and reports why it fired.

use std::fmt::Debug;
use std::time::Duration;

use stowage_config::PlannerConfig;
use stowage_core::SearchExhaustion;

use crate::stats::SearchStats;

/// Decides whether the search must stop.
pub trait Termination: Send + Sync + Debug {
    /// Returns the reason to stop, or `None` to keep going.
    fn check(&self, stats: &SearchStats) -> Option<SearchExhaustion>;
}

/// Stops after a number of node expansions.
#[derive(Debug, Clone, Copy)]
pub struct NodeLimitTermination {
    limit: u64,
}

impl NodeLimitTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeLimitTermination {
    fn check(&self, stats: &SearchStats) -> Option<SearchExhaustion> {
        (stats.nodes_expanded >= self.limit).then_some(SearchExhaustion::NodeLimit {
            limit: self.limit,
        })
    }
}

/// Stops after a time limit.
///
/// # Example
///
/// ```
/// use stowage_solver::termination::TimeTermination;
///
/// let term = TimeTermination::millis(500);
/// let term = TimeTermination::seconds(30);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn check(&self, stats: &SearchStats) -> Option<SearchExhaustion> {
        (stats.elapsed() >= self.limit).then_some(SearchExhaustion::TimeLimit { limit: self.limit })
    }
}

/// Stops as soon as any of its members does. Empty means unbounded.
#[derive(Debug, Default)]
pub struct SearchBudget {
    terminations: Vec<Box<dyn Termination>>,
}

impl SearchBudget {
    /// A budget that never fires.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builds the budget described by the `[termination]` section.
    pub fn from_config(config: &PlannerConfig) -> Self {
        let mut budget = Self::unbounded();
        if let Some(limit) = config.node_limit() {
            budget = budget.with(NodeLimitTermination::new(limit));
        }
        if let Some(limit) = config.time_limit() {
            budget = budget.with(TimeTermination::new(limit));
        }
        budget
    }

    pub fn with(mut self, termination: impl Termination + 'static) -> Self {
        self.terminations.push(Box::new(termination));
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.terminations.is_empty()
    }
}

impl Termination for SearchBudget {
    fn check(&self, stats: &SearchStats) -> Option<SearchExhaustion> {
        self.terminations.iter().find_map(|t| t.check(stats))
    }
}
