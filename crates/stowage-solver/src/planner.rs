//! Planning entry point.

use std::fmt;

use stowage_config::PlannerConfig;
use stowage_core::{Deck, LoadRequest, PlanError, UnloadRequest};
use tracing::{info, warn};

use crate::heuristic::{self, Heuristic};
use crate::moves::MoveGenerator;
use crate::path::{decode_path, reconstruct_path, Plan};
use crate::problem::Problem;
use crate::search::AStarSearch;
use crate::stats::SearchStats;
use crate::termination::SearchBudget;

/// Turns a deck and its unload/load requests into a crane move plan.
///
/// A planner holds configuration only. Each [`Planner::plan`] call builds
/// its own search from scratch, so one planner can serve any number of
/// requests, from any number of threads.
///
/// # Example
///
/// ```
/// use stowage_config::PlannerConfig;
/// use stowage_core::{Container, Deck, DeckDimensions, Slot, UnloadRequest};
/// use stowage_solver::Planner;
///
/// let deck = Deck::empty(DeckDimensions::new(8, 12))
///     .with_container(Slot::new(0, 0), Container::new("A", 120));
///
/// let planner = Planner::new(PlannerConfig::new().with_node_limit(10_000));
/// let plan = planner
///     .plan(&deck, &[UnloadRequest::new("A", (0, 0))], &[])
///     .unwrap();
///
/// assert_eq!(plan.len(), 2);
/// assert!(plan.goal().container_at(Slot::new(0, 0)).is_none());
/// ```
pub struct Planner {
    config: PlannerConfig,
    heuristic: Box<dyn Heuristic>,
}

impl fmt::Debug for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Planner")
            .field("config", &self.config)
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl Planner {
    /// Creates a planner using the heuristic named in `config`.
    pub fn new(config: PlannerConfig) -> Self {
        let heuristic = heuristic::from_type(config.search.heuristic);
        Self { config, heuristic }
    }

    /// Replaces the heuristic.
    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'static) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the moves that satisfy every unload and load request.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidInput`] if the request is malformed (nothing is
    /// searched), [`PlanError::NoSolutionFound`] if the search ends without
    /// a goal.
    pub fn plan(
        &self,
        deck: &Deck,
        unloads: &[UnloadRequest],
        loads: &[LoadRequest],
    ) -> Result<Plan, PlanError> {
        let problem = match Problem::prepare(deck, unloads, loads, self.config.dimensions()) {
            Ok(problem) => problem,
            Err(err) => {
                warn!(event = "invalid_input", error = %err);
                return Err(err.into());
            }
        };
        let dims = problem.dimensions();

        info!(
            event = "plan_start",
            rows = dims.rows as u64,
            cols = dims.cols as u64,
            containers = problem.manifest().len() as u64,
            unloads = unloads.len() as u64,
            loads = loads.len() as u64,
            keying = ?self.config.search.explored_keying,
        );

        let budget = SearchBudget::from_config(&self.config);
        let search = AStarSearch::new(
            MoveGenerator::new(dims),
            self.heuristic.as_ref(),
            &budget,
            self.config.search.explored_keying,
        );

        let mut stats = SearchStats::default();
        stats.start();
        let result = search.run(problem.initial().clone(), &mut stats);
        stats.finish();

        match result {
            Ok(outcome) => {
                let path = reconstruct_path(&outcome.nodes, outcome.goal);
                let snapshots = decode_path(problem.manifest(), &path);
                info!(
                    event = "plan_end",
                    duration_ms = stats.elapsed().as_millis() as u64,
                    expanded = stats.nodes_expanded,
                    generated = stats.states_generated,
                    pruned = stats.duplicates_pruned,
                    speed = stats.expansions_per_second(),
                    moves = (snapshots.len() - 1) as u64,
                    cost = outcome.cost,
                );
                Ok(Plan::new(snapshots, outcome.cost, stats))
            }
            Err(reason) => {
                info!(
                    event = "plan_failed",
                    duration_ms = stats.elapsed().as_millis() as u64,
                    expanded = stats.nodes_expanded,
                    generated = stats.states_generated,
                    reason = %reason,
                );
                Err(PlanError::NoSolutionFound {
                    explored: stats.nodes_expanded,
                    reason,
                })
            }
        }
    }
}

/// Plans with the default configuration: unbounded search, Manhattan
/// heuristic, deck-only explored set.
pub fn plan(
    deck: &Deck,
    unloads: &[UnloadRequest],
    loads: &[LoadRequest],
) -> Result<Plan, PlanError> {
    Planner::default().plan(deck, unloads, loads)
}
