//! A* search over deck states.
//!
//! The engine owns its frontier, explored set and node arena for the
//! duration of one [`AStarSearch::run`]; nothing survives between runs.
//!
//! # Explored-set keying
//!
//! With [`ExploredKeying::DeckOnly`] a state is marked explored by its deck
//! arrangement alone, at the moment it is first generated, and is never
//! reopened. If the same deck were reachable with different task
//! progress, the later arrival would be dropped. The move rules keep task
//! progress a function of the deck (unload targets are tracked wherever
//! they sit, placed load cargo is never moved again), so the two keyings
//! explore the same graph; `DeckAndTasks` exists to check exactly that.

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use stowage_config::ExploredKeying;
use stowage_core::SearchExhaustion;
use tracing::{debug, trace};

use crate::frontier::Frontier;
use crate::goal::is_goal;
use crate::heuristic::Heuristic;
use crate::manifest::Layout;
use crate::moves::MoveGenerator;
use crate::state::{SearchKey, SearchState};
use crate::stats::SearchStats;
use crate::termination::Termination;

/// An arena entry: a discovered deck and the node it was reached from.
#[derive(Debug, Clone)]
pub struct SearchNode {
    layout: Layout,
    parent: Option<usize>,
}

impl SearchNode {
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Arena index of the parent, `None` for the initial state.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// A successful search: the goal node, its path cost and the arena.
#[derive(Debug)]
pub struct SearchOutcome {
    pub goal: usize,
    pub cost: u32,
    pub nodes: Vec<SearchNode>,
}

/// Best-first search ordered by `f = g + h`.
pub struct AStarSearch<'a> {
    generator: MoveGenerator,
    heuristic: &'a dyn Heuristic,
    termination: &'a dyn Termination,
    keying: ExploredKeying,
}

impl fmt::Debug for AStarSearch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStarSearch")
            .field("generator", &self.generator)
            .field("heuristic", &self.heuristic)
            .field("keying", &self.keying)
            .finish()
    }
}

impl<'a> AStarSearch<'a> {
    pub fn new(
        generator: MoveGenerator,
        heuristic: &'a dyn Heuristic,
        termination: &'a dyn Termination,
        keying: ExploredKeying,
    ) -> Self {
        Self {
            generator,
            heuristic,
            termination,
            keying,
        }
    }

    /// Searches from `initial` until a goal is popped, the frontier runs
    /// dry or the budget fires.
    pub fn run(
        &self,
        initial: SearchState,
        stats: &mut SearchStats,
    ) -> Result<SearchOutcome, SearchExhaustion> {
        let dims = self.generator.dimensions();
        let mut frontier = Frontier::new();
        let mut explored: HashSet<SearchKey> = HashSet::new();
        let mut nodes: Vec<SearchNode> = Vec::new();

        let h = self.heuristic.estimate(&initial, dims);
        explored.insert(initial.key(self.keying));
        nodes.push(SearchNode {
            layout: initial.layout().clone(),
            parent: None,
        });
        frontier.push(0, h, 0, initial);

        let mut last_progress_time = Instant::now();
        let mut last_progress_nodes: u64 = 0;

        while let Some(entry) = frontier.pop() {
            if is_goal(&entry.state) {
                stats.peak_frontier = frontier.peak();
                return Ok(SearchOutcome {
                    goal: entry.node,
                    cost: entry.g,
                    nodes,
                });
            }

            if let Some(reason) = self.termination.check(stats) {
                stats.peak_frontier = frontier.peak();
                return Err(reason);
            }

            stats.record_expansion();
            trace!(
                event = "expand",
                node = entry.node,
                f = entry.f,
                g = entry.g,
                h = entry.h,
                frontier = frontier.len(),
            );

            for successor in self.generator.successors(&entry.state) {
                let fresh = explored.insert(successor.state.key(self.keying));
                stats.record_generated(fresh);
                if !fresh {
                    continue;
                }

                let node = nodes.len();
                nodes.push(SearchNode {
                    layout: successor.state.layout().clone(),
                    parent: Some(entry.node),
                });
                let g = entry.g.saturating_add(successor.cost);
                let h = self.heuristic.estimate(&successor.state, dims);
                frontier.push(g, h, node, successor.state);
            }

            // Log progress every second
            let now = Instant::now();
            if now.duration_since(last_progress_time).as_secs() >= 1 {
                let nodes_delta = stats.nodes_expanded - last_progress_nodes;
                let elapsed_secs = now.duration_since(last_progress_time).as_secs_f64();
                debug!(
                    event = "progress",
                    expanded = stats.nodes_expanded,
                    frontier = frontier.len(),
                    explored = explored.len(),
                    speed = (nodes_delta as f64 / elapsed_secs) as u64,
                    best_f = entry.f,
                );
                last_progress_time = now;
                last_progress_nodes = stats.nodes_expanded;
            }
        }

        stats.peak_frontier = frontier.peak();
        Err(SearchExhaustion::FrontierExhausted)
    }
}
