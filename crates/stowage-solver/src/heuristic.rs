//! Remaining-cost estimators.

use std::fmt::Debug;

use stowage_config::HeuristicType;
use stowage_core::DeckDimensions;

use crate::cost::buffer_distance;
use crate::state::SearchState;

/// Estimates the cost still needed to reach a goal from a state.
///
/// Implementations must return 0 for every goal state and should not
/// overestimate; the search stays correct either way but may return a
/// costlier plan.
pub trait Heuristic: Send + Sync + Debug {
    fn estimate(&self, state: &SearchState, dims: DeckDimensions) -> u32;
}

/// Sums the straight-line crane travel of every pending task, ignoring the
/// lift needed to clear intermediate stacks.
///
/// An unload at `(r, c)` contributes `(rows - r) + c`; a load contributes
/// the Manhattan distance between its current and desired slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, state: &SearchState, dims: DeckDimensions) -> u32 {
        let buffer = dims.buffer();
        let unload: u32 = state
            .unloads()
            .iter()
            .filter(|task| task.is_pending(buffer))
            .map(|task| buffer_distance(task.current, dims))
            .sum();
        let load: u32 = state
            .loads()
            .iter()
            .filter(|task| task.is_pending())
            .map(|task| {
                (task.destination.row.abs_diff(task.current.row)
                    + task.destination.col.abs_diff(task.current.col)) as u32
            })
            .sum();
        unload + load
    }
}

/// Always zero; turns the A* search into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _state: &SearchState, _dims: DeckDimensions) -> u32 {
        0
    }
}

/// Builds the heuristic selected in configuration.
pub fn from_type(heuristic: HeuristicType) -> Box<dyn Heuristic> {
    match heuristic {
        HeuristicType::Manhattan => Box::new(ManhattanHeuristic),
        HeuristicType::Zero => Box::new(ZeroHeuristic),
    }
}
