//! Stowage Solver - A* crane move planning
//!
//! This crate finds a low-cost sequence of crane moves that unloads and
//! loads containers on a fixed-size deck:
//! - Request validation and compact state encoding
//! - Move generation under stacking rules, with the crane travel cost model
//! - Remaining-cost heuristics
//! - Best-first search with optional node and time budgets
//! - Path reconstruction into deck snapshots

pub mod cost;
pub mod frontier;
pub mod goal;
pub mod heuristic;
pub mod manifest;
pub mod moves;
pub mod path;
pub mod planner;
pub mod problem;
pub mod search;
pub mod state;
pub mod stats;
pub mod task;
pub mod termination;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cost::ColumnProfile;
pub use heuristic::{Heuristic, ManhattanHeuristic, ZeroHeuristic};
pub use manifest::{ContainerCode, Layout, Manifest};
pub use moves::{MoveGenerator, Successor, Transfer, TransferKind};
pub use path::{diff_snapshots, CraneMove, Plan};
pub use planner::{plan, Planner};
pub use problem::Problem;
pub use search::{AStarSearch, SearchOutcome};
pub use state::{SearchKey, SearchState};
pub use stats::SearchStats;
pub use task::{LoadTask, UnloadTask};
pub use termination::{NodeLimitTermination, SearchBudget, Termination, TimeTermination};
