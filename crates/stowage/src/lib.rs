//! Stowage - crane move planning for container ships
//!
//! Give the planner a deck, the containers to take off and the containers
//! to put on; it returns every intermediate deck from start to finish.
//!
//! # Example
//!
//! ```rust
//! use stowage::prelude::*;
//!
//! let deck = Deck::empty(DeckDimensions::new(8, 12))
//!     .with_container(Slot::new(0, 0), Container::new("A", 120));
//!
//! let plan = stowage::plan(
//!     &deck,
//!     &[UnloadRequest::new("A", (0, 0))],
//!     &[LoadRequest::new(Container::new("F", 300), (0, 11))],
//! )
//! .unwrap();
//!
//! assert_eq!(plan.len(), 3);
//! assert!(plan.goal().container_at(Slot::new(0, 0)).is_none());
//! for step in plan.moves() {
//!     println!("{step}");
//! }
//! ```

// Deck model and errors
pub use stowage_core::{
    Cell, Container, ContainerId, Deck, DeckDimensions, DeckWeights, InputError, LoadRequest,
    PlanError, SearchExhaustion, Slot, UnloadRequest,
};

// Configuration
pub use stowage_config::{ConfigError, ExploredKeying, HeuristicType, PlannerConfig};

// Planning
pub use stowage_solver::goal::deck_satisfies;
pub use stowage_solver::{
    diff_snapshots, plan, CraneMove, Heuristic, ManhattanHeuristic, Plan, Planner, SearchStats,
    ZeroHeuristic,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Container, ContainerId, Deck, DeckDimensions, LoadRequest, Plan, PlanError, Planner,
        PlannerConfig, Slot, UnloadRequest,
    };
    pub use super::{CraneMove, InputError, SearchExhaustion};
}
