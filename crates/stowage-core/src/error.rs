//! Error types for the stowage planner

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::{ContainerId, DeckDimensions, Slot};

/// Main error type for planning requests
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The request was rejected before any search was performed
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The search ended without reaching a goal state
    #[error("No solution found after expanding {explored} states: {reason}")]
    NoSolutionFound {
        explored: u64,
        reason: SearchExhaustion,
    },
}

impl PlanError {
    /// Returns true for [`PlanError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PlanError::InvalidInput(_))
    }

    /// Returns true for [`PlanError::NoSolutionFound`].
    pub fn is_no_solution(&self) -> bool {
        matches!(self, PlanError::NoSolutionFound { .. })
    }
}

/// Why a search stopped without a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchExhaustion {
    /// Every reachable state was expanded.
    FrontierExhausted,
    /// The configured node budget ran out.
    NodeLimit { limit: u64 },
    /// The configured time budget ran out.
    TimeLimit { limit: Duration },
}

impl fmt::Display for SearchExhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchExhaustion::FrontierExhausted => write!(f, "frontier exhausted"),
            SearchExhaustion::NodeLimit { limit } => write!(f, "node limit of {limit} reached"),
            SearchExhaustion::TimeLimit { limit } => {
                write!(f, "time limit of {}ms reached", limit.as_millis())
            }
        }
    }
}

/// Malformed planning requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("deck must have at least one row and one column, got {0}")]
    InvalidDimensions(DeckDimensions),

    #[error("deck row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("deck is {found} but the planner is configured for {expected}")]
    DimensionMismatch {
        expected: DeckDimensions,
        found: DeckDimensions,
    },

    #[error("container {id} at {slot} has an empty cell below it")]
    FloatingContainer { id: ContainerId, slot: Slot },

    #[error("container identity {0} appears more than once")]
    DuplicateContainer(ContainerId),

    #[error("unload location {location} of {id} is outside the deck")]
    UnloadOutOfBounds { id: ContainerId, location: Slot },

    #[error("unload location {location} does not hold {id}")]
    UnloadLocationMismatch { id: ContainerId, location: Slot },

    #[error("load destination of {id} is the buffer coordinate {destination}")]
    LoadTargetsBuffer { id: ContainerId, destination: Slot },

    #[error("load destination {destination} of {id} is outside the deck")]
    LoadOutOfBounds { id: ContainerId, destination: Slot },

    #[error("load destination {0} is requested more than once")]
    DuplicateDestination(Slot),

    #[error("{count} containers exceed the supported maximum of {max}")]
    TooManyContainers { count: usize, max: usize },
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_converts() {
        let err: PlanError = InputError::DuplicateContainer(ContainerId::from("A")).into();
        assert!(err.is_invalid_input());
        assert!(!err.is_no_solution());
        assert_eq!(
            err.to_string(),
            "Invalid input: container identity A appears more than once"
        );
    }

    #[test]
    fn test_exhaustion_display() {
        let err = PlanError::NoSolutionFound {
            explored: 10,
            reason: SearchExhaustion::NodeLimit { limit: 10 },
        };
        assert_eq!(
            err.to_string(),
            "No solution found after expanding 10 states: node limit of 10 reached"
        );
        assert_eq!(
            SearchExhaustion::TimeLimit {
                limit: Duration::from_millis(250)
            }
            .to_string(),
            "time limit of 250ms reached"
        );
    }
}
