//! Test utilities for stowage-solver
//!
//! Re-exports the shared fixtures from stowage-test and adds helpers that
//! turn them into encoded problems.

pub use stowage_test::containers::{container, empty_deck, reference_dims};
pub use stowage_test::Scenario;

use stowage_core::ContainerId;

use crate::manifest::ContainerCode;
use crate::problem::Problem;

/// Validates and encodes `scenario`, panicking on invalid input.
pub fn prepare(scenario: &Scenario) -> Problem {
    Problem::prepare(&scenario.deck, &scenario.unloads, &scenario.loads, None)
        .expect("scenario should be valid")
}

/// Code of reference container `name` within `problem`.
pub fn code(problem: &Problem, name: &str) -> ContainerCode {
    problem
        .manifest()
        .code_of(&ContainerId::from(name))
        .expect("container should be interned")
}
