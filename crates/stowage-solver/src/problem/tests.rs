//! Tests for request validation and encoding.

use super::*;
use crate::test_utils::{code, container, empty_deck, prepare, reference_dims, Scenario};
use stowage_core::{ContainerId, Slot};

fn reject(scenario: &Scenario) -> InputError {
    Problem::prepare(&scenario.deck, &scenario.unloads, &scenario.loads, None)
        .expect_err("scenario should be rejected")
}

#[test]
fn test_combined_scenario_encodes() {
    let problem = prepare(&Scenario::combined());
    let buffer = problem.dimensions().buffer();

    assert_eq!(problem.dimensions(), reference_dims());
    assert_eq!(problem.manifest().len(), 3);

    let state = problem.initial();
    assert_eq!(state.layout().get(Slot::new(0, 0)), code(&problem, "A"));
    assert_eq!(state.layout().get(Slot::new(0, 2)), code(&problem, "C"));
    // load cargo waits in the yard
    assert!(!state.layout().contains(code(&problem, "F")));

    assert_eq!(state.unloads().len(), 2);
    assert_eq!(state.unloads()[0].current, Slot::new(0, 0));
    assert_eq!(state.unloads()[1].current, Slot::new(0, 2));
    assert_eq!(state.loads()[0].current, buffer);
    assert_eq!(state.loads()[0].destination, Slot::new(0, 11));
}

#[test]
fn test_bystanders_are_interned() {
    let problem = prepare(&Scenario::buried_unload());
    assert_eq!(problem.manifest().len(), 2);
    assert_eq!(problem.initial().layout().get(Slot::new(1, 0)), code(&problem, "B"));
}

#[test]
fn test_rejects_empty_dimensions() {
    let dims = stowage_core::DeckDimensions::new(0, 3);
    let scenario = Scenario::on(stowage_core::Deck::empty(dims));
    assert_eq!(reject(&scenario), InputError::InvalidDimensions(dims));
}

#[test]
fn test_rejects_dimension_mismatch() {
    let scenario = Scenario::single_unload();
    let expected = stowage_core::DeckDimensions::new(8, 10);
    let err = Problem::prepare(
        &scenario.deck,
        &scenario.unloads,
        &scenario.loads,
        Some(expected),
    )
    .unwrap_err();
    assert_eq!(
        err,
        InputError::DimensionMismatch {
            expected,
            found: reference_dims(),
        }
    );

    assert!(Problem::prepare(
        &scenario.deck,
        &scenario.unloads,
        &scenario.loads,
        Some(reference_dims()),
    )
    .is_ok());
}

#[test]
fn test_rejects_floating_container() {
    let scenario = Scenario::on(empty_deck()).with("B", 1, 3);
    assert_eq!(
        reject(&scenario),
        InputError::FloatingContainer {
            id: ContainerId::from("B"),
            slot: Slot::new(1, 3),
        }
    );
}

#[test]
fn test_rejects_duplicate_deck_identity() {
    let scenario = Scenario::reference_deck().with("A", 0, 5);
    assert_eq!(
        reject(&scenario),
        InputError::DuplicateContainer(ContainerId::from("A"))
    );
}

#[test]
fn test_rejects_unload_outside_deck() {
    let scenario = Scenario::reference_deck().unload("A", 8, 0);
    assert_eq!(
        reject(&scenario),
        InputError::UnloadOutOfBounds {
            id: ContainerId::from("A"),
            location: Slot::new(8, 0),
        }
    );
}

#[test]
fn test_rejects_unload_location_mismatch() {
    assert_eq!(
        reject(&Scenario::mismatched_unload()),
        InputError::UnloadLocationMismatch {
            id: ContainerId::from("A"),
            location: Slot::new(0, 2),
        }
    );

    let empty_slot = Scenario::reference_deck().unload("A", 0, 7);
    assert!(matches!(
        reject(&empty_slot),
        InputError::UnloadLocationMismatch { .. }
    ));
}

#[test]
fn test_rejects_repeated_unload() {
    let scenario = Scenario::reference_deck()
        .unload("A", 0, 0)
        .unload("A", 0, 0);
    assert_eq!(
        reject(&scenario),
        InputError::DuplicateContainer(ContainerId::from("A"))
    );
}

#[test]
fn test_rejects_load_into_buffer() {
    let scenario = Scenario::on(empty_deck()).load("F", 8, 0);
    assert_eq!(
        reject(&scenario),
        InputError::LoadTargetsBuffer {
            id: ContainerId::from("F"),
            destination: Slot::new(8, 0),
        }
    );
}

#[test]
fn test_rejects_load_outside_deck() {
    let scenario = Scenario::on(empty_deck()).load("F", 0, 12);
    assert_eq!(
        reject(&scenario),
        InputError::LoadOutOfBounds {
            id: ContainerId::from("F"),
            destination: Slot::new(0, 12),
        }
    );
}

#[test]
fn test_rejects_shared_destination() {
    let scenario = Scenario::on(empty_deck())
        .load("D", 0, 4)
        .load("E", 0, 4);
    assert_eq!(
        reject(&scenario),
        InputError::DuplicateDestination(Slot::new(0, 4))
    );
}

#[test]
fn test_rejects_load_identity_already_aboard() {
    let scenario = Scenario::reference_deck().load("A", 0, 5);
    assert_eq!(
        reject(&scenario),
        InputError::DuplicateContainer(ContainerId::from("A"))
    );

    let twice = Scenario::on(empty_deck()).load("F", 0, 1).load("F", 0, 2);
    assert_eq!(
        reject(&twice),
        InputError::DuplicateContainer(ContainerId::from("F"))
    );
}

#[test]
fn test_rejects_too_many_containers() {
    let cols = Manifest::MAX_CONTAINERS;
    let mut deck = stowage_core::Deck::empty(stowage_core::DeckDimensions::new(1, cols));
    for col in 0..cols {
        deck = deck.with_container(Slot::new(0, col), container(&format!("X{col}")));
    }
    let scenario = Scenario::on(deck).load("F", 0, 0);

    assert_eq!(
        reject(&scenario),
        InputError::TooManyContainers {
            count: cols + 1,
            max: cols,
        }
    );
}
