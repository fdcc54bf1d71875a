//! Tests for move generation.

use super::*;
use crate::test_utils::{code, container, prepare, Scenario};
use stowage_core::Deck;

fn kinds(successors: &[Successor]) -> (usize, usize, usize) {
    successors.iter().fold((0, 0, 0), |(l, u, r), s| match s.transfer.kind {
        TransferKind::Load => (l + 1, u, r),
        TransferKind::Unload => (l, u + 1, r),
        TransferKind::Relocate => (l, u, r + 1),
    })
}

#[test]
fn test_single_load_places_directly() {
    let problem = prepare(&Scenario::single_load());
    let generator = MoveGenerator::new(problem.dimensions());

    let successors = generator.successors(problem.initial());
    assert_eq!(kinds(&successors), (1, 0, 0));

    let placed = &successors[0];
    assert_eq!(placed.cost, 19);
    assert_eq!(placed.transfer.to, Slot::new(0, 11));
    assert_eq!(placed.state.layout().get(Slot::new(0, 11)), code(&problem, "F"));
    assert!(!placed.state.loads()[0].is_pending());
}

#[test]
fn test_unload_target_goes_to_buffer_or_other_columns() {
    let problem = prepare(&Scenario::single_unload());
    let generator = MoveGenerator::new(problem.dimensions());
    let buffer = problem.dimensions().buffer();

    let successors = generator.successors(problem.initial());
    assert_eq!(kinds(&successors), (0, 1, 11));

    let unload = successors
        .iter()
        .find(|s| s.transfer.kind == TransferKind::Unload)
        .unwrap();
    assert_eq!(unload.cost, 8);
    assert_eq!(unload.state.unloads()[0].current, buffer);
    assert!(unload.state.layout().get(Slot::new(0, 0)).is_empty());
}

#[test]
fn test_relocated_unload_target_is_tracked() {
    let problem = prepare(&Scenario::single_unload());
    let generator = MoveGenerator::new(problem.dimensions());

    let successors = generator.successors(problem.initial());
    let moved = successors
        .iter()
        .find(|s| s.transfer.kind == TransferKind::Relocate && s.transfer.to.col == 5)
        .unwrap();
    assert_eq!(moved.cost, 5);
    assert_eq!(moved.state.unloads()[0].current, Slot::new(0, 5));
    assert!(moved.state.unloads()[0].is_pending(problem.dimensions().buffer()));
}

#[test]
fn test_only_top_container_moves() {
    let problem = prepare(&Scenario::buried_unload());
    let generator = MoveGenerator::new(problem.dimensions());
    let b = code(&problem, "B");

    let successors = generator.successors(problem.initial());
    assert_eq!(kinds(&successors), (0, 0, 11));
    assert!(successors.iter().all(|s| s.transfer.container == b));
    assert!(successors.iter().all(|s| s.transfer.from == Slot::new(1, 0)));
    // A stays pending where it is
    assert!(successors
        .iter()
        .all(|s| s.state.unloads()[0].current == Slot::new(0, 0)));
}

#[test]
fn test_never_moves_within_a_column() {
    let problem = prepare(&Scenario::combined());
    let generator = MoveGenerator::new(problem.dimensions());

    for successor in generator.successors(problem.initial()) {
        if successor.transfer.kind == TransferKind::Relocate {
            assert_ne!(successor.transfer.from.col, successor.transfer.to.col);
        }
    }
}

#[test]
fn test_load_waits_for_support() {
    let problem = prepare(&Scenario::stacked_loads());
    let generator = MoveGenerator::new(problem.dimensions());

    // D's destination (1,4) floats until E is placed at (0,4)
    let successors = generator.successors(problem.initial());
    assert_eq!(kinds(&successors), (1, 0, 0));
    assert_eq!(successors[0].transfer.container, code(&problem, "E"));

    let after_e = generator.successors(&successors[0].state);
    assert_eq!(kinds(&after_e), (1, 0, 0));
    assert_eq!(after_e[0].transfer.container, code(&problem, "D"));
    assert_eq!(after_e[0].transfer.to, Slot::new(1, 4));
}

#[test]
fn test_placed_load_cargo_is_not_relocated() {
    let problem = prepare(&Scenario::single_load());
    let generator = MoveGenerator::new(problem.dimensions());

    let placed = generator.successors(problem.initial()).remove(0);
    assert!(generator.successors(&placed.state).is_empty());
}

#[test]
fn test_full_column_top_is_movable() {
    let dims = stowage_core::DeckDimensions::new(2, 3);
    let deck = Deck::empty(dims)
        .with_container(Slot::new(0, 0), container("A"))
        .with_container(Slot::new(1, 0), container("B"));
    let problem = prepare(&Scenario::on(deck));
    let generator = MoveGenerator::new(dims);

    let successors = generator.successors(problem.initial());
    assert_eq!(kinds(&successors), (0, 0, 2));
    assert!(successors
        .iter()
        .all(|s| s.transfer.from == Slot::new(1, 0)));
}

#[test]
fn test_full_columns_accept_nothing() {
    let dims = stowage_core::DeckDimensions::new(1, 2);
    let deck = Deck::empty(dims)
        .with_container(Slot::new(0, 0), container("A"))
        .with_container(Slot::new(0, 1), container("B"));
    let problem = prepare(&Scenario::on(deck));

    assert!(MoveGenerator::new(dims)
        .successors(problem.initial())
        .is_empty());
}

#[test]
fn test_parent_state_is_not_mutated() {
    let problem = prepare(&Scenario::combined());
    let before = problem.initial().clone();

    let successors = MoveGenerator::new(problem.dimensions()).successors(problem.initial());
    assert!(!successors.is_empty());
    assert_eq!(problem.initial(), &before);
}

#[test]
fn test_costs_match_cost_model() {
    let problem = prepare(&Scenario::stacked_unloads());
    let profile = ColumnProfile::of(problem.initial().layout());

    for successor in MoveGenerator::new(problem.dimensions()).successors(problem.initial()) {
        let transfer = successor.transfer;
        assert_eq!(successor.cost, profile.transfer_cost(transfer.from, transfer.to));
    }
}
