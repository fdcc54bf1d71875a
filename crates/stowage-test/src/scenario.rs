//! Complete planning requests.
//!
//! # Example
//!
//! ```
//! use stowage_test::Scenario;
//!
//! let scenario = Scenario::combined();
//! assert_eq!(scenario.unloads.len(), 2);
//! assert_eq!(scenario.loads.len(), 1);
//! ```

use stowage_core::{Deck, LoadRequest, Slot, UnloadRequest};

use crate::containers::{container, empty_deck};

/// A deck together with the unload and load requests against it.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub deck: Deck,
    pub unloads: Vec<UnloadRequest>,
    pub loads: Vec<LoadRequest>,
}

impl Scenario {
    /// Creates a scenario on `deck` with no requests.
    pub fn on(deck: Deck) -> Self {
        Self {
            deck,
            unloads: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// Places reference container `name` at `(row, col)`.
    pub fn with(mut self, name: &str, row: usize, col: usize) -> Self {
        self.deck = self.deck.with_container(Slot::new(row, col), container(name));
        self
    }

    /// Requests `name` be unloaded from `(row, col)`.
    pub fn unload(mut self, name: &str, row: usize, col: usize) -> Self {
        self.unloads.push(UnloadRequest::new(name, (row, col)));
        self
    }

    /// Requests reference container `name` be loaded at `(row, col)`.
    pub fn load(mut self, name: &str, row: usize, col: usize) -> Self {
        self.loads.push(LoadRequest::new(container(name), (row, col)));
        self
    }

    /// The reference deck: A at (0,0), C at (0,2).
    pub fn reference_deck() -> Self {
        Self::on(empty_deck()).with("A", 0, 0).with("C", 0, 2)
    }

    /// Scenario A: unload A from an otherwise empty deck.
    pub fn single_unload() -> Self {
        Self::on(empty_deck()).with("A", 0, 0).unload("A", 0, 0)
    }

    /// Scenario B: load F onto an empty deck at (0,11).
    pub fn single_load() -> Self {
        Self::on(empty_deck()).load("F", 0, 11)
    }

    /// Scenario C: unload A and C, load F, all in independent columns.
    pub fn combined() -> Self {
        Self::reference_deck()
            .unload("A", 0, 0)
            .unload("C", 0, 2)
            .load("F", 0, 11)
    }

    /// Unload A from underneath B; B must be relocated first.
    pub fn buried_unload() -> Self {
        Self::on(empty_deck())
            .with("A", 0, 0)
            .with("B", 1, 0)
            .unload("A", 0, 0)
    }

    /// Unload E stacked on C, then C itself.
    pub fn stacked_unloads() -> Self {
        Self::reference_deck()
            .with("E", 1, 2)
            .unload("E", 1, 2)
            .unload("C", 0, 2)
    }

    /// Load D and E into the two outer columns.
    pub fn outer_loads() -> Self {
        Self::on(empty_deck()).load("D", 0, 0).load("E", 0, 11)
    }

    /// Load D on top of E, both from the yard.
    pub fn stacked_loads() -> Self {
        Self::on(empty_deck()).load("D", 1, 4).load("E", 0, 4)
    }

    /// Unload request naming a slot that holds a different container.
    pub fn mismatched_unload() -> Self {
        Self::reference_deck().unload("A", 0, 2)
    }
}
