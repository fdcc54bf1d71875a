//! Compact deck encoding.
//!
//! Every container taking part in a request is interned once into a
//! [`Manifest`] and referred to by a two-byte [`ContainerCode`] afterwards.
//! Search states store a [`Layout`] of codes instead of full [`Deck`]s, so
//! copying, hashing and comparing a state never touches container names.

use std::collections::HashMap;

use stowage_core::{Cell, Container, ContainerId, Deck, DeckDimensions, Slot};

/// Interned container reference. Code 0 is the empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ContainerCode(u16);

impl ContainerCode {
    /// The empty cell.
    pub const EMPTY: ContainerCode = ContainerCode(0);

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    #[inline]
    fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

/// Containers known to one planning request.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    containers: Vec<Container>,
    codes: HashMap<ContainerId, ContainerCode>,
}

impl Manifest {
    /// Largest number of containers a manifest can hold.
    pub const MAX_CONTAINERS: usize = u16::MAX as usize;

    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `container`, returning `None` when its identity is already
    /// known or the manifest is full.
    pub fn intern(&mut self, container: Container) -> Option<ContainerCode> {
        if self.codes.contains_key(container.id()) || self.containers.len() >= Self::MAX_CONTAINERS
        {
            return None;
        }
        self.containers.push(container);
        let code = ContainerCode(self.containers.len() as u16);
        let id = self.containers[code.index()].id().clone();
        self.codes.insert(id, code);
        Some(code)
    }

    /// Returns the code of `id`, if interned.
    pub fn code_of(&self, id: &ContainerId) -> Option<ContainerCode> {
        self.codes.get(id).copied()
    }

    /// Returns the container behind `code`; `None` for the empty code.
    pub fn container(&self, code: ContainerCode) -> Option<&Container> {
        if code.is_empty() {
            None
        } else {
            self.containers.get(code.index())
        }
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Expands a layout back into a full deck snapshot.
    pub fn decode(&self, layout: &Layout) -> Deck {
        let mut deck = Deck::empty(layout.dimensions());
        for (index, &code) in layout.cells.iter().enumerate() {
            if let Some(container) = self.container(code) {
                deck.set(layout.dims.slot(index), Cell::Occupied(container.clone()));
            }
        }
        deck
    }
}

/// A deck arrangement in compact form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    dims: DeckDimensions,
    cells: Box<[ContainerCode]>,
}

impl Layout {
    /// Creates a layout with every cell empty.
    pub fn empty(dims: DeckDimensions) -> Self {
        Layout {
            dims,
            cells: vec![ContainerCode::EMPTY; dims.cell_count()].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> DeckDimensions {
        self.dims
    }

    /// Returns the code at `slot`; the buffer and anything outside the
    /// deck read as empty.
    #[inline]
    pub fn get(&self, slot: Slot) -> ContainerCode {
        if self.dims.contains(slot) {
            self.cells[self.dims.index(slot)]
        } else {
            ContainerCode::EMPTY
        }
    }

    /// Writes `code` at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a deck cell.
    #[inline]
    pub fn set(&mut self, slot: Slot, code: ContainerCode) {
        assert!(self.dims.contains(slot), "slot {slot} outside {}", self.dims);
        self.cells[self.dims.index(slot)] = code;
    }

    /// Returns true if `code` sits anywhere on the deck.
    pub fn contains(&self, code: ContainerCode) -> bool {
        self.cells.contains(&code)
    }

    /// Number of stacked cells in `col`, counted from the floor.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.dims.rows)
            .take_while(|&row| !self.get(Slot::new(row, col)).is_empty())
            .count()
    }
}
