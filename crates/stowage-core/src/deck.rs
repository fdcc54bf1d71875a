//! The deck grid.
//!
//! A [`Deck`] is a fixed `rows × cols` grid of [`Cell`]s stored row-major,
//! row 0 at the bottom. It is pure data: the no-floating invariant is
//! reported by [`Deck::floating_slots`] but never enforced here.

use crate::error::InputError;
use crate::{Cell, Container, ContainerId, DeckDimensions, Slot};

/// A snapshot of every container slot on the ship.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, Deck, DeckDimensions, Slot};
///
/// let deck = Deck::empty(DeckDimensions::new(8, 12))
///     .with_container(Slot::new(0, 0), Container::new("A", 120));
///
/// assert_eq!(deck.locate(&"A".into()), Some(Slot::new(0, 0)));
/// assert_eq!(deck.column_height(0), 1);
/// assert_eq!(deck.column_height(1), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    dims: DeckDimensions,
    cells: Vec<Cell>,
}

impl Deck {
    /// Creates a deck with every cell empty.
    pub fn empty(dims: DeckDimensions) -> Self {
        Deck {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    /// Builds a deck from rows, bottom row first.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidDimensions`] for an empty grid and
    /// [`InputError::RaggedRow`] when rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, InputError> {
        let cols = rows.first().map_or(0, Vec::len);
        let dims = DeckDimensions::new(rows.len(), cols);
        if dims.rows == 0 || dims.cols == 0 {
            return Err(InputError::InvalidDimensions(dims));
        }

        let mut cells = Vec::with_capacity(dims.cell_count());
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(InputError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Deck { dims, cells })
    }

    /// Places `container` at `slot`, builder style.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the deck.
    pub fn with_container(mut self, slot: Slot, container: Container) -> Self {
        self.set(slot, Cell::Occupied(container));
        self
    }

    #[inline]
    pub fn dimensions(&self) -> DeckDimensions {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Returns the cell at `slot`, or `None` outside the deck (the buffer
    /// included).
    pub fn get(&self, slot: Slot) -> Option<&Cell> {
        if self.dims.contains(slot) {
            self.cells.get(self.dims.index(slot))
        } else {
            None
        }
    }

    /// Replaces the cell at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the deck.
    pub fn set(&mut self, slot: Slot, cell: Cell) {
        assert!(
            self.dims.contains(slot),
            "slot {slot} outside {} deck",
            self.dims
        );
        let index = self.dims.index(slot);
        self.cells[index] = cell;
    }

    /// Returns the container at `slot`, if any.
    pub fn container_at(&self, slot: Slot) -> Option<&Container> {
        self.get(slot).and_then(Cell::container)
    }

    /// Finds the slot holding `id`.
    pub fn locate(&self, id: &ContainerId) -> Option<Slot> {
        self.cells
            .iter()
            .position(|cell| cell.id() == Some(id))
            .map(|index| self.dims.slot(index))
    }

    /// Number of occupied cells counted from the floor of `col` up to the
    /// first empty cell.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.dims.rows)
            .take_while(|&row| {
                self.get(Slot::new(row, col))
                    .is_some_and(|cell| !cell.is_empty())
            })
            .count()
    }

    /// Iterates occupied cells in row-major order.
    pub fn containers(&self) -> impl Iterator<Item = (Slot, &Container)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.container().map(|c| (self.dims.slot(index), c)))
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Slot, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.dims.slot(index), cell))
    }

    /// Occupied slots that have an empty cell somewhere below them.
    pub fn floating_slots(&self) -> Vec<Slot> {
        let mut floating = Vec::new();
        for col in 0..self.dims.cols {
            let height = self.column_height(col);
            for row in height..self.dims.rows {
                let slot = Slot::new(row, col);
                if self.container_at(slot).is_some() {
                    floating.push(slot);
                }
            }
        }
        floating
    }

    /// Weight distribution between the two halves of the deck.
    pub fn weights(&self) -> DeckWeights {
        let half = self.dims.cols / 2;
        let mut weights = DeckWeights::default();
        for (slot, container) in self.containers() {
            let weight = u64::from(container.weight());
            if slot.col < half {
                weights.port += weight;
            } else {
                weights.starboard += weight;
            }
            weights.total += weight;
        }
        weights
    }
}

/// Weight totals per deck half; columns below `cols / 2` count as port.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, Deck, DeckDimensions, Slot};
///
/// let deck = Deck::empty(DeckDimensions::new(2, 4))
///     .with_container(Slot::new(0, 0), Container::new("A", 100))
///     .with_container(Slot::new(0, 3), Container::new("B", 40));
///
/// let weights = deck.weights();
/// assert_eq!((weights.port, weights.starboard, weights.total), (100, 40, 140));
/// assert_eq!(weights.imbalance(), 60);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckWeights {
    pub port: u64,
    pub starboard: u64,
    pub total: u64,
}

impl DeckWeights {
    /// Absolute difference between the two halves.
    pub fn imbalance(&self) -> u64 {
        self.port.abs_diff(self.starboard)
    }
}
