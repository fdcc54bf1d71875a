//! Slot coordinates and deck dimensions.

use std::fmt;

/// A `(row, column)` coordinate on the deck.
///
/// Row 0 is the deck floor; rows grow upwards. The coordinate
/// `(rows, 0)` is reserved for the buffer, see [`DeckDimensions::buffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    /// Creates a new slot coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Slot { row, col }
    }
}

impl From<(usize, usize)> for Slot {
    fn from((row, col): (usize, usize)) -> Self {
        Slot::new(row, col)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The fixed size of a deck grid.
///
/// # Examples
///
/// ```
/// use stowage_core::{DeckDimensions, Slot};
///
/// let dims = DeckDimensions::new(8, 12);
/// assert_eq!(dims.buffer(), Slot::new(8, 0));
/// assert!(dims.contains(Slot::new(7, 11)));
/// assert!(!dims.contains(dims.buffer()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl DeckDimensions {
    /// Creates new dimensions.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        DeckDimensions { rows, cols }
    }

    /// The reserved off-ship buffer coordinate `(rows, 0)`.
    #[inline]
    pub const fn buffer(&self) -> Slot {
        Slot::new(self.rows, 0)
    }

    /// Returns true if `slot` is the buffer coordinate.
    #[inline]
    pub fn is_buffer(&self, slot: Slot) -> bool {
        slot == self.buffer()
    }

    /// Returns true if `slot` is a real deck cell.
    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        slot.row < self.rows && slot.col < self.cols
    }

    /// Number of real deck cells.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index of a deck cell. The caller guarantees `contains(slot)`.
    #[inline]
    pub const fn index(&self, slot: Slot) -> usize {
        slot.row * self.cols + slot.col
    }

    /// Inverse of [`DeckDimensions::index`].
    #[inline]
    pub const fn slot(&self, index: usize) -> Slot {
        Slot::new(index / self.cols, index % self.cols)
    }
}

impl fmt::Display for DeckDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
