//! Crane travel cost model.
//!
//! A crane move lifts the container straight up to the clearance height
//! (the tallest stack it has to pass, destination included), travels
//! horizontally, then lowers it onto the landing slot. The buffer takes
//! part as the ordinary coordinate `(rows, 0)`.

use smallvec::SmallVec;
use stowage_core::{DeckDimensions, Slot};

use crate::manifest::Layout;

/// Per-column stack heights of one layout.
///
/// A column's height is its landing row; a full column reports `rows`,
/// the ceiling marker, and has no landing slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    rows: usize,
    heights: SmallVec<[usize; 16]>,
}

impl ColumnProfile {
    /// Measures every column of `layout`.
    pub fn of(layout: &Layout) -> Self {
        let dims = layout.dimensions();
        Self {
            rows: dims.rows,
            heights: (0..dims.cols).map(|col| layout.column_height(col)).collect(),
        }
    }

    /// Landing row of `col`, `rows` when full.
    #[inline]
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    pub fn cols(&self) -> usize {
        self.heights.len()
    }

    /// The only cell of `col` a container may be placed into.
    pub fn landing_slot(&self, col: usize) -> Option<Slot> {
        let height = self.height(col);
        (height < self.rows).then(|| Slot::new(height, col))
    }

    /// The only movable container cell of `col`.
    pub fn top_slot(&self, col: usize) -> Option<Slot> {
        self.height(col)
            .checked_sub(1)
            .map(|row| Slot::new(row, col))
    }

    /// Returns true if `slot` is the landing slot of its column.
    pub fn is_landing_slot(&self, slot: Slot) -> bool {
        slot.col < self.cols() && self.landing_slot(slot.col) == Some(slot)
    }

    /// Height the crane must reach before travelling from `from` towards
    /// column `to_col`: the highest landing row over every column spanned,
    /// the source column excluded, and never below the source row.
    pub fn clearance(&self, from: Slot, to_col: usize) -> usize {
        let (lo, hi) = (from.col.min(to_col), from.col.max(to_col));
        (lo..=hi)
            .filter(|&col| col != from.col)
            .map(|col| self.height(col))
            .fold(from.row, usize::max)
    }

    /// Cost of carrying a container from `from` to `to`.
    pub fn transfer_cost(&self, from: Slot, to: Slot) -> u32 {
        let peak = self.clearance(from, to.col);
        (peak.abs_diff(from.row) + to.row.abs_diff(peak) + from.col.abs_diff(to.col)) as u32
    }
}

/// Manhattan distance from `slot` to the buffer; a lower bound on any
/// transfer between the two.
#[inline]
pub fn buffer_distance(slot: Slot, dims: DeckDimensions) -> u32 {
    let buffer = dims.buffer();
    (buffer.row.abs_diff(slot.row) + buffer.col.abs_diff(slot.col)) as u32
}
