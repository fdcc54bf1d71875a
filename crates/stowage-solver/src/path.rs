//! Path reconstruction and the finished plan.

use std::fmt;

use stowage_core::{ContainerId, Deck, Slot};

use crate::manifest::{Layout, Manifest};
use crate::search::SearchNode;
use crate::stats::SearchStats;

/// Walks parent links from `goal` back to the root and returns the layouts
/// in forward order, initial first, goal last.
///
/// # Panics
///
/// Panics if `goal` or any parent index is outside `nodes`.
pub fn reconstruct_path(nodes: &[SearchNode], goal: usize) -> Vec<&Layout> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        let node = &nodes[index];
        path.push(node.layout());
        current = node.parent();
    }
    path.reverse();
    path
}

/// Decodes a reconstructed path into full deck snapshots.
pub fn decode_path(manifest: &Manifest, path: &[&Layout]) -> Vec<Deck> {
    path.iter().map(|layout| manifest.decode(layout)).collect()
}

/// One crane move as seen from the outside. Moves to or from the yard use
/// the buffer slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraneMove {
    pub container: ContainerId,
    pub from: Slot,
    pub to: Slot,
}

impl fmt::Display for CraneMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.container, self.from, self.to)
    }
}

/// Recovers the single crane move between two consecutive snapshots.
///
/// Returns `None` when the snapshots are identical, differ in size, or
/// differ by anything other than one container changing place.
pub fn diff_snapshots(before: &Deck, after: &Deck) -> Option<CraneMove> {
    let dims = before.dimensions();
    if dims != after.dimensions() {
        return None;
    }

    let mut left: Option<(Slot, &ContainerId)> = None;
    let mut arrived: Option<(Slot, &ContainerId)> = None;
    for ((slot, old), (_, new)) in before.cells().zip(after.cells()) {
        if old == new {
            continue;
        }
        if let Some(id) = old.id() {
            if left.replace((slot, id)).is_some() {
                return None;
            }
        }
        if let Some(id) = new.id() {
            if arrived.replace((slot, id)).is_some() {
                return None;
            }
        }
    }

    let buffer = dims.buffer();
    match (left, arrived) {
        (Some((from, a)), Some((to, b))) if a == b => Some(CraneMove {
            container: a.clone(),
            from,
            to,
        }),
        (Some((from, id)), None) => Some(CraneMove {
            container: id.clone(),
            from,
            to: buffer,
        }),
        (None, Some((to, id))) => Some(CraneMove {
            container: id.clone(),
            from: buffer,
            to,
        }),
        _ => None,
    }
}

/// A feasible move sequence.
///
/// Holds every deck snapshot from the initial deck to the goal deck, both
/// included, so a plan is never empty.
#[derive(Clone, Debug)]
pub struct Plan {
    snapshots: Vec<Deck>,
    cost: u32,
    stats: SearchStats,
}

impl Plan {
    /// # Panics
    ///
    /// Panics if `snapshots` is empty.
    pub fn new(snapshots: Vec<Deck>, cost: u32, stats: SearchStats) -> Self {
        assert!(!snapshots.is_empty(), "a plan holds at least the initial deck");
        Self {
            snapshots,
            cost,
            stats,
        }
    }

    /// Deck snapshots from initial to goal, inclusive.
    pub fn snapshots(&self) -> &[Deck] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Deck> {
        self.snapshots
    }

    /// Number of snapshots, one more than the number of moves.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn initial(&self) -> &Deck {
        &self.snapshots[0]
    }

    pub fn goal(&self) -> &Deck {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Summed crane travel cost of every move.
    pub fn total_cost(&self) -> u32 {
        self.cost
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The moves between consecutive snapshots.
    pub fn moves(&self) -> Vec<CraneMove> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| diff_snapshots(&pair[0], &pair[1]))
            .collect()
    }
}
