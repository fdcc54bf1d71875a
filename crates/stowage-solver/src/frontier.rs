//! Best-first frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::SearchState;

/// A state waiting to be expanded.
///
/// Ordering looks at `(f, g, h)` only, lowest first, with insertion order
/// as the last tie-break; the state payload never takes part.
#[derive(Debug)]
pub struct FrontierEntry {
    pub f: u32,
    pub g: u32,
    pub h: u32,
    sequence: u64,
    /// Arena index of the node this entry expands.
    pub node: usize,
    pub state: SearchState,
}

impl FrontierEntry {
    fn key(&self) -> (u32, u32, u32, u64) {
        (self.f, self.g, self.h, self.sequence)
    }
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest key has to compare greatest
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of [`FrontierEntry`]s.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `state` with cost so far `g` and estimate `h`.
    pub fn push(&mut self, g: u32, h: u32, node: usize, state: SearchState) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            f: g.saturating_add(h),
            g,
            h,
            sequence,
            node,
            state,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    /// Removes the entry with the lowest `(f, g, h)`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn peak(&self) -> usize {
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Layout;
    use stowage_core::DeckDimensions;

    fn state() -> SearchState {
        SearchState::new(Layout::empty(DeckDimensions::new(1, 1)), vec![], vec![])
    }

    #[test]
    fn test_pops_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.push(10, 5, 0, state());
        frontier.push(3, 4, 1, state());
        frontier.push(8, 0, 2, state());

        assert_eq!(frontier.pop().map(|e| e.node), Some(1));
        assert_eq!(frontier.pop().map(|e| e.node), Some(2));
        assert_eq!(frontier.pop().map(|e| e.node), Some(0));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_ties_break_on_g_then_h_then_insertion() {
        let mut frontier = Frontier::new();
        frontier.push(6, 2, 0, state());
        frontier.push(4, 4, 1, state());
        frontier.push(4, 4, 2, state());
        frontier.push(5, 3, 3, state());

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_tracks_peak() {
        let mut frontier = Frontier::new();
        frontier.push(1, 1, 0, state());
        frontier.push(1, 1, 1, state());
        frontier.pop();
        frontier.push(1, 1, 2, state());
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peak(), 2);
    }
}
