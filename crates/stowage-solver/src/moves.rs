//! Legal crane moves.
//!
//! From any state the crane can:
//! 1. place a pending load container from the yard straight onto its
//!    destination, when that destination is currently a landing slot;
//! 2. lift an unload container off the top of its stack into the buffer;
//! 3. carry the top container of a column onto the landing slot of any
//!    other column.
//!
//! Containers that belong to a load task are never picked up again once
//! placed.

use std::fmt;

use stowage_core::{DeckDimensions, Slot};

use crate::cost::ColumnProfile;
use crate::manifest::ContainerCode;
use crate::state::SearchState;

/// What a transfer accomplishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Buffer to the container's load destination.
    Load,
    /// Deck to buffer.
    Unload,
    /// Deck to deck, between two different columns.
    Relocate,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferKind::Load => write!(f, "Load"),
            TransferKind::Unload => write!(f, "Unload"),
            TransferKind::Relocate => write!(f, "Relocate"),
        }
    }
}

/// A single crane move in compact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transfer {
    pub kind: TransferKind,
    pub container: ContainerCode,
    pub from: Slot,
    pub to: Slot,
}

/// A state reachable with one crane move, and what that move costs.
#[derive(Clone, Debug)]
pub struct Successor {
    pub state: SearchState,
    pub transfer: Transfer,
    pub cost: u32,
}

/// Enumerates successor states for one deck size.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator {
    dims: DeckDimensions,
}

impl MoveGenerator {
    pub fn new(dims: DeckDimensions) -> Self {
        Self { dims }
    }

    #[inline]
    pub fn dimensions(&self) -> DeckDimensions {
        self.dims
    }

    /// Every state reachable from `state` with one crane move.
    pub fn successors(&self, state: &SearchState) -> Vec<Successor> {
        let profile = ColumnProfile::of(state.layout());
        let mut out = Vec::with_capacity(self.dims.cols * self.dims.cols);
        self.push_placements(state, &profile, &mut out);
        self.push_relocations(state, &profile, &mut out);
        out
    }

    fn push_placements(
        &self,
        state: &SearchState,
        profile: &ColumnProfile,
        out: &mut Vec<Successor>,
    ) {
        let buffer = self.dims.buffer();

        for (index, task) in state.loads().iter().enumerate() {
            if !task.is_pending() || !profile.is_landing_slot(task.destination) {
                continue;
            }

            let to = task.destination;
            let next = state.derive(|layout, _, loads| {
                layout.set(to, task.container);
                loads[index].current = to;
            });
            out.push(Successor {
                state: next,
                transfer: Transfer {
                    kind: TransferKind::Load,
                    container: task.container,
                    from: buffer,
                    to,
                },
                cost: profile.transfer_cost(buffer, to),
            });
        }
    }

    fn push_relocations(
        &self,
        state: &SearchState,
        profile: &ColumnProfile,
        out: &mut Vec<Successor>,
    ) {
        let buffer = self.dims.buffer();

        for col in 0..self.dims.cols {
            let Some(from) = profile.top_slot(col) else {
                continue;
            };
            let container = state.layout().get(from);

            // load cargo stays where it was placed
            if state.loads().iter().any(|task| task.container == container) {
                continue;
            }

            let unload_index = state
                .unloads()
                .iter()
                .position(|task| task.container == container);

            if let Some(index) = unload_index {
                let next = state.derive(|layout, unloads, _| {
                    layout.set(from, ContainerCode::EMPTY);
                    unloads[index].current = buffer;
                });
                out.push(Successor {
                    state: next,
                    transfer: Transfer {
                        kind: TransferKind::Unload,
                        container,
                        from,
                        to: buffer,
                    },
                    cost: profile.transfer_cost(from, buffer),
                });
            }

            for to_col in 0..self.dims.cols {
                if to_col == col {
                    continue;
                }
                let Some(to) = profile.landing_slot(to_col) else {
                    continue;
                };

                let next = state.derive(|layout, unloads, _| {
                    layout.set(from, ContainerCode::EMPTY);
                    layout.set(to, container);
                    if let Some(index) = unload_index {
                        unloads[index].current = to;
                    }
                });
                out.push(Successor {
                    state: next,
                    transfer: Transfer {
                        kind: TransferKind::Relocate,
                        container,
                        from,
                        to,
                    },
                    cost: profile.transfer_cost(from, to),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests;
