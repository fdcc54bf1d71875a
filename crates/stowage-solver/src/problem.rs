//! Request validation and encoding.
//!
//! Every malformed request is rejected here, before the first state is
//! pushed onto the frontier.

use std::collections::HashSet;

use stowage_core::{Deck, DeckDimensions, InputError, LoadRequest, UnloadRequest};

use crate::manifest::{Layout, Manifest};
use crate::state::SearchState;
use crate::task::{LoadTask, UnloadTask};

/// A validated request: the interned containers and the initial state.
#[derive(Debug, Clone)]
pub struct Problem {
    manifest: Manifest,
    initial: SearchState,
}

impl Problem {
    /// Validates and encodes a planning request.
    ///
    /// `expected` pins the deck dimensions when the planner is configured
    /// for a specific ship.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn prepare(
        deck: &Deck,
        unloads: &[UnloadRequest],
        loads: &[LoadRequest],
        expected: Option<DeckDimensions>,
    ) -> Result<Self, InputError> {
        let dims = deck.dimensions();
        if dims.rows == 0 || dims.cols == 0 {
            return Err(InputError::InvalidDimensions(dims));
        }
        if let Some(expected) = expected {
            if expected != dims {
                return Err(InputError::DimensionMismatch {
                    expected,
                    found: dims,
                });
            }
        }
        let floating = deck.floating_slots().into_iter().find_map(|slot| {
            deck.container_at(slot)
                .map(|container| (slot, container.id().clone()))
        });
        if let Some((slot, id)) = floating {
            return Err(InputError::FloatingContainer { id, slot });
        }

        let count = deck.containers().count() + loads.len();
        if count > Manifest::MAX_CONTAINERS {
            return Err(InputError::TooManyContainers {
                count,
                max: Manifest::MAX_CONTAINERS,
            });
        }

        let mut manifest = Manifest::new();
        let mut layout = Layout::empty(dims);
        for (slot, container) in deck.containers() {
            let code = manifest
                .intern(container.clone())
                .ok_or_else(|| InputError::DuplicateContainer(container.id().clone()))?;
            layout.set(slot, code);
        }

        let unload_tasks = encode_unloads(deck, unloads, &manifest)?;
        let load_tasks = encode_loads(dims, loads, &mut manifest)?;

        Ok(Self {
            manifest,
            initial: SearchState::new(layout, unload_tasks, load_tasks),
        })
    }

    #[inline]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    #[inline]
    pub fn initial(&self) -> &SearchState {
        &self.initial
    }

    #[inline]
    pub fn dimensions(&self) -> DeckDimensions {
        self.initial.layout().dimensions()
    }
}

fn encode_unloads(
    deck: &Deck,
    unloads: &[UnloadRequest],
    manifest: &Manifest,
) -> Result<Vec<UnloadTask>, InputError> {
    let dims = deck.dimensions();
    let mut seen = HashSet::with_capacity(unloads.len());
    let mut tasks = Vec::with_capacity(unloads.len());

    for request in unloads {
        if !dims.contains(request.location) {
            return Err(InputError::UnloadOutOfBounds {
                id: request.container.clone(),
                location: request.location,
            });
        }
        let held = deck
            .container_at(request.location)
            .is_some_and(|container| container.id() == &request.container);
        if !held {
            return Err(InputError::UnloadLocationMismatch {
                id: request.container.clone(),
                location: request.location,
            });
        }
        if !seen.insert(&request.container) {
            return Err(InputError::DuplicateContainer(request.container.clone()));
        }

        let code = manifest
            .code_of(&request.container)
            .ok_or_else(|| InputError::UnloadLocationMismatch {
                id: request.container.clone(),
                location: request.location,
            })?;
        tasks.push(UnloadTask::new(code, request.location));
    }
    Ok(tasks)
}

fn encode_loads(
    dims: DeckDimensions,
    loads: &[LoadRequest],
    manifest: &mut Manifest,
) -> Result<Vec<LoadTask>, InputError> {
    let buffer = dims.buffer();
    let mut destinations = HashSet::with_capacity(loads.len());
    let mut tasks = Vec::with_capacity(loads.len());

    for request in loads {
        let id = request.id();
        if request.destination == buffer {
            return Err(InputError::LoadTargetsBuffer {
                id: id.clone(),
                destination: request.destination,
            });
        }
        if !dims.contains(request.destination) {
            return Err(InputError::LoadOutOfBounds {
                id: id.clone(),
                destination: request.destination,
            });
        }
        if !destinations.insert(request.destination) {
            return Err(InputError::DuplicateDestination(request.destination));
        }

        let code = manifest
            .intern(request.container.clone())
            .ok_or_else(|| InputError::DuplicateContainer(id.clone()))?;
        tasks.push(LoadTask::new(code, request.destination, buffer));
    }
    Ok(tasks)
}

#[cfg(test)]
mod tests;
