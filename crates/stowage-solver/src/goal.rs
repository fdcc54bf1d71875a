//! Goal test.
//!
//! A state is a goal when no unload container is left anywhere on the deck
//! and every load destination holds exactly its container. Task progress
//! records are not consulted; the deck alone decides.

use stowage_core::{Deck, LoadRequest, UnloadRequest};

use crate::manifest::Layout;
use crate::state::SearchState;
use crate::task::{LoadTask, UnloadTask};

/// Returns true if `state` satisfies every unload and load task.
pub fn is_goal(state: &SearchState) -> bool {
    unloads_satisfied(state.layout(), state.unloads())
        && loads_satisfied(state.layout(), state.loads())
}

pub fn unloads_satisfied(layout: &Layout, unloads: &[UnloadTask]) -> bool {
    unloads.iter().all(|task| !layout.contains(task.container))
}

pub fn loads_satisfied(layout: &Layout, loads: &[LoadTask]) -> bool {
    loads
        .iter()
        .all(|task| layout.get(task.destination) == task.container)
}

/// The goal test on a full deck snapshot against the caller's requests.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, Deck, DeckDimensions, LoadRequest, Slot, UnloadRequest};
/// use stowage_solver::goal::deck_satisfies;
///
/// let dims = DeckDimensions::new(8, 12);
/// let deck = Deck::empty(dims).with_container(Slot::new(0, 11), Container::new("F", 300));
///
/// let unloads = [UnloadRequest::new("A", (0, 0))];
/// let loads = [LoadRequest::new(Container::new("F", 300), (0, 11))];
/// assert!(deck_satisfies(&deck, &unloads, &loads));
/// assert!(!deck_satisfies(&Deck::empty(dims), &unloads, &loads));
/// ```
pub fn deck_satisfies(deck: &Deck, unloads: &[UnloadRequest], loads: &[LoadRequest]) -> bool {
    let unloaded = unloads
        .iter()
        .all(|request| deck.locate(&request.container).is_none());
    let loaded = loads.iter().all(|request| {
        deck.get(request.destination)
            .and_then(|cell| cell.id())
            .is_some_and(|id| id == request.id())
    });
    unloaded && loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use stowage_core::{Container, DeckDimensions, Slot};

    #[test]
    fn test_unload_goal_requires_absence() {
        let dims = DeckDimensions::new(8, 12);
        let mut manifest = Manifest::new();
        let a = manifest.intern(Container::new("A", 120)).unwrap();
        let mut layout = Layout::empty(dims);
        layout.set(Slot::new(0, 4), a);

        // still aboard
        let tasks = [UnloadTask::new(a, Slot::new(0, 4))];
        assert!(!unloads_satisfied(&layout, &tasks));

        layout.set(Slot::new(0, 4), crate::manifest::ContainerCode::EMPTY);
        assert!(unloads_satisfied(&layout, &tasks));
    }

    #[test]
    fn test_load_goal_requires_exact_container() {
        let dims = DeckDimensions::new(8, 12);
        let mut manifest = Manifest::new();
        let f = manifest.intern(Container::new("F", 300)).unwrap();
        let g = manifest.intern(Container::new("G", 300)).unwrap();
        let task = LoadTask::new(f, Slot::new(0, 11), dims.buffer());

        let mut layout = Layout::empty(dims);
        layout.set(Slot::new(0, 11), g);
        assert!(!loads_satisfied(&layout, &[task]));

        layout.set(Slot::new(0, 11), f);
        assert!(loads_satisfied(&layout, &[task]));
    }

    #[test]
    fn test_no_tasks_is_goal() {
        let state = SearchState::new(Layout::empty(DeckDimensions::new(2, 2)), vec![], vec![]);
        assert!(is_goal(&state));
    }
}
