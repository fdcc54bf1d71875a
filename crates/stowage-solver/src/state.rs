//! Search states and explored-set keys.

use stowage_config::ExploredKeying;

use crate::manifest::Layout;
use crate::task::{LoadTask, UnloadTask};

/// A deck arrangement together with the progress of every task.
///
/// States are never mutated once built; successors are produced with
/// [`SearchState::derive`], which works on a private copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchState {
    layout: Layout,
    unloads: Box<[UnloadTask]>,
    loads: Box<[LoadTask]>,
}

impl SearchState {
    pub fn new(layout: Layout, unloads: Vec<UnloadTask>, loads: Vec<LoadTask>) -> Self {
        Self {
            layout,
            unloads: unloads.into_boxed_slice(),
            loads: loads.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn unloads(&self) -> &[UnloadTask] {
        &self.unloads
    }

    #[inline]
    pub fn loads(&self) -> &[LoadTask] {
        &self.loads
    }

    /// Copies this state and applies `edit` to the copy.
    pub fn derive<F>(&self, edit: F) -> Self
    where
        F: FnOnce(&mut Layout, &mut [UnloadTask], &mut [LoadTask]),
    {
        let mut next = self.clone();
        edit(&mut next.layout, &mut next.unloads, &mut next.loads);
        next
    }

    /// Returns the explored-set key for this state.
    pub fn key(&self, keying: ExploredKeying) -> SearchKey {
        match keying {
            ExploredKeying::DeckOnly => SearchKey::Deck(self.layout.clone()),
            ExploredKeying::DeckAndTasks => SearchKey::DeckAndTasks(self.clone()),
        }
    }
}

/// Identity of a node in the explored set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchKey {
    Deck(Layout),
    DeckAndTasks(SearchState),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use stowage_core::{Container, DeckDimensions, Slot};

    #[test]
    fn test_derive_leaves_parent_untouched() {
        let dims = DeckDimensions::new(2, 2);
        let mut manifest = Manifest::new();
        let a = manifest.intern(Container::new("A", 1)).unwrap();
        let mut layout = Layout::empty(dims);
        layout.set(Slot::new(0, 0), a);
        let parent = SearchState::new(layout, vec![UnloadTask::new(a, Slot::new(0, 0))], vec![]);

        let child = parent.derive(|layout, unloads, _| {
            layout.set(Slot::new(0, 0), crate::manifest::ContainerCode::EMPTY);
            unloads[0].current = dims.buffer();
        });

        assert_eq!(parent.layout().get(Slot::new(0, 0)), a);
        assert_eq!(parent.unloads()[0].current, Slot::new(0, 0));
        assert!(child.layout().get(Slot::new(0, 0)).is_empty());
        assert_eq!(child.unloads()[0].current, dims.buffer());
    }

    #[test]
    fn test_keys_by_keying() {
        let dims = DeckDimensions::new(2, 2);
        let layout = Layout::empty(dims);
        let mut manifest = Manifest::new();
        let f = manifest.intern(Container::new("F", 1)).unwrap();
        let placed = SearchState::new(
            layout.clone(),
            vec![],
            vec![LoadTask::new(f, Slot::new(0, 1), dims.buffer())],
        );
        let other = placed.derive(|_, _, loads| loads[0].current = Slot::new(0, 1));

        assert_eq!(
            placed.key(ExploredKeying::DeckOnly),
            other.key(ExploredKeying::DeckOnly)
        );
        assert_ne!(
            placed.key(ExploredKeying::DeckAndTasks),
            other.key(ExploredKeying::DeckAndTasks)
        );
    }
}
