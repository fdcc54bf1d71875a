//! Task progress records.
//!
//! Tasks are small `Copy` values; every successor state owns its own task
//! slices, so progress on one branch can never leak into another.

use stowage_core::Slot;

use crate::manifest::ContainerCode;

/// A container that must leave the ship.
///
/// `current` follows the container through relocations and becomes the
/// buffer once it has been lifted off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnloadTask {
    pub container: ContainerCode,
    pub current: Slot,
}

impl UnloadTask {
    pub fn new(container: ContainerCode, current: Slot) -> Self {
        Self { container, current }
    }

    /// Returns true until the container reaches `buffer`.
    #[inline]
    pub fn is_pending(&self, buffer: Slot) -> bool {
        self.current != buffer
    }
}

/// A container that must be placed at `destination`.
///
/// `current` starts at the buffer and jumps to `destination` on placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTask {
    pub container: ContainerCode,
    pub destination: Slot,
    pub current: Slot,
}

impl LoadTask {
    pub fn new(container: ContainerCode, destination: Slot, buffer: Slot) -> Self {
        Self {
            container,
            destination,
            current: buffer,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.current != self.destination
    }
}
