//! Unload and load requests supplied by the caller.

use crate::{Container, ContainerId, Slot};

/// Remove the container `container` currently stored at `location`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnloadRequest {
    pub container: ContainerId,
    pub location: Slot,
}

impl UnloadRequest {
    pub fn new(container: impl Into<ContainerId>, location: impl Into<Slot>) -> Self {
        UnloadRequest {
            container: container.into(),
            location: location.into(),
        }
    }
}

/// Bring `container` aboard and place it at `destination`.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, LoadRequest, Slot};
///
/// let request = LoadRequest::new(Container::new("F", 300), (0, 11));
/// assert_eq!(request.destination, Slot::new(0, 11));
/// assert_eq!(request.id().as_str(), "F");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRequest {
    pub container: Container,
    pub destination: Slot,
}

impl LoadRequest {
    pub fn new(container: Container, destination: impl Into<Slot>) -> Self {
        LoadRequest {
            container,
            destination: destination.into(),
        }
    }

    /// Identity of the container to load.
    #[inline]
    pub fn id(&self) -> &ContainerId {
        self.container.id()
    }
}
