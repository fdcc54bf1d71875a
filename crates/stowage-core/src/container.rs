//! Container identity and deck cells.

use std::borrow::Borrow;
use std::fmt;

/// Canonical container identity.
///
/// Equality, hashing and ordering all go through the name; the weight of a
/// [`Container`] never participates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates an identity from a name.
    pub fn new(name: impl Into<String>) -> Self {
        ContainerId(name.into())
    }

    /// Returns the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerId {
    fn from(name: &str) -> Self {
        ContainerId::new(name)
    }
}

impl From<String> for ContainerId {
    fn from(name: String) -> Self {
        ContainerId(name)
    }
}

impl Borrow<str> for ContainerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A container with its identity and weight.
///
/// The weight is carried through planning untouched.
///
/// # Examples
///
/// ```
/// use stowage_core::Container;
///
/// let a = Container::new("A", 120);
/// assert_eq!(a.id().as_str(), "A");
/// assert_eq!(a.weight(), 120);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    id: ContainerId,
    weight: u32,
}

impl Container {
    /// Creates a container.
    pub fn new(id: impl Into<ContainerId>, weight: u32) -> Self {
        Container {
            id: id.into(),
            weight,
        }
    }

    /// Returns the identity.
    #[inline]
    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    /// Returns the weight.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// One deck cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Container),
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the container in this cell, if any.
    #[inline]
    pub fn container(&self) -> Option<&Container> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(container) => Some(container),
        }
    }

    /// Returns the identity of the container in this cell, if any.
    #[inline]
    pub fn id(&self) -> Option<&ContainerId> {
        self.container().map(Container::id)
    }
}

impl From<Container> for Cell {
    fn from(container: Container) -> Self {
        Cell::Occupied(container)
    }
}

impl From<Option<Container>> for Cell {
    fn from(container: Option<Container>) -> Self {
        container.map_or(Cell::Empty, Cell::Occupied)
    }
}
