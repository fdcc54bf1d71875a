//! Reference containers and deck.
//!
//! # Example
//!
//! ```
//! use stowage_test::containers::{container, empty_deck};
//!
//! let a = container("A");
//! assert_eq!(a.weight(), 120);
//! assert_eq!(empty_deck().rows(), 8);
//! ```

use stowage_core::{Container, Deck, DeckDimensions};

/// Names and weights of the reference containers.
pub const REFERENCE_CONTAINERS: [(&str, u32); 6] = [
    ("A", 120),
    ("B", 200),
    ("C", 400),
    ("D", 500),
    ("E", 2200),
    ("F", 300),
];

/// The 8 × 12 deck used throughout the tests.
pub fn reference_dims() -> DeckDimensions {
    DeckDimensions::new(8, 12)
}

/// An empty reference deck.
pub fn empty_deck() -> Deck {
    Deck::empty(reference_dims())
}

/// Returns reference container `name`; unknown names get weight 100.
pub fn container(name: &str) -> Container {
    let weight = REFERENCE_CONTAINERS
        .iter()
        .find(|(known, _)| *known == name)
        .map_or(100, |&(_, weight)| weight);
    Container::new(name, weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_weights() {
        assert_eq!(container("E").weight(), 2200);
        assert_eq!(container("Z").weight(), 100);
    }

    #[test]
    fn test_empty_deck() {
        let deck = empty_deck();
        assert_eq!(deck.dimensions(), DeckDimensions::new(8, 12));
        assert_eq!(deck.containers().count(), 0);
    }
}
