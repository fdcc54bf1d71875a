//! Stowage Core - data model for crane move planning
//!
//! This crate provides the plain data the planner works on:
//! - Slot coordinates and deck dimensions, including the reserved buffer
//! - Container identity and deck cells
//! - The deck grid and its weight readout
//! - Unload / load requests and the typed planning errors

pub mod container;
pub mod deck;
pub mod error;
pub mod request;
pub mod slot;

pub use container::{Cell, Container, ContainerId};
pub use deck::{Deck, DeckWeights};
pub use error::{InputError, PlanError, SearchExhaustion};
pub use request::{LoadRequest, UnloadRequest};
pub use slot::{DeckDimensions, Slot};
