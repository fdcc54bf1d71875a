//! Shared test fixtures for stowage crates.
//!
//! This crate provides plain data builders for tests. It depends on
//! `stowage-core` only, so every other crate can pull it in as a
//! dev-dependency without cycles.
//!
//! - [`containers`] - the reference containers A–F and deck dimensions
//! - [`scenario`] - complete planning requests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! stowage-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use stowage_test::scenario::Scenario;
//! use stowage_test::containers::{container, reference_dims};
//! ```

pub mod containers;
pub mod scenario;

pub use containers::{container, empty_deck, reference_dims};
pub use scenario::Scenario;
