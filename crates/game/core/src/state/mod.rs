//! Mutable generation state.
//!
//! This module owns the grid store, the frontier and the deck. The placement
//! engine is the only writer; presentation code reads the grid through the
//! engine's query surface.
mod deck;
mod error;
mod frontier;
mod grid;
pub mod types;

pub use deck::Deck;
pub use error::PlacementError;
pub use frontier::Frontier;
pub use grid::GridStore;
pub use types::{CardinalDirection, DoorMask, Placement, Position};
