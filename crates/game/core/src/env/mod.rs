//! Read-only collaborators of the placement engine.
//!
//! The tile catalog is exposed through [`TileOracle`] and randomness through
//! [`RngSource`]. Both are handed to the engine by its owner; nothing here
//! holds global state.
mod rng;
mod tiles;

pub use rng::{PcgRng, RngSource, shuffle};
pub use tiles::{FloorLayer, FloorLayers, TileDefinition, TileId, TileOracle, TileRef};
