//! Plain value types shared by the grid, frontier and engine.
mod common;
mod door;
mod placement;

pub use common::Position;
pub use door::{CardinalDirection, DoorMask};
pub use placement::Placement;
