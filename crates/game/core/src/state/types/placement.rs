use crate::env::TileRef;

use super::{CardinalDirection, DoorMask};

/// A tile definition bound to a clockwise rotation.
///
/// Owned by the grid entry that holds it; it has no lifecycle of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    tile: TileRef,
    rotation: u8,
}

impl Placement {
    /// Number of distinct quarter-turn rotations.
    pub const ROTATIONS: u8 = 4;

    /// Binds `tile` to `rotation`, normalised into `0..4`.
    pub fn new(tile: TileRef, rotation: u8) -> Self {
        Self {
            tile,
            rotation: rotation % Self::ROTATIONS,
        }
    }

    pub fn tile(&self) -> &TileRef {
        &self.tile
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Door mask after applying the rotation.
    pub fn rotated_doors(&self) -> DoorMask {
        self.tile.doors.rotate(self.rotation)
    }

    pub fn has_door(&self, direction: CardinalDirection) -> bool {
        self.rotated_doors().has_door(direction)
    }
}
