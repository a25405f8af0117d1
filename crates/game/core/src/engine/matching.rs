//! First-fit tile matching.
//!
//! The deck is shuffled once per query and scanned in that order; for each
//! tile allowed on the target floor the four rotations are tried in ascending
//! order. The first combination whose doors agree with every occupied
//! neighbour wins. There is no lookahead and no backtracking, so an early pick
//! can leave later tiles without a home. That is an accepted outcome: the
//! caller decides what an incomplete map means.

use crate::env::{FloorLayer, RngSource, TileRef};
use crate::state::{Deck, DoorMask, GridStore, Placement, Position};

/// Tile and rotation chosen for a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub tile: TileRef,
    pub rotation: u8,
}

impl Match {
    pub fn rotated_doors(&self) -> DoorMask {
        self.tile.doors.rotate(self.rotation)
    }
}

/// Checks `rotated_doors` at `position` against every occupied neighbour.
///
/// An edge is valid only when both sides agree: both open or both sealed.
/// Empty neighbours impose no constraint.
pub fn is_placement_valid(position: Position, rotated_doors: DoorMask, grid: &GridStore) -> bool {
    position.neighbors().all(|(direction, neighbor)| match grid.get(&neighbor) {
        Some(placement) => {
            rotated_doors.has_door(direction) == placement.has_door(direction.opposite())
        }
        None => true,
    })
}

/// Finds the first `(tile, rotation)` in shuffled deck order that fits at
/// `position` on `layer`.
pub fn find_match<R>(
    position: Position,
    layer: FloorLayer,
    deck: &Deck,
    grid: &GridStore,
    rng: &mut R,
) -> Option<Match>
where
    R: RngSource + ?Sized,
{
    deck.shuffled(rng)
        .into_iter()
        .filter(|tile| tile.allows(layer))
        .find_map(|tile| {
            (0..Placement::ROTATIONS)
                .find(|rotation| is_placement_valid(position, tile.doors.rotate(*rotation), grid))
                .map(|rotation| Match { tile, rotation })
        })
}
