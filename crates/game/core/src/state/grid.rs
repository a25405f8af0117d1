use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::{Placement, PlacementError, Position};

/// Sparse map of placed tiles keyed by grid position.
///
/// Keys are unique: [`GridStore::insert`] refuses occupied positions, and
/// nothing removes an entry short of [`GridStore::clear`]. The ordered map
/// keeps iteration stable so snapshots and reports are reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GridStore {
    cells: BTreeMap<Position, Placement>,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: &Position) -> Option<&Placement> {
        self.cells.get(position)
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.cells.contains_key(position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Placement)> + '_ {
        self.cells.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.keys().copied()
    }

    /// Writes `placement` at `position` unless the position is occupied.
    pub fn insert(
        &mut self,
        position: Position,
        placement: Placement,
    ) -> Result<(), PlacementError> {
        match self.cells.entry(position) {
            Entry::Occupied(entry) => Err(PlacementError::Occupied {
                position,
                occupant: entry.get().tile().name.clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(placement);
                Ok(())
            }
        }
    }

    /// True if any placed neighbour of `position` has an open door facing it.
    pub fn is_reachable(&self, position: Position) -> bool {
        position.neighbors().any(|(direction, neighbor)| {
            self.cells
                .get(&neighbor)
                .is_some_and(|placement| placement.has_door(direction.opposite()))
        })
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}
