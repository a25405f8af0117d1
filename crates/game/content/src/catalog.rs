//! In-memory tile catalog.
use std::collections::HashMap;

use game_core::{TileDefinition, TileId, TileOracle, TileRef};

/// [`TileOracle`] backed by an id index over definitions kept in load order.
#[derive(Clone, Debug, Default)]
pub struct TileCatalog {
    tiles: Vec<TileRef>,
    index: HashMap<TileId, usize>,
}

impl TileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, replacing any earlier one with the same id.
    pub fn add_definition(&mut self, definition: TileDefinition) -> TileRef {
        let tile = definition.into_ref();
        match self.index.get(&tile.id) {
            Some(&slot) => {
                tracing::warn!("tile '{}' defined twice; keeping the later one", tile.id);
                self.tiles[slot] = tile.clone();
            }
            None => {
                self.index.insert(tile.id.clone(), self.tiles.len());
                self.tiles.push(tile.clone());
            }
        }
        tile
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileRef> + '_ {
        self.tiles.iter()
    }
}

impl FromIterator<TileDefinition> for TileCatalog {
    fn from_iter<I: IntoIterator<Item = TileDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.add_definition(definition);
        }
        catalog
    }
}

impl TileOracle for TileCatalog {
    fn tile(&self, id: &TileId) -> Option<TileRef> {
        self.index.get(id).map(|&slot| self.tiles[slot].clone())
    }

    fn all_tiles(&self) -> Vec<TileRef> {
        self.tiles.clone()
    }
}

#[cfg(test)]
mod tests {
    use game_core::{DoorMask, FloorLayers};

    use super::*;

    #[test]
    fn later_definition_wins_in_place() {
        let catalog: TileCatalog = [
            TileDefinition::new("foyer", "Foyer", DoorMask::all(), FloorLayers::GROUND),
            TileDefinition::new("vault", "Vault", DoorMask::NORTH, FloorLayers::BASEMENT),
            TileDefinition::new("foyer", "Grand Foyer", DoorMask::all(), FloorLayers::GROUND),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all_tiles()[0].name, "Grand Foyer");
        assert!(catalog.contains(&TileId::from("vault")));
        assert!(catalog.tile(&TileId::from("ballroom")).is_none());
    }
}
