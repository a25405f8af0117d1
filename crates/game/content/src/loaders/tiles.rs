//! Tile catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::TileDefinition;
use serde::{Deserialize, Serialize};

use crate::catalog::TileCatalog;
use crate::loaders::{LoadResult, read_file};

/// Tile catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileCatalogRon {
    pub tiles: Vec<TileDefinition>,
}

/// Loader for tile catalogs from RON files.
pub struct TileLoader;

impl TileLoader {
    /// Load a tile catalog from a RON file.
    ///
    /// Duplicate ids are rejected.
    pub fn load(path: &Path) -> LoadResult<TileCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TileCatalog> {
        let data: TileCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tile catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for tile in &data.tiles {
            if !seen.insert(tile.id.clone()) {
                anyhow::bail!("duplicate tile id '{}'", tile.id);
            }
            if tile.layers.is_empty() {
                tracing::warn!("tile '{}' allows no floor and will never be drawn", tile.id);
            }
        }

        Ok(data.tiles.into_iter().collect())
    }
}
