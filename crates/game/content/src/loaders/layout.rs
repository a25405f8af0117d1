//! Anchor layout loader.
//!
//! A layout names the tile pinned to each anchor slot and, optionally, the
//! exact deck to draw from. Without a deck list every catalog tile is drawn
//! once.

use std::path::Path;

use game_core::{Anchor, AnchorSlot, Deck, GenerationConfig, Position, TileId, TileOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One anchor entry as written in `layout.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSpec {
    pub slot: AnchorSlot,
    pub tile: TileId,
    /// Overrides the slot's default position.
    #[serde(default)]
    pub position: Option<Position>,
}

impl AnchorSpec {
    /// Explicit position, or the slot's place under `config`.
    pub fn position(&self, config: &GenerationConfig) -> Position {
        self.position.unwrap_or_else(|| self.slot.position_in(config))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub anchors: Vec<AnchorSpec>,
    /// Tile ids to draw from; repeat an id for multiple copies.
    #[serde(default)]
    pub deck: Option<Vec<TileId>>,
}

impl LayoutSpec {
    /// Resolves anchor positions under `config` and tiles against `oracle`.
    ///
    /// Unknown ids become anchors without a tile; the engine skips those
    /// when seeding. Two anchors resolving to the same cell is an error.
    pub fn anchors(
        &self,
        oracle: &dyn TileOracle,
        config: &GenerationConfig,
    ) -> LoadResult<Vec<Anchor>> {
        let mut anchors: Vec<Anchor> = Vec::with_capacity(self.anchors.len());
        for spec in &self.anchors {
            let position = spec.position(config);
            if let Some(other) = anchors.iter().find(|anchor| anchor.position == position) {
                anyhow::bail!(
                    "anchor {} shares position {} with anchor {}",
                    spec.slot,
                    position,
                    other.slot
                );
            }

            let tile = oracle.tile(&spec.tile);
            if tile.is_none() {
                tracing::warn!(
                    "anchor {} references unknown tile '{}'",
                    spec.slot,
                    spec.tile
                );
            }
            anchors.push(Anchor::new(spec.slot, position, tile));
        }
        Ok(anchors)
    }

    /// Builds the deck, failing on ids the catalog does not know.
    pub fn deck(&self, oracle: &dyn TileOracle) -> LoadResult<Deck> {
        let Some(ids) = &self.deck else {
            return Ok(oracle.all_tiles().into_iter().collect());
        };

        ids.iter()
            .map(|id| {
                oracle
                    .tile(id)
                    .ok_or_else(|| anyhow::anyhow!("deck references unknown tile '{}'", id))
            })
            .collect()
    }
}

/// Loader for anchor layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    pub fn load(path: &Path) -> LoadResult<LayoutSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LayoutSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e))
    }
}
