//! Content factory for building a ready engine from data files.

use std::path::{Path, PathBuf};

use game_core::{GenerationConfig, PcgRng, PlacementEngine, RngSource};

use crate::catalog::TileCatalog;
use crate::loaders::{ConfigLoader, LayoutLoader, LayoutSpec, LoadResult, TileLoader};

/// Content factory that loads house content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── generation.toml
/// ├── tiles.ron
/// └── layout.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "generation.toml";
    pub const TILES_FILE: &'static str = "tiles.ron";
    pub const LAYOUT_FILE: &'static str = "layout.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load generation parameters from `generation.toml`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_config(&self) -> LoadResult<GenerationConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("{} not found; using default generation config", path.display());
            return Ok(GenerationConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the tile catalog from `tiles.ron`.
    pub fn load_catalog(&self) -> LoadResult<TileCatalog> {
        TileLoader::load(&self.data_dir.join(Self::TILES_FILE))
    }

    /// Load the anchor layout from `layout.ron`.
    pub fn load_layout(&self) -> LoadResult<LayoutSpec> {
        LayoutLoader::load(&self.data_dir.join(Self::LAYOUT_FILE))
    }

    /// Builds an initialized engine seeded with a PCG source.
    pub fn build_engine(&self, seed: u64) -> LoadResult<PlacementEngine> {
        self.build_engine_with(PcgRng::new(seed))
    }

    /// Builds an initialized engine around a caller-supplied random source.
    pub fn build_engine_with<R: RngSource>(&self, rng: R) -> LoadResult<PlacementEngine<R>> {
        let config = self.load_config()?;
        let catalog = self.load_catalog()?;
        let layout = self.load_layout()?;

        let anchors = layout.anchors(&catalog, &config)?;
        let deck = layout.deck(&catalog)?;
        tracing::info!(
            "loaded {} tiles, {} anchors from {}",
            catalog.len(),
            anchors.len(),
            self.data_dir.display()
        );

        let mut engine = PlacementEngine::new(config, rng);
        engine.initialize(anchors, deck)?;
        Ok(engine)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
