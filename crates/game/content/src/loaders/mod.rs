//! Content loaders for reading house data from files.
//!
//! Tile catalogs and anchor layouts are RON, generation parameters are TOML.
//! Every loader deserializes straight into game-core types.

pub mod config;
pub mod factory;
pub mod layout;
pub mod tiles;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use layout::{AnchorSpec, LayoutLoader, LayoutSpec};
pub use tiles::TileLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
