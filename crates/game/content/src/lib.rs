//! Data-driven house content and loaders.
//!
//! This crate houses the bundled tile catalog and anchor layout and provides
//! loaders for RON/TOML data files:
//! - Tile catalogs (RON)
//! - Anchor layouts and deck lists (RON)
//! - Generation parameters (TOML)
//!
//! Content is consumed through [`game_core::TileOracle`] and never appears in
//! engine state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::TileCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    AnchorSpec, ConfigLoader, ContentFactory, LayoutLoader, LayoutSpec, LoadResult, TileLoader,
};
