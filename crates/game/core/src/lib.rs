//! Deterministic floor-plan generation for a haunted house.
//!
//! `game-core` owns the rules for laying square room tiles on an unbounded
//! grid: door masks and their rotation, floor classification, first-fit
//! matching, and the [`engine::PlacementEngine`] that fills the map eagerly
//! or one room at a time. Content loading and tooling live in sibling crates
//! and depend on the types re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::{GenerationConfig, GridMetrics, RetryScope};
pub use engine::{
    Anchor, AnchorSlot, ConnectionError, ConnectionKind, ConnectionReport, EngineError,
    FloorClassifier, GenerationOutcome, GenerationReport, Match, PlacementEngine, PlacementEvent,
    PlacementListener, PlacementLog, PlacementSource, check_connection, find_match,
    is_placement_valid, validate_connections,
};
pub use env::{
    FloorLayer, FloorLayers, PcgRng, RngSource, TileDefinition, TileId, TileOracle, TileRef,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    CardinalDirection, Deck, DoorMask, Frontier, GridStore, Placement, PlacementError, Position,
};
