//! Tile placement engine.
//!
//! The [`PlacementEngine`] is the single writer of the grid, the frontier and
//! the deck. It fills the map either eagerly through [`PlacementEngine::generate`]
//! or cell by cell through [`PlacementEngine::discover`]; both paths share the
//! same matching and placement step. Every successful write is reported to the
//! registered [`PlacementListener`]s.

mod anchor;
mod errors;
mod floor;
mod hook;
mod matching;
mod report;
mod retry;
mod validation;

pub use anchor::{Anchor, AnchorSlot};
pub use errors::EngineError;
pub use floor::FloorClassifier;
pub use hook::{PlacementEvent, PlacementListener, PlacementLog, PlacementSource};
pub use matching::{Match, find_match, is_placement_valid};
pub use report::{GenerationOutcome, GenerationReport};
pub use validation::{
    ConnectionError, ConnectionKind, ConnectionReport, Mismatch, check_connection,
    validate_connections,
};

use retry::RetryTracker;

use crate::config::GenerationConfig;
use crate::env::{FloorLayer, PcgRng, RngSource, TileRef};
use crate::state::{Deck, Frontier, GridStore, Placement, PlacementError, Position};

/// Owns one house map and the randomness used to build it.
///
/// All mutators take `&mut self`; callers serialize access.
pub struct PlacementEngine<R: RngSource = PcgRng> {
    config: GenerationConfig,
    classifier: FloorClassifier,
    rng: R,
    grid: GridStore,
    frontier: Frontier,
    deck: Deck,
    anchors: Vec<Anchor>,
    retries: RetryTracker,
    listeners: Vec<Box<dyn PlacementListener>>,
    anchors_placed: usize,
    initialized: bool,
    anchors_seeded: bool,
    generated: bool,
}

impl PlacementEngine<PcgRng> {
    /// Engine driven by a PCG source seeded with `seed`.
    pub fn with_seed(config: GenerationConfig, seed: u64) -> Self {
        Self::new(config, PcgRng::new(seed))
    }
}

impl<R: RngSource> PlacementEngine<R> {
    pub fn new(config: GenerationConfig, rng: R) -> Self {
        let classifier = FloorClassifier::from_config(&config);
        let retries = RetryTracker::new(config.retry_scope, config.retry_attempts);
        Self {
            config,
            classifier,
            rng,
            grid: GridStore::new(),
            frontier: Frontier::new(),
            deck: Deck::default(),
            anchors: Vec::new(),
            retries,
            listeners: Vec::new(),
            anchors_placed: 0,
            initialized: false,
            anchors_seeded: false,
            generated: false,
        }
    }

    /// Stores the anchor layout and the deck of tiles to draw from.
    ///
    /// Nothing is placed yet: eager mode seeds anchors as its first step,
    /// lazy mode calls [`seed_anchors`](Self::seed_anchors) explicitly.
    pub fn initialize(&mut self, anchors: Vec<Anchor>, deck: Deck) -> Result<(), EngineError> {
        if self.initialized {
            tracing::warn!("initialize called twice without reset; ignoring");
            return Err(EngineError::AlreadyInitialized);
        }

        tracing::debug!(
            "initialized with {} anchors and {} deck tiles",
            anchors.len(),
            deck.len()
        );
        self.anchors = anchors;
        self.deck = deck;
        self.initialized = true;
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Box<dyn PlacementListener>) {
        self.listeners.push(listener);
    }

    /// Places every anchor with a resolved tile at rotation 0.
    ///
    /// One deck instance of each seeded anchor tile is consumed. Anchors
    /// without a tile are logged and skipped. Only the first call does
    /// anything; returns the number of anchors placed by this call.
    pub fn seed_anchors(&mut self) -> usize {
        if self.anchors_seeded {
            return 0;
        }
        self.anchors_seeded = true;

        let anchors = self.anchors.clone();
        let mut placed = 0;
        for anchor in anchors {
            let Some(tile) = anchor.tile else {
                tracing::warn!(
                    "anchor {} at {} has no tile definition; skipping",
                    anchor.slot,
                    anchor.position
                );
                continue;
            };

            match self.place_from(anchor.position, tile.clone(), 0, PlacementSource::Anchor) {
                Ok(()) => {
                    if self.deck.take(&tile.id).is_none() {
                        tracing::debug!("anchor tile '{}' was not in the deck", tile.id);
                    }
                    tracing::debug!(
                        "seeded {} with '{}' at {}",
                        anchor.slot,
                        tile.name,
                        anchor.position
                    );
                    placed += 1;
                }
                Err(error) => {
                    tracing::warn!("could not seed anchor {}: {}", anchor.slot, error);
                }
            }
        }

        self.anchors_placed += placed;
        placed
    }

    /// Eagerly fills the map until the deck or frontier runs out or the
    /// iteration cap is hit. One-shot until [`reset`](Self::reset).
    pub fn generate(&mut self) -> Result<GenerationReport, EngineError> {
        if self.generated {
            tracing::warn!("map already generated; call reset() to regenerate");
            return Err(EngineError::AlreadyGenerated);
        }
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        tracing::info!(
            "generating map: {} anchors, {} deck tiles",
            self.anchors.len(),
            self.deck.len()
        );
        self.seed_anchors();

        let mut iterations = 0;
        let mut tiles_placed = 0;
        let mut positions_retired = 0;

        while !self.deck.is_empty() && iterations < self.config.max_iterations {
            let Some(position) = self.frontier.sample(&mut self.rng) else {
                break;
            };
            iterations += 1;

            let layer = self.classifier.classify(position);
            match find_match(position, layer, &self.deck, &self.grid, &mut self.rng) {
                Some(found) => {
                    let committed = self.commit(position, found, PlacementSource::Generated);
                    debug_assert!(committed.is_ok(), "frontier held occupied {position}");
                    self.retries.record_success(position);
                    tiles_placed += 1;
                }
                None => {
                    if self.retries.record_failure(position) {
                        tracing::trace!(
                            "retiring {} after {} failed attempts",
                            position,
                            self.config.retry_attempts
                        );
                        self.frontier.remove(&position);
                        positions_retired += 1;
                    } else {
                        tracing::trace!(
                            "no {} tile fits at {} (failures: {})",
                            layer,
                            position,
                            self.retries.failures(position)
                        );
                    }
                }
            }
        }

        let outcome = if self.deck.is_empty() {
            GenerationOutcome::Complete
        } else if self.frontier.is_empty() {
            GenerationOutcome::Stranded
        } else {
            GenerationOutcome::IterationCap
        };

        let report = GenerationReport {
            outcome,
            iterations,
            anchors_placed: self.anchors_placed,
            tiles_placed,
            positions_retired,
            remaining: self.deck.len(),
            stranded: self.deck.names(),
        };

        if !report.stranded.is_empty() {
            tracing::warn!(
                "{} tiles could not be placed: {}",
                report.stranded.len(),
                report.stranded.join(", ")
            );
        }
        tracing::info!("generation finished: {}", report);

        self.generated = true;
        Ok(report)
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Tries to fill exactly `position` with a matching tile.
    ///
    /// Returns `true` if the position is occupied afterwards. A failed
    /// attempt leaves the grid, frontier and deck untouched.
    pub fn discover(&mut self, position: Position) -> bool {
        if self.grid.contains(&position) {
            return true;
        }

        let layer = self.classifier.classify(position);
        match find_match(position, layer, &self.deck, &self.grid, &mut self.rng) {
            Some(found) => {
                let committed = self.commit(position, found, PlacementSource::Discovered);
                debug_assert!(committed.is_ok(), "discover matched occupied {position}");
                true
            }
            None => {
                tracing::warn!("no {} tile fits at {}", layer, position);
                false
            }
        }
    }

    /// Writes `tile` at `position` without matching or touching the deck.
    pub fn place(
        &mut self,
        position: Position,
        tile: TileRef,
        rotation: u8,
    ) -> Result<(), PlacementError> {
        self.place_from(position, tile, rotation, PlacementSource::Manual)
    }

    fn commit(
        &mut self,
        position: Position,
        found: Match,
        source: PlacementSource,
    ) -> Result<(), PlacementError> {
        let id = found.tile.id.clone();
        self.place_from(position, found.tile, found.rotation, source)?;
        self.deck.take(&id);
        Ok(())
    }

    fn place_from(
        &mut self,
        position: Position,
        tile: TileRef,
        rotation: u8,
        source: PlacementSource,
    ) -> Result<(), PlacementError> {
        if rotation >= Placement::ROTATIONS {
            return Err(PlacementError::InvalidRotation { rotation });
        }

        let placement = Placement::new(tile.clone(), rotation);
        let rotated_doors = placement.rotated_doors();
        if let Err(error) = self.grid.insert(position, placement) {
            tracing::debug!("refusing placement: {}", error);
            return Err(error);
        }

        self.frontier.remove(&position);
        for direction in rotated_doors.directions() {
            let neighbor = position.neighbor(direction);
            if !self.grid.contains(&neighbor) {
                self.frontier.insert(neighbor);
            }
        }

        tracing::debug!(
            "placed '{}' at {} (rotation {}, doors {})",
            tile.name,
            position,
            rotation,
            rotated_doors
        );

        let event = PlacementEvent {
            position,
            tile,
            rotation,
            rotated_doors,
            source,
        };
        for listener in &mut self.listeners {
            listener.on_placed(&event);
        }
        Ok(())
    }

    /// Clears all map state and returns to the pre-`initialize` state.
    ///
    /// Listeners stay registered and are told about the reset.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.frontier.clear();
        self.deck.clear();
        self.anchors.clear();
        self.retries.clear();
        self.anchors_placed = 0;
        self.initialized = false;
        self.anchors_seeded = false;
        self.generated = false;

        tracing::info!("placement engine reset");
        for listener in &mut self.listeners {
            listener.on_reset();
        }
    }

    // ===== queries =====

    pub fn has_tile(&self, position: Position) -> bool {
        self.grid.contains(&position)
    }

    pub fn tile_at(&self, position: Position) -> Option<TileRef> {
        self.grid.get(&position).map(|placement| placement.tile().clone())
    }

    pub fn placement_at(&self, position: Position) -> Option<&Placement> {
        self.grid.get(&position)
    }

    pub fn placed_count(&self) -> usize {
        self.grid.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.deck.len()
    }

    pub fn remaining_tiles(&self) -> &Deck {
        &self.deck
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn snapshot_grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn floor_of(&self, position: Position) -> FloorLayer {
        self.classifier.classify(position)
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn validate_connections(&self) -> ConnectionReport {
        validate_connections(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FloorLayers, TileDefinition};
    use crate::state::DoorMask;

    fn tile(id: &str, doors: DoorMask) -> TileRef {
        TileDefinition::new(id, id, doors, FloorLayers::ANY).into_ref()
    }

    fn engine() -> PlacementEngine {
        PlacementEngine::with_seed(GenerationConfig::default(), 7)
    }

    #[test]
    fn generate_requires_initialize() {
        let mut engine = engine();
        assert_eq!(engine.generate(), Err(EngineError::NotInitialized));
        assert!(!engine.is_generated());
    }

    #[test]
    fn second_generate_is_refused_without_changes() {
        let mut engine = engine();
        let foyer = tile("foyer", DoorMask::NORTH);
        engine
            .initialize(
                vec![Anchor::at_default(AnchorSlot::Foyer, foyer)],
                [tile("hall", DoorMask::SOUTH)].into_iter().collect(),
            )
            .unwrap();

        let report = engine.generate().unwrap();
        assert!(report.is_complete());
        let before = engine.snapshot_grid().clone();

        assert_eq!(engine.generate(), Err(EngineError::AlreadyGenerated));
        assert_eq!(engine.snapshot_grid(), &before);
    }

    #[test]
    fn place_updates_frontier_from_open_doors() {
        let mut engine = engine();
        engine
            .place(Position::ORIGIN, tile("cross", DoorMask::all()), 0)
            .unwrap();

        let frontier: Vec<_> = engine.frontier().iter().collect();
        assert_eq!(frontier.len(), 4);
        assert!(!engine.frontier().contains(&Position::ORIGIN));

        engine
            .place(Position::new(0, 1), tile("cap", DoorMask::SOUTH), 0)
            .unwrap();
        assert!(!engine.frontier().contains(&Position::new(0, 1)));
        assert_eq!(engine.frontier().len(), 3);
    }

    #[test]
    fn place_rejects_bad_rotation_and_occupied_cells() {
        let mut engine = engine();
        let room = tile("room", DoorMask::EAST);

        assert_eq!(
            engine.place(Position::ORIGIN, room.clone(), 4),
            Err(PlacementError::InvalidRotation { rotation: 4 })
        );
        assert!(!engine.has_tile(Position::ORIGIN));

        engine.place(Position::ORIGIN, room.clone(), 1).unwrap();
        let err = engine.place(Position::ORIGIN, room, 0).unwrap_err();
        assert!(matches!(err, PlacementError::Occupied { .. }));
        assert_eq!(engine.placement_at(Position::ORIGIN).unwrap().rotation(), 1);
    }

    #[test]
    fn seeding_skips_missing_tiles_and_runs_once() {
        let mut engine = engine();
        let foyer = tile("foyer", DoorMask::EAST | DoorMask::WEST);
        engine
            .initialize(
                vec![
                    Anchor::at_default(AnchorSlot::Foyer, foyer.clone()),
                    Anchor::missing(AnchorSlot::UpperLanding, Position::new(0, 50)),
                ],
                [foyer, tile("spare", DoorMask::all())].into_iter().collect(),
            )
            .unwrap();

        assert_eq!(engine.seed_anchors(), 1);
        assert_eq!(engine.seed_anchors(), 0);
        assert_eq!(engine.placed_count(), 1);
        assert_eq!(engine.remaining_count(), 1);
        assert!(!engine.has_tile(Position::new(0, 50)));
    }

    #[test]
    fn reset_returns_to_uninitialized() {
        let log = PlacementLog::new();
        let mut engine = engine();
        engine.add_listener(Box::new(log.clone()));
        engine
            .initialize(
                vec![Anchor::at_default(
                    AnchorSlot::Foyer,
                    tile("foyer", DoorMask::all()),
                )],
                Deck::default(),
            )
            .unwrap();
        engine.generate().unwrap();

        engine.reset();

        assert_eq!(engine.placed_count(), 0);
        assert!(engine.frontier().is_empty());
        assert!(engine.anchors().is_empty());
        assert!(!engine.is_generated());
        assert!(!engine.is_initialized());
        assert_eq!(log.resets(), 1);
        assert_eq!(log.count_by(PlacementSource::Anchor), 1);
        assert_eq!(engine.generate(), Err(EngineError::NotInitialized));
    }
}
