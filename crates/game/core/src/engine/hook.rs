//! Placement listeners notified after each successful grid write.
//!
//! The engine never renders or spawns anything. Presentation code registers a
//! listener and mirrors the grid from the events it receives. Listeners run
//! synchronously in registration order, after the grid, frontier and deck
//! have been updated for the placement being reported.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::env::TileRef;
use crate::state::{DoorMask, Position};

/// Which engine path produced a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PlacementSource {
    /// Pinned by the layout, no matching involved.
    Anchor,
    /// Drawn by the eager `generate()` loop.
    Generated,
    /// Filled on demand through `discover()`.
    Discovered,
    /// Written directly through `place()`.
    Manual,
}

/// Snapshot of a single placement as seen by listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementEvent {
    pub position: Position,
    pub tile: TileRef,
    pub rotation: u8,
    pub rotated_doors: DoorMask,
    pub source: PlacementSource,
}

/// Observer of engine writes.
pub trait PlacementListener: Send {
    fn on_placed(&mut self, event: &PlacementEvent);

    /// Called once after the engine has been cleared.
    fn on_reset(&mut self) {}
}

/// Recording listener with a shared handle.
///
/// Clone the log, hand one copy to the engine and keep the other to inspect
/// what was placed.
#[derive(Clone, Debug, Default)]
pub struct PlacementLog {
    inner: Arc<Mutex<LogState>>,
}

#[derive(Debug, Default)]
struct LogState {
    events: Vec<PlacementEvent>,
    resets: usize,
}

impl PlacementLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, LogState> {
        // A panicking listener elsewhere must not hide what was recorded.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every event received since creation, in delivery order.
    pub fn events(&self) -> Vec<PlacementEvent> {
        self.state().events.clone()
    }

    pub fn len(&self) -> usize {
        self.state().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().events.is_empty()
    }

    pub fn count_by(&self, source: PlacementSource) -> usize {
        self.state()
            .events
            .iter()
            .filter(|event| event.source == source)
            .count()
    }

    pub fn resets(&self) -> usize {
        self.state().resets
    }
}

impl PlacementListener for PlacementLog {
    fn on_placed(&mut self, event: &PlacementEvent) {
        self.state().events.push(event.clone());
    }

    fn on_reset(&mut self) {
        self.state().resets += 1;
    }
}
