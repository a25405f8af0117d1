//! Grid write errors.
//!
//! Errors raised at the single write boundary of the grid store.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::Position;

/// Errors that occur when writing a placement into the grid.
///
/// A refused write never mutates the grid, the frontier or the deck.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// Position already holds a placement.
    #[error("position {position} is already occupied by '{occupant}'")]
    Occupied {
        /// The position that is occupied.
        position: Position,
        /// Name of the tile already placed there.
        occupant: String,
    },

    /// Rotation outside the four quarter turns.
    #[error("rotation {rotation} is outside 0..4")]
    InvalidRotation {
        /// The rejected rotation.
        rotation: u8,
    },
}

impl GameError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PlacementError::Occupied { .. } => ErrorSeverity::Recoverable,
            PlacementError::InvalidRotation { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            PlacementError::Occupied { position, .. } => Some(
                ErrorContext::new()
                    .with_position(*position)
                    .with_message("single occupancy"),
            ),
            PlacementError::InvalidRotation { .. } => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlacementError::Occupied { .. } => "PLACEMENT_OCCUPIED",
            PlacementError::InvalidRotation { .. } => "PLACEMENT_INVALID_ROTATION",
        }
    }
}
