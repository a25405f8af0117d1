//! Door-consistency audit over a finished grid.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{CardinalDirection, GridStore, Placement, Position};

/// How the shared edge between two placed tiles looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConnectionKind {
    /// Both sides have a door.
    Open,
    /// Neither side has a door.
    Sealed,
    /// Exactly one side has a door.
    Mismatch,
}

/// One mismatched edge, named from the lower-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub from: Position,
    pub to: Position,
    pub direction: CardinalDirection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionReport {
    pub open: usize,
    pub sealed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl ConnectionReport {
    pub fn edges(&self) -> usize {
        self.open + self.sealed + self.mismatches.len()
    }

    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("positions {from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },
}

impl GameError for ConnectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            ConnectionError::NotAdjacent { from, .. } => {
                Some(ErrorContext::new().with_position(*from))
            }
        }
    }

    fn error_code(&self) -> &'static str {
        "CONNECTION_NOT_ADJACENT"
    }
}

/// Classifies the edge between two neighbouring placements.
pub fn check_connection(
    from: Position,
    from_placement: &Placement,
    to: Position,
    to_placement: &Placement,
) -> Result<ConnectionKind, ConnectionError> {
    let direction =
        CardinalDirection::between(from, to).ok_or(ConnectionError::NotAdjacent { from, to })?;

    let outward = from_placement.has_door(direction);
    let inward = to_placement.has_door(direction.opposite());
    Ok(match (outward, inward) {
        (true, true) => ConnectionKind::Open,
        (false, false) => ConnectionKind::Sealed,
        _ => ConnectionKind::Mismatch,
    })
}

/// Visits every pair of occupied neighbours once and tallies their edges.
pub fn validate_connections(grid: &GridStore) -> ConnectionReport {
    let mut report = ConnectionReport::default();

    for (position, placement) in grid.iter() {
        // East and north only, so each edge is seen once.
        for direction in [CardinalDirection::East, CardinalDirection::North] {
            let neighbor = position.neighbor(direction);
            let Some(other) = grid.get(&neighbor) else {
                continue;
            };
            match check_connection(*position, placement, neighbor, other) {
                Ok(ConnectionKind::Open) => report.open += 1,
                Ok(ConnectionKind::Sealed) => report.sealed += 1,
                Ok(ConnectionKind::Mismatch) => {
                    tracing::warn!(
                        "door mismatch between {} and {} ({})",
                        position,
                        neighbor,
                        direction
                    );
                    report.mismatches.push(Mismatch {
                        from: *position,
                        to: neighbor,
                        direction,
                    });
                }
                Err(_) => {}
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FloorLayers, TileDefinition};
    use crate::state::DoorMask;

    fn placed(doors: DoorMask) -> Placement {
        Placement::new(
            TileDefinition::new("t", "T", doors, FloorLayers::ANY).into_ref(),
            0,
        )
    }

    #[test]
    fn classifies_each_edge_kind() {
        let a = Position::ORIGIN;
        let b = Position::new(1, 0);

        assert_eq!(
            check_connection(a, &placed(DoorMask::EAST), b, &placed(DoorMask::WEST)),
            Ok(ConnectionKind::Open)
        );
        assert_eq!(
            check_connection(a, &placed(DoorMask::NORTH), b, &placed(DoorMask::EAST)),
            Ok(ConnectionKind::Sealed)
        );
        assert_eq!(
            check_connection(a, &placed(DoorMask::EAST), b, &placed(DoorMask::empty())),
            Ok(ConnectionKind::Mismatch)
        );
    }

    #[test]
    fn rejects_non_neighbours() {
        let far = Position::new(2, 0);
        let result = check_connection(
            Position::ORIGIN,
            &placed(DoorMask::EAST),
            far,
            &placed(DoorMask::WEST),
        );
        assert_eq!(
            result,
            Err(ConnectionError::NotAdjacent {
                from: Position::ORIGIN,
                to: far
            })
        );
    }

    #[test]
    fn counts_every_edge_once() {
        let mut grid = GridStore::new();
        grid.insert(Position::ORIGIN, placed(DoorMask::EAST | DoorMask::NORTH))
            .unwrap();
        grid.insert(Position::new(1, 0), placed(DoorMask::WEST)).unwrap();
        grid.insert(Position::new(0, 1), placed(DoorMask::empty())).unwrap();

        let report = validate_connections(&grid);

        assert_eq!(report.open, 1);
        assert_eq!(report.sealed, 0);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.edges(), 2);
        assert!(!report.is_consistent());
    }
}
