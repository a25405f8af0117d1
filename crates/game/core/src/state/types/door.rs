use std::fmt;

use bitflags::bitflags;

use super::Position;

/// One of the four edges of a room tile.
///
/// Variants are declared in clockwise order so that a quarter turn is a
/// single step through [`CardinalDirection::ALL`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    /// Every direction, clockwise from north.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    /// Grid offset of one step in this direction. North is `+y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::South => (0, -1),
            CardinalDirection::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::West => CardinalDirection::East,
        }
    }

    /// Turns clockwise by `steps` quarter turns (taken modulo 4).
    pub fn rotated(self, steps: u8) -> Self {
        let index = self as usize + steps as usize % 4;
        Self::ALL[index % 4]
    }

    /// Direction leading from `from` to an orthogonally adjacent `to`.
    ///
    /// Returns `None` when the two positions are not neighbours.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        match (to.x - from.x, to.y - from.y) {
            (0, 1) => Some(CardinalDirection::North),
            (1, 0) => Some(CardinalDirection::East),
            (0, -1) => Some(CardinalDirection::South),
            (-1, 0) => Some(CardinalDirection::West),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CardinalDirection::North => 'N',
            CardinalDirection::East => 'E',
            CardinalDirection::South => 'S',
            CardinalDirection::West => 'W',
        }
    }
}

bitflags! {
    /// Set of open edges on a room tile.
    ///
    /// Bits follow the clockwise order of [`CardinalDirection`], which turns a
    /// clockwise rotation into a 4-bit rotate-left.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct DoorMask: u8 {
        const NORTH = 1 << 0;
        const EAST  = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl DoorMask {
    /// Single-door mask for `direction`.
    pub const fn from_direction(direction: CardinalDirection) -> Self {
        match direction {
            CardinalDirection::North => Self::NORTH,
            CardinalDirection::East => Self::EAST,
            CardinalDirection::South => Self::SOUTH,
            CardinalDirection::West => Self::WEST,
        }
    }

    pub fn has_door(self, direction: CardinalDirection) -> bool {
        self.contains(Self::from_direction(direction))
    }

    /// Rotates the mask clockwise by `steps` quarter turns (taken modulo 4).
    ///
    /// A door facing north ends up facing east after one step.
    #[must_use]
    pub fn rotate(self, steps: u8) -> Self {
        let shift = u32::from(steps % 4);
        if shift == 0 {
            return self;
        }
        let bits = self.bits();
        Self::from_bits_truncate((bits << shift) | (bits >> (4 - shift)))
    }

    /// Directions with an open door, clockwise from north.
    pub fn directions(self) -> impl Iterator<Item = CardinalDirection> {
        CardinalDirection::ALL
            .into_iter()
            .filter(move |direction| self.has_door(*direction))
    }

    pub fn door_count(self) -> u32 {
        self.bits().count_ones()
    }
}

impl From<CardinalDirection> for DoorMask {
    fn from(direction: CardinalDirection) -> Self {
        Self::from_direction(direction)
    }
}

impl FromIterator<CardinalDirection> for DoorMask {
    fn from_iter<I: IntoIterator<Item = CardinalDirection>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DoorMask::empty(), |mask, direction| mask | direction.into())
    }
}

/// Compact `NSEW` rendering used in logs and tool output; `-` when sealed.
impl fmt::Display for DoorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for direction in [
            CardinalDirection::North,
            CardinalDirection::South,
            CardinalDirection::East,
            CardinalDirection::West,
        ] {
            if self.has_door(direction) {
                write!(f, "{}", direction.to_char())?;
            }
        }
        Ok(())
    }
}
