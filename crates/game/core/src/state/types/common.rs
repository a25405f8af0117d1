use std::fmt;

use super::CardinalDirection;

/// Discrete grid position expressed in tile coordinates.
///
/// All three floors share this flat coordinate space; anchors for the upper
/// floor and the basement sit far enough away on the y axis that their rooms
/// never collide with the ground floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the orthogonally adjacent position in `direction`.
    pub fn neighbor(self, direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Iterates the four orthogonal neighbours together with the direction
    /// leading to each of them.
    pub fn neighbors(self) -> impl Iterator<Item = (CardinalDirection, Position)> {
        CardinalDirection::ALL
            .into_iter()
            .map(move |direction| (direction, self.neighbor(direction)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
