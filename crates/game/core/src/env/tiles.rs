use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::state::DoorMask;

/// Shared handle to an immutable catalog entry.
///
/// The deck, the grid and listener events all point at the same definition.
pub type TileRef = Arc<TileDefinition>;

/// Read-only tile catalog consulted when building anchors and decks.
pub trait TileOracle: Send + Sync {
    fn tile(&self, id: &TileId) -> Option<TileRef>;

    /// Returns every definition in catalog order.
    fn all_tiles(&self) -> Vec<TileRef>;

    fn contains(&self, id: &TileId) -> bool {
        self.tile(id).is_some()
    }
}

/// Stable identifier of a tile definition (e.g. `"foyer"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TileId(pub String);

impl TileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical floor a grid position belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FloorLayer {
    Ground,
    Upper,
    Basement,
}

bitflags! {
    /// Floors a tile may be placed on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FloorLayers: u8 {
        const GROUND   = 1 << 0;
        const UPPER    = 1 << 1;
        const BASEMENT = 1 << 2;
        const ANY = Self::GROUND.bits() | Self::UPPER.bits() | Self::BASEMENT.bits();
    }
}

impl FloorLayers {
    pub const fn from_layer(layer: FloorLayer) -> Self {
        match layer {
            FloorLayer::Ground => Self::GROUND,
            FloorLayer::Upper => Self::UPPER,
            FloorLayer::Basement => Self::BASEMENT,
        }
    }

    pub fn allows(self, layer: FloorLayer) -> bool {
        self.contains(Self::from_layer(layer))
    }
}

impl Default for FloorLayers {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<FloorLayer> for FloorLayers {
    fn from(layer: FloorLayer) -> Self {
        Self::from_layer(layer)
    }
}

/// Immutable catalog entry for a room tile.
///
/// `doors` is the unrotated mask; placements rotate it. A tile with an empty
/// `layers` set can never be drawn by matching.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileDefinition {
    pub id: TileId,
    pub name: String,
    pub doors: DoorMask,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layers: FloorLayers,
}

impl TileDefinition {
    pub fn new(
        id: impl Into<TileId>,
        name: impl Into<String>,
        doors: DoorMask,
        layers: FloorLayers,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            doors,
            layers,
        }
    }

    /// Wraps the definition into a shareable [`TileRef`].
    pub fn into_ref(self) -> TileRef {
        Arc::new(self)
    }

    pub fn allows(&self, layer: FloorLayer) -> bool {
        self.layers.allows(layer)
    }
}

impl From<String> for TileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_allows_every_floor() {
        for layer in [FloorLayer::Ground, FloorLayer::Upper, FloorLayer::Basement] {
            assert!(FloorLayers::ANY.allows(layer));
        }
    }

    #[test]
    fn restricted_tile_rejects_other_floors() {
        let crypt = TileDefinition::new(
            "crypt",
            "Crypt",
            DoorMask::NORTH,
            FloorLayers::BASEMENT,
        );
        assert!(crypt.allows(FloorLayer::Basement));
        assert!(!crypt.allows(FloorLayer::Ground));
        assert!(!crypt.allows(FloorLayer::Upper));
    }

    #[test]
    fn floor_layer_parses_case_insensitively() {
        assert_eq!("Upper".parse::<FloorLayer>().ok(), Some(FloorLayer::Upper));
        assert_eq!(FloorLayer::Basement.to_string(), "basement");
    }
}
