use crate::config::GenerationConfig;
use crate::env::TileRef;
use crate::state::Position;

/// Fixed slots of the reference house layout.
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
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnchorSlot {
    UpperLanding,
    BasementLanding,
    GrandStaircase,
    Foyer,
    EntranceHall,
}

impl AnchorSlot {
    /// Grid position of the slot under the default configuration.
    pub const fn default_position(self) -> Position {
        self.position_at(
            GenerationConfig::DEFAULT_UPPER_OFFSET,
            GenerationConfig::DEFAULT_BASEMENT_OFFSET,
        )
    }

    /// Grid position of the slot with the off-ground landings placed at the
    /// configured offsets.
    pub fn position_in(self, config: &GenerationConfig) -> Position {
        self.position_at(config.upper_offset, config.basement_offset)
    }

    const fn position_at(self, upper: Position, basement: Position) -> Position {
        match self {
            AnchorSlot::UpperLanding => upper,
            AnchorSlot::BasementLanding => basement,
            AnchorSlot::GrandStaircase => Position::new(-1, 0),
            AnchorSlot::Foyer => Position::ORIGIN,
            AnchorSlot::EntranceHall => Position::new(1, 0),
        }
    }
}

/// A tile pinned to a position before any random draw.
///
/// `tile` is `None` when the layout named a tile the catalog does not know;
/// seeding logs and skips such anchors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub slot: AnchorSlot,
    pub position: Position,
    pub tile: Option<TileRef>,
}

impl Anchor {
    pub fn new(slot: AnchorSlot, position: Position, tile: Option<TileRef>) -> Self {
        Self {
            slot,
            position,
            tile,
        }
    }

    /// Anchor at the slot's default position.
    pub fn at_default(slot: AnchorSlot, tile: TileRef) -> Self {
        Self::new(slot, slot.default_position(), Some(tile))
    }

    /// Anchor whose tile reference could not be resolved.
    pub fn missing(slot: AnchorSlot, position: Position) -> Self {
        Self::new(slot, position, None)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn default_positions_are_distinct() {
        let positions: std::collections::BTreeSet<_> =
            AnchorSlot::iter().map(AnchorSlot::default_position).collect();
        assert_eq!(positions.len(), 5);
    }

    #[test]
    fn landings_follow_configured_offsets() {
        let config = GenerationConfig {
            upper_offset: Position::new(0, 80),
            basement_offset: Position::new(3, -80),
            ..GenerationConfig::default()
        };

        assert_eq!(AnchorSlot::UpperLanding.position_in(&config), Position::new(0, 80));
        assert_eq!(AnchorSlot::BasementLanding.position_in(&config), Position::new(3, -80));
        assert_eq!(AnchorSlot::Foyer.position_in(&config), Position::ORIGIN);
        assert_eq!(
            AnchorSlot::UpperLanding.position_in(&GenerationConfig::default()),
            AnchorSlot::UpperLanding.default_position()
        );
    }

    #[test]
    fn slot_names_are_snake_case() {
        assert_eq!(AnchorSlot::GrandStaircase.to_string(), "grand_staircase");
        assert_eq!(
            "entrance_hall".parse::<AnchorSlot>().ok(),
            Some(AnchorSlot::EntranceHall)
        );
    }
}
