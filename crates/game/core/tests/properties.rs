use proptest::prelude::*;

use game_core::{
    Anchor, AnchorSlot, CardinalDirection, Deck, DoorMask, FloorLayers, GenerationConfig,
    PlacementEngine, Position, TileDefinition,
};

fn door_mask() -> impl Strategy<Value = DoorMask> {
    (0u8..16).prop_map(DoorMask::from_bits_truncate)
}

proptest! {
    #[test]
    fn rotation_round_trips(mask in door_mask(), steps in 0u8..4) {
        prop_assert_eq!(mask.rotate(steps).rotate(4 - steps), mask);
    }

    #[test]
    fn rotation_preserves_door_count(mask in door_mask(), steps in 0u8..8) {
        prop_assert_eq!(mask.rotate(steps).door_count(), mask.door_count());
    }

    #[test]
    fn rotated_mask_follows_rotated_directions(mask in door_mask(), steps in 0u8..4) {
        for direction in CardinalDirection::ALL {
            prop_assert_eq!(
                mask.has_door(direction),
                mask.rotate(steps).has_door(direction.rotated(steps))
            );
        }
    }

    #[test]
    fn generated_maps_never_mismatch(
        seed in any::<u64>(),
        masks in prop::collection::vec(door_mask(), 1..40),
    ) {
        let deck: Deck = masks
            .iter()
            .enumerate()
            .map(|(i, doors)| {
                TileDefinition::new(format!("room_{i}"), format!("Room {i}"), *doors, FloorLayers::ANY)
                    .into_ref()
            })
            .collect();
        let foyer = TileDefinition::new("foyer", "Foyer", DoorMask::all(), FloorLayers::ANY).into_ref();

        let mut engine = PlacementEngine::with_seed(GenerationConfig::default(), seed);
        engine
            .initialize(vec![Anchor::at_default(AnchorSlot::Foyer, foyer)], deck)
            .unwrap();
        let report = engine.generate().unwrap();

        prop_assert!(engine.validate_connections().is_consistent());
        prop_assert_eq!(report.remaining + report.tiles_placed, masks.len());
        prop_assert!(engine.has_tile(Position::ORIGIN));
    }
}
