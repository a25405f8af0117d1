use game_content::ContentFactory;
use game_core::{AnchorSlot, CardinalDirection, FloorLayer, GenerationConfig, Position, TileOracle};

#[test]
fn bundled_catalog_resolves_every_anchor() {
    let factory = ContentFactory::bundled();
    let catalog = factory.load_catalog().unwrap();
    let layout = factory.load_layout().unwrap();

    let anchors = layout
        .anchors(&catalog, &GenerationConfig::default())
        .unwrap();
    assert_eq!(anchors.len(), 5);
    assert!(anchors.iter().all(|anchor| anchor.tile.is_some()));
    assert!(catalog.len() > 30);
}

#[test]
fn bundled_house_generates_consistently() {
    for seed in [1, 2, 3, 17, 99] {
        let mut engine = ContentFactory::bundled().build_engine(seed).unwrap();

        let report = engine.generate().unwrap();

        assert_eq!(report.anchors_placed, 5);
        assert!(engine.validate_connections().is_consistent(), "seed {seed}");
        for (position, placement) in engine.snapshot_grid().iter() {
            let floor = engine.floor_of(*position);
            assert!(
                placement.tile().allows(floor),
                "seed {seed}: {} placed on {floor}",
                placement.tile().id
            );
        }
    }
}

#[test]
fn bundled_anchors_sit_on_their_floors() {
    let mut engine = ContentFactory::bundled().build_engine(4).unwrap();
    engine.seed_anchors();

    let upper = AnchorSlot::UpperLanding.default_position();
    let basement = AnchorSlot::BasementLanding.default_position();
    assert_eq!(engine.floor_of(upper), FloorLayer::Upper);
    assert_eq!(engine.floor_of(basement), FloorLayer::Basement);
    assert_eq!(engine.floor_of(Position::ORIGIN), FloorLayer::Ground);
    assert_eq!(engine.placed_count(), 5);

    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    // Anchor rooms were taken out of the full-catalog deck.
    assert_eq!(engine.remaining_count(), catalog.all_tiles().len() - 5);
}

#[test]
fn moved_landings_stay_on_their_floors() {
    let bundled = ContentFactory::bundled();
    let dir = tempfile::tempdir().unwrap();
    for file in [ContentFactory::TILES_FILE, ContentFactory::LAYOUT_FILE] {
        std::fs::copy(bundled.data_dir().join(file), dir.path().join(file)).unwrap();
    }
    std::fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "upper_offset = { x = 0, y = 80 }\nbasement_offset = { x = 0, y = -80 }\n",
    )
    .unwrap();

    let mut engine = ContentFactory::new(dir.path()).build_engine(1).unwrap();
    assert_eq!(engine.seed_anchors(), 5);

    let upper = Position::new(0, 80);
    let basement = Position::new(0, -80);
    assert!(engine.has_tile(upper));
    assert!(engine.has_tile(basement));
    assert!(!engine.has_tile(AnchorSlot::UpperLanding.default_position()));
    assert_eq!(engine.floor_of(upper), FloorLayer::Upper);
    assert_eq!(
        engine.floor_of(upper.neighbor(CardinalDirection::South)),
        FloorLayer::Upper
    );
    assert_eq!(engine.floor_of(basement), FloorLayer::Basement);

    engine.generate().unwrap();
    for (position, placement) in engine.snapshot_grid().iter() {
        assert!(placement.tile().allows(engine.floor_of(*position)));
    }
    let on_upper = engine
        .snapshot_grid()
        .positions()
        .filter(|position| engine.floor_of(*position) == FloorLayer::Upper)
        .count();
    assert!(on_upper > 1, "nothing was built around the upper landing");
}
