use crate::config::GenerationConfig;
use crate::env::FloorLayer;
use crate::state::Position;

/// Maps a grid position to its floor by y band.
///
/// Positions at or above `upper_y - margin` are upstairs, positions at or
/// below `basement_y + margin` are in the basement, everything in between is
/// the ground floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorClassifier {
    upper_y: i32,
    basement_y: i32,
    margin: i32,
}

impl FloorClassifier {
    pub const fn new(upper_y: i32, basement_y: i32, margin: i32) -> Self {
        Self {
            upper_y,
            basement_y,
            margin,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            config.upper_offset.y,
            config.basement_offset.y,
            config.floor_margin,
        )
    }

    pub fn classify(&self, position: Position) -> FloorLayer {
        if position.y >= self.upper_y - self.margin {
            FloorLayer::Upper
        } else if position.y <= self.basement_y + self.margin {
            FloorLayer::Basement
        } else {
            FloorLayer::Ground
        }
    }
}

impl Default for FloorClassifier {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        let classifier = FloorClassifier::new(50, -50, 20);

        assert_eq!(classifier.classify(Position::new(0, 30)), FloorLayer::Upper);
        assert_eq!(classifier.classify(Position::new(0, 29)), FloorLayer::Ground);
        assert_eq!(classifier.classify(Position::new(0, -30)), FloorLayer::Basement);
        assert_eq!(classifier.classify(Position::new(0, -29)), FloorLayer::Ground);
    }

    #[test]
    fn anchors_land_on_their_own_floor() {
        let classifier = FloorClassifier::default();

        assert_eq!(classifier.classify(Position::new(0, 50)), FloorLayer::Upper);
        assert_eq!(classifier.classify(Position::new(0, -50)), FloorLayer::Basement);
        assert_eq!(classifier.classify(Position::ORIGIN), FloorLayer::Ground);
        assert_eq!(classifier.classify(Position::new(7, 3)), FloorLayer::Ground);
    }
}
