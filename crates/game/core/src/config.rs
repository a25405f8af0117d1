use crate::state::Position;

/// Tunable parameters of a generation run.
///
/// Every value is a plain number handed in at construction time; the engine
/// never reads configuration from anywhere else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationConfig {
    /// World-space edge length of one grid cell.
    pub tile_size: f32,
    /// Safety stop for the eager loop.
    pub max_iterations: u32,
    /// Failed matches tolerated before a frontier position is retired.
    pub retry_attempts: u32,
    pub retry_scope: RetryScope,
    /// Where the upper-floor anchor sits.
    pub upper_offset: Position,
    /// Where the basement anchor sits.
    pub basement_offset: Position,
    /// Width of the y band around each off-ground anchor that still counts as
    /// that anchor's floor.
    pub floor_margin: i32,
}

impl GenerationConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_SIZE: f32 = 2.0;
    pub const DEFAULT_MAX_ITERATIONS: u32 = 500;
    pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
    pub const DEFAULT_UPPER_OFFSET: Position = Position::new(0, 50);
    pub const DEFAULT_BASEMENT_OFFSET: Position = Position::new(0, -50);
    pub const DEFAULT_FLOOR_MARGIN: i32 = 20;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            retry_attempts: Self::DEFAULT_RETRY_ATTEMPTS,
            retry_scope: RetryScope::default(),
            upper_offset: Self::DEFAULT_UPPER_OFFSET,
            basement_offset: Self::DEFAULT_BASEMENT_OFFSET,
            floor_margin: Self::DEFAULT_FLOOR_MARGIN,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    pub fn with_retry_scope(mut self, retry_scope: RetryScope) -> Self {
        self.retry_scope = retry_scope;
        self
    }

    pub fn with_floor_margin(mut self, floor_margin: i32) -> Self {
        self.floor_margin = floor_margin;
        self
    }

    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(self.tile_size)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How failed matches are counted before a frontier position is retired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RetryScope {
    /// Each frontier position keeps its own failure count; a success elsewhere
    /// does not reset it.
    #[default]
    PerPosition,
    /// One shared counter reset by every successful placement. Whichever
    /// position is sampled when it reaches the threshold is retired.
    Global,
}

/// Conversion between grid cells and world-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    pub tile_size: f32,
}

impl GridMetrics {
    pub const fn new(tile_size: f32) -> Self {
        Self { tile_size }
    }

    /// Centre of the cell at `position`.
    pub fn grid_to_world(&self, position: Position) -> (f32, f32) {
        (
            position.x as f32 * self.tile_size,
            position.y as f32 * self.tile_size,
        )
    }

    /// Cell containing the world point, rounding to the nearest centre.
    pub fn world_to_grid(&self, x: f32, y: f32) -> Position {
        Position::new(
            (x / self.tile_size).round() as i32,
            (y / self.tile_size).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_layout() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.upper_offset, Position::new(0, 50));
        assert_eq!(config.basement_offset, Position::new(0, -50));
        assert_eq!(config.floor_margin, 20);
        assert_eq!(config.retry_scope, RetryScope::PerPosition);
    }

    #[test]
    fn world_conversion_rounds_to_nearest_cell() {
        let metrics = GridMetrics::new(2.0);
        assert_eq!(metrics.grid_to_world(Position::new(3, -2)), (6.0, -4.0));
        assert_eq!(metrics.world_to_grid(6.9, -3.2), Position::new(3, -2));
        assert_eq!(metrics.world_to_grid(0.4, 0.4), Position::ORIGIN);
    }
}
