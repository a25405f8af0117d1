//! Generation parameter loader.

use std::path::Path;

use game_core::GenerationConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for generation parameters from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GenerationConfig`] from a TOML file.
    ///
    /// Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> LoadResult<GenerationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GenerationConfig> {
        let config: GenerationConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse generation TOML: {}", e))?;

        if config.tile_size <= 0.0 {
            anyhow::bail!("tile_size must be positive, got {}", config.tile_size);
        }
        if config.retry_attempts == 0 {
            anyhow::bail!("retry_attempts must be at least 1");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Position, RetryScope};

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            max_iterations = 120
            retry_scope = "global"
            upper_offset = { x = 0, y = 80 }
            "#,
        )
        .unwrap();

        assert_eq!(config.max_iterations, 120);
        assert_eq!(config.retry_scope, RetryScope::Global);
        assert_eq!(config.upper_offset, Position::new(0, 80));
        assert_eq!(config.retry_attempts, GenerationConfig::DEFAULT_RETRY_ATTEMPTS);
    }

    #[test]
    fn rejects_zero_retry_attempts() {
        assert!(ConfigLoader::parse("retry_attempts = 0").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generation.toml");
        std::fs::write(&path, "tile_size = 4.0\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.tile_size, 4.0);
        assert!(ConfigLoader::load(&dir.path().join("missing.toml")).is_err());
    }
}
