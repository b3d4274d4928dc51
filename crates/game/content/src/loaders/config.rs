//! Game configuration loader.

use std::path::Path;

use maze_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use maze_core::Position;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("hazard_count = 2\nseed = 7\n").expect("valid TOML");

        assert_eq!(config.hazard_count, 2);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_health, GameConfig::DEFAULT_MAX_HEALTH);
        assert_eq!(config.key_item, "key");
        assert!(config.guardian_kills);
    }

    #[test]
    fn reads_start_position_table() {
        let config = ConfigLoader::parse("[start_position]\nx = 1\ny = 2\n").expect("valid TOML");
        assert_eq!(config.start_position, Position::new(1, 2));
    }

    #[test]
    fn rejects_mistyped_fields() {
        assert!(ConfigLoader::parse("hazard_count = \"many\"").is_err());
    }
}
