//! Game rules loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load game rules from a TOML file.
    ///
    /// Keys missing from the file keep their defaults:
    ///
    /// ```toml
    /// minimum_damage = 0
    /// potion_heal = 30
    /// ```
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
