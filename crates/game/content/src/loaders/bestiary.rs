//! Bestiary loader.
//!
//! Loads monster template overrides from RON files.

use std::path::Path;

use game_core::{MonsterKind, MonsterTemplate};

use crate::bestiary::Bestiary;
use crate::loaders::{LoadResult, read_file};

/// Loader for monster templates from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load a bestiary from a RON file.
    ///
    /// RON format: `Vec<(MonsterKind, MonsterTemplate)>`
    ///
    /// ```text
    /// [
    ///     (Goblin, (name: "GoblinChief", health: 60, attack: 14, defense: 6)),
    /// ]
    /// ```
    ///
    /// Kinds not listed keep their built-in stats. A later entry for the same
    /// kind replaces an earlier one.
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse bestiary RON already read into memory.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let entries: Vec<(MonsterKind, MonsterTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        let count = entries.len();
        let mut bestiary = Bestiary::builtin();
        for (kind, template) in entries {
            bestiary.insert(kind, template).map_err(|e| {
                anyhow::anyhow!("Invalid bestiary entry for '{}': {}", kind, e)
            })?;
        }

        tracing::debug!("Loaded bestiary with {} override entries", count);

        Ok(bestiary)
    }
}
