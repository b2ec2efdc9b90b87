//! Bincode SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result, SaveGame, SaveRepository};

/// File-based save repository storing bincode-encoded saves.
///
/// Saves are stored as `{slot}.bin`. Unlike the text format this carries
/// the serde representation of [`SaveGame`] directly, so it survives any
/// future fields without a format change.
pub struct BinarySaveRepository {
    base_dir: PathBuf,
}

impl BinarySaveRepository {
    pub const EXTENSION: &'static str = "bin";

    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        super::slot_path(&self.base_dir, slot, Self::EXTENSION)
    }
}

impl SaveRepository for BinarySaveRepository {
    fn save(&self, slot: &str, save: &SaveGame) -> Result<()> {
        let path = self.slot_path(slot)?;

        let bytes =
            bincode::serialize(save).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        super::write_atomic(&path, &bytes)?;

        tracing::debug!("Saved slot {} to {}", slot, path.display());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveGame>> {
        let path = self.slot_path(slot)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let save: SaveGame = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded slot {} from {}", slot, path.display());
        Ok(Some(save))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).is_ok_and(|path| path.exists())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        if super::delete_file(&self.slot_path(slot)?)? {
            tracing::debug!("Deleted slot {}", slot);
        }
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        super::list_slots(&self.base_dir, Self::EXTENSION)
    }
}
