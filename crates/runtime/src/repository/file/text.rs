//! Plain-text SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{Character, Inventory, validate_name};

use crate::repository::{RepositoryError, Result, SaveGame, SaveRepository};

/// File-based save repository using a human-readable text format.
///
/// # File Format
///
/// Saves are stored as `{slot}.sav`:
/// ```text
/// <name> <health> <attack> <defense> <level> <experience>
/// <item count>
/// <item>
/// ...
/// ```
///
/// Character names must be single words and item names must be single
/// non-empty lines. Saves that break either rule (say, one deserialized
/// from JSON) are refused with [`RepositoryError::UnencodableField`].
pub struct TextSaveRepository {
    base_dir: PathBuf,
}

impl TextSaveRepository {
    pub const EXTENSION: &'static str = "sav";

    /// Create a new text save repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Path of the file backing `slot`.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        super::slot_path(&self.base_dir, slot, Self::EXTENSION)
    }
}

impl SaveRepository for TextSaveRepository {
    fn save(&self, slot: &str, save: &SaveGame) -> Result<()> {
        let path = self.slot_path(slot)?;
        super::write_atomic(&path, encode(save)?.as_bytes())?;

        tracing::debug!("Saved slot {} to {}", slot, path.display());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveGame>> {
        let path = self.slot_path(slot)?;

        if !path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        let save = decode(&text)?;

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

fn encode(save: &SaveGame) -> Result<String> {
    let player = &save.player;
    validate_name(player.name()).map_err(|_| RepositoryError::UnencodableField {
        field: "character name",
        value: player.name().to_string(),
    })?;

    let mut text = format!(
        "{} {} {} {} {} {}\n{}\n",
        player.name(),
        player.health(),
        player.attack(),
        player.defense(),
        player.level(),
        player.experience(),
        save.inventory.len()
    );
    for item in save.inventory.iter() {
        if item.is_empty() {
            return Err(RepositoryError::UnencodableField {
                field: "item name",
                value: String::new(),
            });
        }
        super::check_line("item name", item)?;
        text.push_str(item);
        text.push('\n');
    }
    Ok(text)
}

fn decode(text: &str) -> Result<SaveGame> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| RepositoryError::corrupted("missing character record"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [name, health, attack, defense, level, experience] = fields.as_slice() else {
        return Err(RepositoryError::corrupted(format!(
            "expected 6 character fields, found {}",
            fields.len()
        )));
    };

    let player = Character::restore(
        *name,
        number(health, "health")?,
        number(attack, "attack")?,
        number(defense, "defense")?,
        number(level, "level")?,
        number(experience, "experience")?,
    )
    .map_err(|e| RepositoryError::corrupted(e.to_string()))?;

    let count_line = lines
        .next()
        .ok_or_else(|| RepositoryError::corrupted("missing item count"))?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| RepositoryError::corrupted(format!("invalid item count {count_line:?}")))?;

    let mut inventory = Inventory::new();
    for index in 0..count {
        let item = lines.next().ok_or_else(|| {
            RepositoryError::corrupted(format!("expected {count} items, found {index}"))
        })?;
        inventory
            .add(item)
            .map_err(|e| RepositoryError::corrupted(e.to_string()))?;
    }

    Ok(SaveGame::new(player, inventory))
}

fn number(value: &str, field: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| RepositoryError::corrupted(format!("invalid {field} {value:?}")))
}
