//! Repository contracts for saved games and the combat log.

use game_core::GameEvent;

use crate::repository::{Result, SaveGame};

/// Repository for saved games, addressed by slot name.
///
/// Slot names are plain identifiers; implementations backed by the file
/// system reject names that would escape their directory.
pub trait SaveRepository: Send + Sync {
    /// Save a game into `slot`, replacing any previous save.
    fn save(&self, slot: &str, save: &SaveGame) -> Result<()>;

    /// Load the game stored in `slot`, if any.
    fn load(&self, slot: &str) -> Result<Option<SaveGame>>;

    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slots, sorted by name.
    fn list_slots(&self) -> Result<Vec<String>>;
}

/// Append-only sink for battle events.
pub trait CombatLog {
    fn record(&mut self, event: &GameEvent) -> Result<()>;
}

impl<L: CombatLog + ?Sized> CombatLog for Box<L> {
    fn record(&mut self, event: &GameEvent) -> Result<()> {
        (**self).record(event)
    }
}
