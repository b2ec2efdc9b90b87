//! Repository layer for data that outlives a session.
//!
//! Repositories handle data that CHANGES during play:
//! - Saved games (player and inventory), as text, bincode or in memory
//! - The append-only combat log
//! - Entity rosters
//!
//! Static content such as monster templates is loaded by `game-content`.

mod error;
mod file;
mod memory;
mod save;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{BinarySaveRepository, FileCombatLog, TextSaveRepository, load_roster, save_roster};
pub use memory::{InMemorySaveRepository, MemoryCombatLog};
pub use save::SaveGame;
pub use traits::{CombatLog, SaveRepository};
