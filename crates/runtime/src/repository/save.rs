//! Data persisted by the save repositories.

use std::fmt;

use game_core::{Character, Inventory};
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, Result};

/// Everything needed to resume a session: the player and what they carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub player: Character,
    pub inventory: Inventory,
}

impl SaveGame {
    pub fn new(player: Character, inventory: Inventory) -> Self {
        Self { player, inventory }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RepositoryError::Json(e.to_string()))
    }
}

impl fmt::Display for SaveGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.player)?;
        write!(f, "{}", self.inventory)
    }
}
