//! Text persistence for entity rosters.
//!
//! # File Format
//!
//! ```text
//! <entity count>
//! Player          Enemy
//! <name>          <name>
//! <health>        <health>
//! <level>         <species>
//! ...
//! ```
//!
//! Each entity takes four lines; names and species may contain spaces but
//! not line breaks.

use std::fs;
use std::path::Path;

use game_core::{Entity, EntityKind, Roster};

use crate::repository::{RepositoryError, Result};

const PLAYER_TAG: &str = "Player";
const ENEMY_TAG: &str = "Enemy";

pub fn save_roster(roster: &Roster<Entity>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut text = format!("{}\n", roster.len());
    for entity in roster.iter() {
        super::check_line("entity name", &entity.name)?;
        match &entity.kind {
            EntityKind::Player { level } => {
                text.push_str(&format!(
                    "{PLAYER_TAG}\n{}\n{}\n{level}\n",
                    entity.name, entity.health
                ));
            }
            EntityKind::Enemy { species } => {
                super::check_line("species", species)?;
                text.push_str(&format!(
                    "{ENEMY_TAG}\n{}\n{}\n{species}\n",
                    entity.name, entity.health
                ));
            }
        }
    }

    super::write_atomic(path, text.as_bytes())?;
    tracing::debug!("Saved {} entities to {}", roster.len(), path.display());
    Ok(())
}

/// Load a roster written by [`save_roster`].
///
/// Entities are re-added through [`Roster::add`], so a file listing a dead
/// entity is rejected as corrupted.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster<Entity>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();

    let count: usize = next_line(&mut lines, "entity count")?
        .trim()
        .parse()
        .map_err(|_| RepositoryError::corrupted("invalid entity count"))?;

    let mut roster = Roster::new();
    for _ in 0..count {
        let tag = next_line(&mut lines, "entity tag")?;
        let name = next_line(&mut lines, "entity name")?;
        let health = number(next_line(&mut lines, "health")?, "health")?;
        let entity = match tag {
            PLAYER_TAG => {
                let level = number(next_line(&mut lines, "level")?, "level")?;
                Entity::player(name, health, level)
            }
            ENEMY_TAG => Entity::enemy(name, health, next_line(&mut lines, "species")?),
            other => {
                return Err(RepositoryError::corrupted(format!(
                    "unknown entity tag {other:?}"
                )));
            }
        };
        roster
            .add(entity)
            .map_err(|e| RepositoryError::corrupted(e.to_string()))?;
    }

    tracing::debug!("Loaded {} entities from {}", roster.len(), path.display());
    Ok(roster)
}

fn next_line<'a>(lines: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    lines
        .next()
        .ok_or_else(|| RepositoryError::corrupted(format!("missing {what}")))
}

fn number(value: &str, field: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| RepositoryError::corrupted(format!("invalid {field} {value:?}")))
}
