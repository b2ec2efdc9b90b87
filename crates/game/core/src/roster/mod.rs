//! Entity roster: a list of living things managed together.
//!
//! [`Roster`] is generic over anything that reports its health through
//! [`Living`]; the lab scenarios use it with [`Entity`] (players and enemies)
//! but monsters and characters can be tracked the same way.

pub mod entity;
pub mod queue;

pub use entity::{Entity, EntityKind};
pub use queue::{Queue, QueueError};

use core::fmt;

use crate::character::Character;
use crate::error::{ErrorSeverity, GameError};
use crate::monster::Monster;

/// Anything with a current health value.
pub trait Living {
    fn health(&self) -> u32;
}

impl Living for Character {
    fn health(&self) -> u32 {
        Character::health(self)
    }
}

impl Living for Monster {
    fn health(&self) -> u32 {
        self.body().health()
    }
}

impl Living for Entity {
    fn health(&self) -> u32 {
        self.health
    }
}

impl<T: Living + ?Sized> Living for Box<T> {
    fn health(&self) -> u32 {
        (**self).health()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    #[error("entity has invalid health: {health}")]
    InvalidHealth { health: u32 },
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHealth { .. } => "ROSTER_INVALID_HEALTH",
        }
    }
}

/// Insertion-ordered list of living entities.
///
/// # Invariants
///
/// - Every entity had health > 0 when it was added
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster<T> {
    entities: Vec<T>,
}

impl<T: Living> Roster<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Adds an entity; dead entities are rejected.
    pub fn add(&mut self, entity: T) -> Result<(), RosterError> {
        let health = entity.health();
        if health == 0 {
            return Err(RosterError::InvalidHealth { health });
        }
        self.entities.push(entity);
        Ok(())
    }

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.entities
    }
}

impl<T: Living> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Living + fmt::Display> fmt::Display for Roster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entity in &self.entities {
            writeln!(f, "{entity}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::MonsterKind;

    #[test]
    fn rejects_dead_entities() {
        let mut roster = Roster::new();
        roster.add(Entity::player("Hero", 100, 5)).unwrap();

        let err = roster.add(Entity::player("Ghost", 0, 1)).unwrap_err();
        assert_eq!(err, RosterError::InvalidHealth { health: 0 });
        assert_eq!(err.error_code(), "ROSTER_INVALID_HEALTH");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn tracks_monsters_too() {
        let mut roster = Roster::new();
        roster.add(Monster::spawn(MonsterKind::Goblin)).unwrap();

        let mut slain = Monster::spawn(MonsterKind::Orc);
        slain.body_mut().take_damage(1_000);
        assert!(roster.add(slain).is_err());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn display_lists_entities_in_order() {
        let mut roster = Roster::new();
        roster.add(Entity::player("Hero", 100, 0)).unwrap();
        roster.add(Entity::enemy("Goblin", 50, "Goblin")).unwrap();

        assert_eq!(
            roster.to_string(),
            "Name: Hero, HP: 100, Level: 0\nName: Goblin, HP: 50, Type: Goblin\n"
        );
    }
}
