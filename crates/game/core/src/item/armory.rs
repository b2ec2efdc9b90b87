//! Fixed-capacity weapon storage.

use core::fmt;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::Weapon;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmoryError {
    #[error("armory is full (capacity: {capacity})")]
    ArmoryFull { capacity: usize },
}

impl GameError for ArmoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ArmoryFull { .. } => "ARMORY_FULL",
        }
    }
}

/// Weapon rack holding at most `capacity` weapons.
///
/// The capacity is chosen at construction and never exceeds
/// [`GameConfig::MAX_WEAPON_SLOTS`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armory {
    capacity: usize,
    weapons: ArrayVec<Weapon, { GameConfig::MAX_WEAPON_SLOTS }>,
}

impl Armory {
    /// Create an armory; the capacity is clamped to the slot limit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_WEAPON_SLOTS),
            weapons: ArrayVec::new(),
        }
    }

    pub fn add(&mut self, weapon: Weapon) -> Result<(), ArmoryError> {
        if self.weapons.len() >= self.capacity {
            return Err(ArmoryError::ArmoryFull {
                capacity: self.capacity,
            });
        }
        self.weapons.push(weapon);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.weapons.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    /// Strongest weapon on the rack, if any.
    pub fn strongest(&self) -> Option<&Weapon> {
        self.weapons.iter().max_by_key(|weapon| weapon.damage)
    }
}

impl Default for Armory {
    fn default() -> Self {
        Self::with_capacity(GameConfig::MAX_WEAPON_SLOTS)
    }
}

impl fmt::Display for Armory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Armory contents:")?;
        for weapon in &self.weapons {
            writeln!(f, "- {weapon}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_weapons_beyond_capacity() {
        let mut armory = Armory::with_capacity(2);
        armory.add(Weapon::new("One", 100, 50)).unwrap();
        armory.add(Weapon::new("Two", 20, 10)).unwrap();

        let err = armory.add(Weapon::new("Three", 5, 5)).unwrap_err();
        assert_eq!(err, ArmoryError::ArmoryFull { capacity: 2 });
        assert_eq!(err.error_code(), "ARMORY_FULL");
        assert!(err.severity().is_recoverable());
        assert_eq!(armory.len(), 2);
        assert!(armory.is_full());
    }

    #[test]
    fn capacity_is_clamped_to_slot_limit() {
        let armory = Armory::with_capacity(1_000);
        assert_eq!(armory.capacity(), GameConfig::MAX_WEAPON_SLOTS);
    }

    #[test]
    fn lists_contents() {
        let mut armory = Armory::default();
        armory.add(Weapon::new("One", 100, 50)).unwrap();
        assert_eq!(armory.to_string(), "Armory contents:\n- Weapon: One, Damage: 100\n");
        assert_eq!(armory.strongest().map(|w| w.name.as_str()), Some("One"));
    }
}
