//! Combat characters shared by heroes and monsters.

use core::fmt;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while constructing or renaming a character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterError {
    #[error("character name cannot be empty")]
    EmptyName,

    /// Names are stored in whitespace-delimited save files.
    #[error("character name {name:?} must not contain whitespace")]
    WhitespaceInName { name: String },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "CHARACTER_EMPTY_NAME",
            Self::WhitespaceInName { .. } => "CHARACTER_WHITESPACE_IN_NAME",
        }
    }
}

/// Checks a name against the rules every persisted character obeys.
pub fn validate_name(name: &str) -> Result<(), CharacterError> {
    if name.is_empty() {
        return Err(CharacterError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(CharacterError::WhitespaceInName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A fighter with health, offensive and defensive stats, and progression.
///
/// Level starts at 1 and experience at 0. Health never drops below 0 and
/// healing never raises it above [`GameConfig::MAX_HEALTH`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    health: u32,
    attack: u32,
    defense: u32,
    level: u32,
    experience: u32,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
    ) -> Result<Self, CharacterError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::unchecked(name, health, attack, defense))
    }

    pub(crate) fn unchecked(name: String, health: u32, attack: u32, defense: u32) -> Self {
        Self {
            name,
            health,
            attack,
            defense,
            level: 1,
            experience: 0,
        }
    }

    /// Rebuilds a character with explicit progression, as read from a save.
    pub fn restore(
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
        level: u32,
        experience: u32,
    ) -> Result<Self, CharacterError> {
        let mut character = Self::new(name, health, attack, defense)?;
        character.level = level;
        character.experience = experience;
        Ok(character)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), CharacterError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Loose comparison on name and health only; `==` compares every stat.
    pub fn same_identity(&self, other: &Character) -> bool {
        self.name == other.name && self.health == other.health
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Reduces health by `damage`, clamped to 0.
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Restores up to `amount` HP without exceeding the cap.
    ///
    /// Returns the HP actually restored. Characters already above the cap
    /// (e.g. a freshly spawned dragon) are left untouched.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if amount == 0 || self.health >= GameConfig::MAX_HEALTH {
            return 0;
        }
        let healed = self
            .health
            .saturating_add(amount)
            .min(GameConfig::MAX_HEALTH);
        let restored = healed - self.health;
        self.health = healed;
        restored
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32, config: &GameConfig) -> u32 {
        let threshold = config.level_up_threshold.max(1);
        let total = self.experience.saturating_add(amount);
        self.experience = total % threshold;

        let start = self.level;
        self.level = start.saturating_add(total / threshold);
        self.level - start
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, HP: {}, Attack: {}, Defense: {}, Level: {}, XP: {}",
            self.name, self.health, self.attack, self.defense, self.level, self.experience
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        Character::new("Hero", 100, 20, 10).unwrap()
    }

    #[test]
    fn new_character_starts_at_level_one() {
        let hero = hero();
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.experience(), 0);
        assert!(!hero.is_dead());
    }

    #[test]
    fn rejects_empty_and_spaced_names() {
        assert_eq!(
            Character::new("", 10, 1, 1).unwrap_err(),
            CharacterError::EmptyName
        );
        let err = Character::new("Sir Hero", 10, 1, 1).unwrap_err();
        assert!(matches!(err, CharacterError::WhitespaceInName { .. }));
        assert_eq!(err.error_code(), "CHARACTER_WHITESPACE_IN_NAME");
        assert!(!err.severity().is_recoverable());
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut hero = hero();
        hero.take_damage(250);
        assert_eq!(hero.health(), 0);
        assert!(hero.is_dead());
    }

    #[test]
    fn heal_is_capped() {
        let mut hero = hero();
        hero.take_damage(50);
        assert_eq!(hero.heal(1000), 50);
        assert_eq!(hero.health(), GameConfig::MAX_HEALTH);
        assert_eq!(hero.heal(5), 0);
    }

    #[test]
    fn healing_zero_changes_nothing() {
        let mut hero = hero();
        hero.take_damage(30);
        assert_eq!(hero.heal(0), 0);
        assert_eq!(hero.health(), 70);
    }

    #[test]
    fn heal_does_not_shrink_oversized_health() {
        let mut dragon = Character::new("Dragon", 200, 40, 20).unwrap();
        assert_eq!(dragon.heal(10), 0);
        assert_eq!(dragon.health(), 200);
    }

    #[test]
    fn experience_levels_up_and_carries_remainder() {
        let config = GameConfig::default();
        let mut hero = hero();

        assert_eq!(hero.gain_experience(50, &config), 0);
        assert_eq!(hero.gain_experience(70, &config), 1);
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.experience(), 20);

        assert_eq!(hero.gain_experience(250, &config), 2);
        assert_eq!(hero.level(), 4);
        assert_eq!(hero.experience(), 70);
    }

    #[test]
    fn huge_grants_level_up_in_one_step() {
        let config = GameConfig::default().with_level_up_threshold(1);
        let mut hero = hero();

        assert_eq!(hero.gain_experience(u32::MAX, &config), u32::MAX - 1);
        assert_eq!(hero.level(), u32::MAX);
        assert_eq!(hero.experience(), 0);

        let config = GameConfig::default().with_level_up_threshold(7);
        let mut hero = self::hero();
        assert_eq!(hero.gain_experience(30, &config), 4);
        assert_eq!(hero.level(), 5);
        assert_eq!(hero.experience(), 2);
    }

    #[test]
    fn identity_ignores_progression() {
        let mut veteran = hero();
        veteran.gain_experience(150, &GameConfig::default());

        assert!(veteran.same_identity(&hero()));
        assert_ne!(veteran, hero());

        veteran.take_damage(1);
        assert!(!veteran.same_identity(&hero()));
    }

    #[test]
    fn display_lists_every_stat() {
        assert_eq!(
            hero().to_string(),
            "Name: Hero, HP: 100, Attack: 20, Defense: 10, Level: 1, XP: 0"
        );
    }
}
