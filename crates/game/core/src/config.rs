/// Game configuration constants and tunable combat rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Damage dealt when attack does not exceed the target's defense.
    pub minimum_damage: u32,
    /// Experience needed for one level.
    pub level_up_threshold: u32,
    /// HP restored by a single Health Potion.
    pub potion_heal: u32,
    /// Experience awarded for winning a battle.
    pub victory_experience: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Healing never raises health above this value.
    pub const MAX_HEALTH: u32 = 100;
    pub const MAX_WEAPON_SLOTS: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MINIMUM_DAMAGE: u32 = 1;
    pub const DEFAULT_LEVEL_UP_THRESHOLD: u32 = 100;
    pub const DEFAULT_POTION_HEAL: u32 = 20;
    pub const DEFAULT_VICTORY_EXPERIENCE: u32 = 50;

    pub fn new() -> Self {
        Self {
            minimum_damage: Self::DEFAULT_MINIMUM_DAMAGE,
            level_up_threshold: Self::DEFAULT_LEVEL_UP_THRESHOLD,
            potion_heal: Self::DEFAULT_POTION_HEAL,
            victory_experience: Self::DEFAULT_VICTORY_EXPERIENCE,
        }
    }

    #[must_use]
    pub fn with_minimum_damage(mut self, minimum_damage: u32) -> Self {
        self.minimum_damage = minimum_damage;
        self
    }

    /// A threshold of 0 is treated as 1 so levelling always terminates.
    #[must_use]
    pub fn with_level_up_threshold(mut self, threshold: u32) -> Self {
        self.level_up_threshold = threshold.max(1);
        self
    }

    #[must_use]
    pub fn with_potion_heal(mut self, potion_heal: u32) -> Self {
        self.potion_heal = potion_heal;
        self
    }

    #[must_use]
    pub fn with_victory_experience(mut self, victory_experience: u32) -> Self {
        self.victory_experience = victory_experience;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
