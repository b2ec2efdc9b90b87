//! Combat result types and attack resolution.

use crate::character::Character;
use crate::config::GameConfig;

use super::damage::calculate_damage;

/// Result of a single resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Damage dealt to the defender.
    pub damage: u32,
    /// Defender's health after the hit.
    pub remaining_health: u32,
    /// Whether the hit brought the defender to 0 HP.
    pub defeated: bool,
}

/// Resolve one attack: compute the damage and apply it to the defender.
pub fn resolve_attack(
    attacker: &Character,
    defender: &mut Character,
    config: &GameConfig,
) -> AttackResult {
    let damage = calculate_damage(attacker, defender, config);
    defender.take_damage(damage);

    AttackResult {
        damage,
        remaining_health: defender.health(),
        defeated: defender.is_dead(),
    }
}
