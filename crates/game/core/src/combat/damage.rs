//! Damage calculation.

use crate::character::Character;
use crate::config::GameConfig;

/// Calculate damage from one attack.
///
/// # Formula
///
/// ```text
/// raw_damage = attacker.attack - defender.defense   (saturating)
/// final_damage = max(raw_damage, minimum_damage)
/// ```
///
/// With the default rules every hit deals at least 1 damage; a configuration
/// with `minimum_damage = 0` lets a well-armoured defender shrug attacks off.
pub fn calculate_damage(attacker: &Character, defender: &Character, config: &GameConfig) -> u32 {
    attacker
        .attack()
        .saturating_sub(defender.defense())
        .max(config.minimum_damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(name: &str, attack: u32, defense: u32) -> Character {
        Character::new(name, 100, attack, defense).unwrap()
    }

    #[test]
    fn attack_minus_defense() {
        let config = GameConfig::default();
        let damage = calculate_damage(&fighter("Hero", 20, 10), &fighter("Goblin", 10, 5), &config);
        assert_eq!(damage, 15);
    }

    #[test]
    fn weak_attacks_still_chip() {
        let config = GameConfig::default();
        let goblin = fighter("Goblin", 10, 5);
        let dragon = fighter("Dragon", 40, 20);
        let damage = calculate_damage(&goblin, &dragon, &config);
        assert_eq!(damage, 1);
    }

    #[test]
    fn zero_minimum_allows_no_effect() {
        let config = GameConfig::default().with_minimum_damage(0);
        let goblin = fighter("Goblin", 10, 5);
        let dragon = fighter("Dragon", 40, 20);
        let damage = calculate_damage(&goblin, &dragon, &config);
        assert_eq!(damage, 0);
    }
}
