//! Game events emitted while a battle unfolds.

use core::fmt;

/// One entry of the combat log.
///
/// The `Display` impl renders the line written to the log file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    MonsterAppeared {
        monster: String,
    },
    Attacked {
        attacker: String,
        target: String,
        damage: u32,
    },
    Healed {
        name: String,
        amount: u32,
    },
    PotionUsed {
        name: String,
        health: u32,
    },
    ExperienceGained {
        name: String,
        amount: u32,
    },
    LeveledUp {
        name: String,
        level: u32,
    },
    ItemLooted {
        name: String,
        item: String,
    },
    Victory {
        name: String,
        monster: String,
    },
    Defeat {
        name: String,
        monster: String,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonsterAppeared { monster } => write!(f, "{monster} appears"),
            Self::Attacked {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} attacks {target} for {damage}"),
            Self::Healed { name, amount } => write!(f, "{name} restores {amount} HP"),
            Self::PotionUsed { name, health } => {
                write!(f, "{name} drinks a potion, HP = {health}")
            }
            Self::ExperienceGained { name, amount } => write!(f, "{name} gains {amount} XP"),
            Self::LeveledUp { name, level } => write!(f, "{name} reaches level {level}"),
            Self::ItemLooted { name, item } => write!(f, "{name} loots {item}"),
            Self::Victory { name, monster } => write!(f, "{name} defeats {monster}"),
            Self::Defeat { name, monster } => write!(f, "{name} falls to {monster}"),
        }
    }
}
