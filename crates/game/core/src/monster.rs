//! Monster kinds and their base stat templates.

use crate::character::{Character, CharacterError};

/// The monster species the game knows how to spawn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum MonsterKind {
    Goblin,
    Skeleton,
    Orc,
    Dragon,
}

impl MonsterKind {
    /// Built-in stats for this kind. Content files may override them.
    pub fn template(self) -> MonsterTemplate {
        let (name, health, attack, defense) = match self {
            Self::Goblin => ("Goblin", 30, 10, 5),
            Self::Skeleton => ("Skeleton", 50, 15, 10),
            Self::Orc => ("Orc", 80, 15, 5),
            Self::Dragon => ("Dragon", 200, 40, 20),
        };
        MonsterTemplate {
            name: name.to_string(),
            health,
            attack,
            defense,
        }
    }
}

/// Base stats a monster is spawned with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
}

/// A spawned monster: its kind plus a character body that takes the hits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    kind: MonsterKind,
    body: Character,
}

impl Monster {
    /// Spawn a monster with the built-in template for `kind`.
    pub fn spawn(kind: MonsterKind) -> Self {
        let template = kind.template();
        // Built-in template names are single words.
        Self {
            kind,
            body: Character::unchecked(
                template.name,
                template.health,
                template.attack,
                template.defense,
            ),
        }
    }

    pub fn from_template(
        kind: MonsterKind,
        template: &MonsterTemplate,
    ) -> Result<Self, CharacterError> {
        let body = Character::new(
            template.name.clone(),
            template.health,
            template.attack,
            template.defense,
        )?;
        Ok(Self { kind, body })
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn body(&self) -> &Character {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Character {
        &mut self.body
    }

    pub fn is_dead(&self) -> bool {
        self.body.is_dead()
    }
}
