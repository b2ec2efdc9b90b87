use core::fmt;

/// Role-specific data of a roster entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Player { level: u32 },
    Enemy { species: String },
}

/// A named entity with health; players carry a level, enemies a species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,
    pub health: u32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn player(name: impl Into<String>, health: u32, level: u32) -> Self {
        Self {
            name: name.into(),
            health,
            kind: EntityKind::Player { level },
        }
    }

    pub fn enemy(name: impl Into<String>, health: u32, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health,
            kind: EntityKind::Enemy {
                species: species.into(),
            },
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player { .. })
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, HP: {}", self.name, self.health)?;
        match &self.kind {
            EntityKind::Player { level } => write!(f, ", Level: {level}"),
            EntityKind::Enemy { species } => write!(f, ", Type: {species}"),
        }
    }
}
