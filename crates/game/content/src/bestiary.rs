//! Monster templates indexed by kind.

use std::collections::BTreeMap;

use game_core::{CharacterError, ErrorSeverity, GameError, Monster, MonsterKind, MonsterTemplate};
use strum::IntoEnumIterator;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BestiaryError {
    #[error(transparent)]
    InvalidName(#[from] CharacterError),

    /// A monster spawned with 0 HP would be beaten before it could act.
    #[error("{kind} template has no health")]
    NoHealth { kind: MonsterKind },
}

impl GameError for BestiaryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidName(e) => e.error_code(),
            Self::NoHealth { .. } => "BESTIARY_NO_HEALTH",
        }
    }
}

/// Lookup table from monster kind to the monster it spawns.
///
/// Kinds without an explicit entry fall back to [`MonsterKind::template`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bestiary {
    /// Validated prototypes; spawning clones them.
    overrides: BTreeMap<MonsterKind, Monster>,
}

impl Bestiary {
    /// Bestiary with only the built-in templates.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Replace the template of `kind`.
    ///
    /// A template with an unstorable name or no health is rejected here
    /// rather than mid-battle.
    pub fn insert(
        &mut self,
        kind: MonsterKind,
        template: MonsterTemplate,
    ) -> Result<(), BestiaryError> {
        if template.health == 0 {
            return Err(BestiaryError::NoHealth { kind });
        }
        let prototype = Monster::from_template(kind, &template)?;
        self.overrides.insert(kind, prototype);
        Ok(())
    }

    pub fn template(&self, kind: MonsterKind) -> MonsterTemplate {
        match self.overrides.get(&kind) {
            Some(prototype) => {
                let body = prototype.body();
                MonsterTemplate {
                    name: body.name().to_string(),
                    health: body.health(),
                    attack: body.attack(),
                    defense: body.defense(),
                }
            }
            None => kind.template(),
        }
    }

    pub fn spawn(&self, kind: MonsterKind) -> Monster {
        self.overrides
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Monster::spawn(kind))
    }

    /// Every kind with its effective template, in declaration order.
    pub fn entries(&self) -> Vec<(MonsterKind, MonsterTemplate)> {
        MonsterKind::iter()
            .map(|kind| (kind, self.template(kind)))
            .collect()
    }

    pub fn is_overridden(&self, kind: MonsterKind) -> bool {
        self.overrides.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_falls_back_to_core_templates() {
        let bestiary = Bestiary::builtin();
        assert_eq!(bestiary.template(MonsterKind::Goblin).health, 30);
        assert_eq!(bestiary.entries().len(), 4);
    }

    #[test]
    fn override_changes_spawned_stats() {
        let mut bestiary = Bestiary::builtin();
        bestiary
            .insert(
                MonsterKind::Goblin,
                MonsterTemplate {
                    name: "GoblinChief".into(),
                    health: 60,
                    attack: 14,
                    defense: 6,
                },
            )
            .unwrap();

        let chief = bestiary.spawn(MonsterKind::Goblin);
        assert_eq!(chief.name(), "GoblinChief");
        assert_eq!(chief.body().health(), 60);
        assert_eq!(bestiary.template(MonsterKind::Goblin).attack, 14);
        assert!(bestiary.is_overridden(MonsterKind::Goblin));
        assert!(!bestiary.is_overridden(MonsterKind::Dragon));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let mut bestiary = Bestiary::builtin();
        let err = bestiary.insert(
            MonsterKind::Orc,
            MonsterTemplate {
                name: "Big Orc".into(),
                health: 1,
                attack: 1,
                defense: 1,
            },
        );
        assert!(matches!(err, Err(BestiaryError::InvalidName(_))));
        assert!(!bestiary.is_overridden(MonsterKind::Orc));
    }

    #[test]
    fn dead_template_is_rejected() {
        let mut bestiary = Bestiary::builtin();
        let err = bestiary
            .insert(
                MonsterKind::Goblin,
                MonsterTemplate {
                    name: "Corpse".into(),
                    health: 0,
                    attack: 10,
                    defense: 5,
                },
            )
            .unwrap_err();

        assert_eq!(
            err,
            BestiaryError::NoHealth {
                kind: MonsterKind::Goblin
            }
        );
        assert_eq!(err.error_code(), "BESTIARY_NO_HEALTH");
        assert_eq!(bestiary.spawn(MonsterKind::Goblin).body().health(), 30);
    }
}
