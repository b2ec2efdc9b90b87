//! Turn-based game session: one player, an inventory and a combat log.
//!
//! A [`GameSession`] drives battles round by round. Each round the player
//! acts first (attack or potion, as chosen by an [`ActionProvider`]); if the
//! monster survives it strikes back. Every step is written to the session's
//! [`CombatLog`].

use std::fmt;

use game_core::{
    Character, GameConfig, GameEvent, HEALTH_POTION, Inventory, Monster, resolve_attack,
};
use serde::{Deserialize, Serialize};

use crate::api::{ActionProvider, BattleAction, Result, RuntimeError};
use crate::repository::{CombatLog, SaveGame};

/// Outcome of drinking a potion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PotionOutcome {
    Healed { restored: u32, health: u32 },
    NoPotion,
}

/// Summary of a won battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub monster: String,
    pub rounds: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub experience_gained: u32,
    pub levels_gained: u32,
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Defeated {} in {} rounds (dealt {}, took {}, +{} XP",
            self.monster, self.rounds, self.damage_dealt, self.damage_taken, self.experience_gained
        )?;
        if self.levels_gained > 0 {
            write!(f, ", +{} level", self.levels_gained)?;
            if self.levels_gained > 1 {
                write!(f, "s")?;
            }
        }
        write!(f, ")")
    }
}

pub struct GameSession<L> {
    player: Character,
    inventory: Inventory,
    config: GameConfig,
    log: L,
}

impl<L: CombatLog> GameSession<L> {
    pub const PLAYER_HEALTH: u32 = 100;
    pub const PLAYER_ATTACK: u32 = 20;
    pub const PLAYER_DEFENSE: u32 = 10;

    /// Upper bound on rounds per battle. Only reachable when neither side can
    /// deal damage (a minimum damage of 0).
    pub const MAX_ROUNDS: u32 = 10_000;

    /// Start a fresh session. The player begins with one Health Potion.
    pub fn new(name: impl Into<String>, config: GameConfig, log: L) -> Result<Self> {
        let player = Character::new(
            name,
            Self::PLAYER_HEALTH,
            Self::PLAYER_ATTACK,
            Self::PLAYER_DEFENSE,
        )?;
        let mut inventory = Inventory::new();
        inventory.add(HEALTH_POTION)?;

        tracing::info!("Started session for {}", player.name());
        Ok(Self {
            player,
            inventory,
            config,
            log,
        })
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn save_game(&self) -> SaveGame {
        SaveGame::new(self.player.clone(), self.inventory.clone())
    }

    /// Replace the player and inventory with a saved game.
    pub fn restore(&mut self, save: SaveGame) {
        self.player = save.player;
        self.inventory = save.inventory;
        tracing::info!("Restored session for {}", self.player.name());
    }

    /// Drink one Health Potion, if the inventory holds any.
    ///
    /// The potion is consumed even when the player is already at full health.
    pub fn use_potion(&mut self) -> Result<PotionOutcome> {
        if !self.inventory.remove(HEALTH_POTION) {
            return Ok(PotionOutcome::NoPotion);
        }

        let restored = self.player.heal(self.config.potion_heal);
        let health = self.player.health();
        let name = self.player.name().to_string();

        self.log.record(&GameEvent::Healed {
            name: name.clone(),
            amount: restored,
        })?;
        self.log.record(&GameEvent::PotionUsed { name, health })?;

        Ok(PotionOutcome::Healed { restored, health })
    }

    /// Fight `monster` to the end.
    ///
    /// On victory the player earns the configured experience and loots a
    /// Health Potion. If the player dies the error carries their name; the
    /// session keeps the dead player so callers can still inspect it.
    pub fn battle(
        &mut self,
        mut monster: Monster,
        provider: &mut dyn ActionProvider,
    ) -> Result<BattleReport> {
        let mut report = BattleReport {
            monster: monster.name().to_string(),
            ..BattleReport::default()
        };
        self.log.record(&GameEvent::MonsterAppeared {
            monster: report.monster.clone(),
        })?;
        tracing::info!("{} encounters {}", self.player.name(), report.monster);

        while !self.player.is_dead() && !monster.is_dead() {
            if report.rounds == Self::MAX_ROUNDS {
                return Err(RuntimeError::Stalemate {
                    monster: report.monster,
                    rounds: report.rounds,
                });
            }
            report.rounds += 1;

            match provider.next_action(&self.player, &monster, &self.inventory) {
                BattleAction::UsePotion => {
                    if self.use_potion()? == PotionOutcome::NoPotion {
                        tracing::debug!("{} has no potion to drink", self.player.name());
                    }
                }
                BattleAction::Attack => {
                    let hit = resolve_attack(&self.player, monster.body_mut(), &self.config);
                    report.damage_dealt += hit.damage;
                    self.log.record(&GameEvent::Attacked {
                        attacker: self.player.name().to_string(),
                        target: report.monster.clone(),
                        damage: hit.damage,
                    })?;
                }
            }

            if monster.is_dead() {
                break;
            }

            let hit = resolve_attack(monster.body(), &mut self.player, &self.config);
            report.damage_taken += hit.damage;
            self.log.record(&GameEvent::Attacked {
                attacker: report.monster.clone(),
                target: self.player.name().to_string(),
                damage: hit.damage,
            })?;
        }

        let name = self.player.name().to_string();

        if self.player.is_dead() {
            self.log.record(&GameEvent::Defeat {
                name: name.clone(),
                monster: report.monster.clone(),
            })?;
            tracing::info!("{} was slain by {}", name, report.monster);
            return Err(RuntimeError::PlayerDied { name });
        }

        self.log.record(&GameEvent::Victory {
            name: name.clone(),
            monster: report.monster.clone(),
        })?;
        self.reward(&name, &mut report)?;

        tracing::info!("{}", report);
        Ok(report)
    }

    fn reward(&mut self, name: &str, report: &mut BattleReport) -> Result<()> {
        let experience = self.config.victory_experience;
        let start_level = self.player.level();
        let levels = self.player.gain_experience(experience, &self.config);

        report.experience_gained = experience;
        report.levels_gained = levels;

        self.log.record(&GameEvent::ExperienceGained {
            name: name.to_string(),
            amount: experience,
        })?;
        for step in 1..=levels {
            self.log.record(&GameEvent::LeveledUp {
                name: name.to_string(),
                level: start_level.saturating_add(step),
            })?;
        }

        self.inventory.add(HEALTH_POTION)?;
        self.log.record(&GameEvent::ItemLooted {
            name: name.to_string(),
            item: HEALTH_POTION.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use game_core::{MonsterKind, MonsterTemplate};

    use super::*;
    use crate::api::{AlwaysAttack, CautiousProvider, ScriptedProvider};
    use crate::repository::MemoryCombatLog;

    fn session() -> GameSession<MemoryCombatLog> {
        GameSession::new("Hero", GameConfig::default(), MemoryCombatLog::new()).unwrap()
    }

    #[test]
    fn starts_with_one_potion() {
        let session = session();
        assert_eq!(session.player().health(), 100);
        assert_eq!(session.inventory().count_of(HEALTH_POTION), 1);
    }

    #[test]
    fn rejects_invalid_player_name() {
        let result = GameSession::new("", GameConfig::default(), MemoryCombatLog::new());
        assert!(matches!(result, Err(RuntimeError::Character(_))));
    }

    #[test]
    fn goblin_falls_in_two_rounds() {
        let mut session = session();
        let report = session
            .battle(Monster::spawn(MonsterKind::Goblin), &mut AlwaysAttack)
            .unwrap();

        assert_eq!(report.rounds, 2);
        assert_eq!(report.damage_dealt, 30);
        // Goblin hits for max(10 - 10, 1) once before dying.
        assert_eq!(report.damage_taken, 1);
        assert_eq!(report.experience_gained, 50);
        assert_eq!(report.levels_gained, 0);

        assert_eq!(session.player().health(), 99);
        assert_eq!(session.player().experience(), 50);
        assert_eq!(session.inventory().count_of(HEALTH_POTION), 2);

        assert_eq!(
            session.log().lines(),
            [
                "Goblin appears",
                "Hero attacks Goblin for 15",
                "Goblin attacks Hero for 1",
                "Hero attacks Goblin for 15",
                "Hero defeats Goblin",
                "Hero gains 50 XP",
                "Hero loots Health Potion",
            ]
        );
    }

    #[test]
    fn second_victory_levels_up() {
        let mut session = session();
        session
            .battle(Monster::spawn(MonsterKind::Goblin), &mut AlwaysAttack)
            .unwrap();
        let report = session
            .battle(Monster::spawn(MonsterKind::Skeleton), &mut AlwaysAttack)
            .unwrap();

        assert_eq!(report.levels_gained, 1);
        assert_eq!(session.player().level(), 2);
        assert_eq!(session.player().experience(), 0);
        assert!(
            session
                .log()
                .events()
                .contains(&GameEvent::LeveledUp {
                    name: "Hero".into(),
                    level: 2
                })
        );
    }

    #[test]
    fn potion_heals_up_to_cap_and_is_consumed() {
        let mut session = session();
        session
            .battle(Monster::spawn(MonsterKind::Goblin), &mut AlwaysAttack)
            .unwrap();

        assert_eq!(
            session.use_potion().unwrap(),
            PotionOutcome::Healed {
                restored: 1,
                health: 100
            }
        );
        assert_eq!(
            session.use_potion().unwrap(),
            PotionOutcome::Healed {
                restored: 0,
                health: 100
            }
        );
        assert_eq!(session.use_potion().unwrap(), PotionOutcome::NoPotion);
    }

    #[test]
    fn cautious_player_drinks_mid_battle() {
        let mut session = session();
        let report = session
            .battle(Monster::spawn(MonsterKind::Orc), &mut CautiousProvider::new(90))
            .unwrap();

        // The orc hits for 5. Health drops to 85 after round three, the potion
        // brings it back to 100, and the orc falls on the seventh round.
        assert_eq!(report.rounds, 7);
        assert_eq!(report.damage_taken, 30);
        assert_eq!(session.player().health(), 85);
        assert_eq!(session.inventory().count_of(HEALTH_POTION), 1);

        let lines = session.log().lines();
        assert_eq!(
            lines.iter().filter(|l| l.contains("drinks a potion")).count(),
            1
        );
        assert!(lines.contains(&"Hero restores 15 HP".to_string()));
        assert!(lines.contains(&"Hero drinks a potion, HP = 100".to_string()));
    }

    #[test]
    fn dragon_kills_the_player() {
        let mut session = session();
        let mut provider = ScriptedProvider::new([BattleAction::UsePotion]);

        let err = session
            .battle(Monster::spawn(MonsterKind::Dragon), &mut provider)
            .unwrap_err();

        assert!(matches!(err, RuntimeError::PlayerDied { ref name } if name == "Hero"));
        assert!(session.player().is_dead());
        assert_eq!(
            session.log().events().last(),
            Some(&GameEvent::Defeat {
                name: "Hero".into(),
                monster: "Dragon".into()
            })
        );
    }

    #[test]
    fn harmless_fight_is_a_stalemate() {
        let config = GameConfig::default().with_minimum_damage(0);
        let mut session = GameSession::new("Hero", config, MemoryCombatLog::new()).unwrap();
        let template = MonsterTemplate {
            name: "Wall".into(),
            health: 50,
            attack: 0,
            defense: 100,
        };
        let wall = Monster::from_template(MonsterKind::Orc, &template).unwrap();

        let err = session.battle(wall, &mut AlwaysAttack).unwrap_err();
        assert!(matches!(err, RuntimeError::Stalemate { .. }));
    }

    #[test]
    fn save_and_restore() {
        let mut session = session();
        session
            .battle(Monster::spawn(MonsterKind::Goblin), &mut AlwaysAttack)
            .unwrap();
        let save = session.save_game();

        let mut fresh =
            GameSession::new("Newcomer", GameConfig::default(), MemoryCombatLog::new()).unwrap();
        fresh.restore(save.clone());
        assert_eq!(fresh.player().name(), "Hero");
        assert_eq!(fresh.save_game(), save);
    }
}
