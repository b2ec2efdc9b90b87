//! Scripted RPG campaign
//!
//! Goblin, save, reload into a fresh session, skeleton, then the dragon.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;

use game_content::{Bestiary, BestiaryLoader, ConfigLoader};
use game_core::{GameConfig, MonsterKind};
use runtime::{
    ActionProvider, AlwaysAttack, CautiousProvider, CombatLog, FileCombatLog, GameSession,
    RuntimeError, SaveRepository, TextSaveRepository,
};

use crate::config::ClientConfig;

/// Play the scripted campaign
#[derive(Parser)]
pub struct Rpg {
    /// Hero name (a single word)
    #[arg(short, long, default_value = "Hero")]
    name: String,

    /// RON file overriding built-in monster templates
    #[arg(long, value_name = "FILE")]
    bestiary: Option<PathBuf>,

    /// TOML file with game rules
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Save slot used between the two sessions
    #[arg(long, default_value = "save")]
    slot: String,

    /// Drink a potion whenever HP drops below this value
    #[arg(long, value_name = "HP")]
    cautious: Option<u32>,
}

impl Rpg {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let bestiary = match &self.bestiary {
            Some(path) => BestiaryLoader::load(path)
                .with_context(|| format!("Failed to load bestiary: {}", path.display()))?,
            None => Bestiary::builtin(),
        };
        let rules = match &self.rules {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load rules: {}", path.display()))?,
            None => GameConfig::default(),
        };
        let repo = TextSaveRepository::new(config.saves_dir())
            .context("Failed to open save directory")?;

        let mut provider: Box<dyn ActionProvider> = match self.cautious {
            Some(threshold) => Box::new(CautiousProvider::new(threshold)),
            None => Box::new(AlwaysAttack),
        };

        tracing::info!("Combat log: {}", config.combat_log.display());

        // ================================================================
        // First session
        // ================================================================
        let mut session = GameSession::new(&self.name, rules.clone(), open_log(config)?)
            .context("Failed to start session")?;
        println!("{}", style("=== Welcome to the RPG ===").bold().green());
        print_status(&session);

        if !fight(&mut session, &bestiary, MonsterKind::Goblin, provider.as_mut())? {
            return Ok(());
        }

        repo.save(&self.slot, &session.save_game())
            .with_context(|| format!("Failed to save slot {}", self.slot))?;
        println!(
            "{} {}",
            style("Saved to").cyan(),
            repo.slot_path(&self.slot)?.display()
        );
        drop(session);

        // ================================================================
        // Second session resumes from the save
        // ================================================================
        let mut session = GameSession::new(&self.name, rules, open_log(config)?)
            .context("Failed to start session")?;
        let save = repo
            .load(&self.slot)?
            .ok_or_else(|| anyhow!("Save slot {} is missing", self.slot))?;
        session.restore(save);
        println!("{} {}", style("Loaded slot").cyan(), self.slot);
        print_status(&session);

        if !fight(&mut session, &bestiary, MonsterKind::Skeleton, provider.as_mut())? {
            return Ok(());
        }
        fight(&mut session, &bestiary, MonsterKind::Dragon, provider.as_mut())?;

        Ok(())
    }
}

fn open_log(config: &ClientConfig) -> Result<FileCombatLog> {
    FileCombatLog::open(&config.combat_log).with_context(|| {
        format!(
            "Failed to open combat log: {}",
            config.combat_log.display()
        )
    })
}

/// Run one battle. Returns whether the hero survived; death is reported,
/// not propagated.
fn fight<L: CombatLog>(
    session: &mut GameSession<L>,
    bestiary: &Bestiary,
    kind: MonsterKind,
    provider: &mut dyn ActionProvider,
) -> Result<bool> {
    let monster = bestiary.spawn(kind);
    println!();
    println!("{} {}!", style("A wild").yellow(), style(monster.name()).bold());

    match session.battle(monster, provider) {
        Ok(report) => {
            println!("{}", style(&report).green());
            print_status(session);
            Ok(true)
        }
        Err(e @ RuntimeError::PlayerDied { .. }) => {
            eprintln!(
                "{} {}",
                style(format!("{e}!")).red().bold(),
                style(format!("[{}, {}]", e.error_code(), e.severity().as_str())).dim()
            );
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_status<L: CombatLog>(session: &GameSession<L>) {
    println!("{}", session.player());
    println!("{}", session.inventory());
}
