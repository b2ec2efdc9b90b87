//! Session orchestration and persistence for the game labs.
//!
//! This crate wires game-core's rules into a playable session: action
//! providers choose the player's moves, the session runs battles round by
//! round, and repositories persist saves, rosters and the combat log.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the battle loop
//! - [`api`] exposes the error and provider types clients interact with
//! - [`repository`] provides save, log and roster storage
pub mod api;
pub mod repository;
pub mod session;

pub use api::{
    ActionProvider, AlwaysAttack, BattleAction, CautiousProvider, Result, RuntimeError,
    ScriptedProvider,
};
pub use repository::{
    BinarySaveRepository, CombatLog, FileCombatLog, InMemorySaveRepository, MemoryCombatLog,
    RepositoryError, SaveGame, SaveRepository, TextSaveRepository, load_roster, save_roster,
};
pub use session::{BattleReport, GameSession, PotionOutcome};
