//! Deterministic game rules and data types shared across the workspace.
//!
//! `game-core` defines characters, monsters, combat resolution, items and the
//! entity roster as pure APIs. It performs no I/O: persistence, logging sinks
//! and battle orchestration live in the `runtime` crate, and data-driven
//! content in `game-content`.
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod item;
pub mod monster;
pub mod roster;

pub use character::{Character, CharacterError, validate_name};
pub use combat::{AttackResult, GameEvent, calculate_damage, resolve_attack};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use item::{Armory, ArmoryError, HEALTH_POTION, Inventory, InventoryError, Weapon};
pub use monster::{Monster, MonsterKind, MonsterTemplate};
pub use roster::{Entity, EntityKind, Living, Queue, QueueError, Roster, RosterError};
