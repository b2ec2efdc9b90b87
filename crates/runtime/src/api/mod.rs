//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the session loop can stay focused on battle orchestration.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, AlwaysAttack, BattleAction, CautiousProvider, ScriptedProvider};
