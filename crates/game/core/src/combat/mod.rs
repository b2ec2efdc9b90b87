//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and side-effect free apart from the
//! health of the defender passed in by the caller.
//!
//! # Core Functions
//!
//! - `calculate_damage`: attack minus defense, floored at the configured minimum
//! - `resolve_attack`: damage calculation + application in one step
//!
//! Every interesting step of a fight is described by a [`GameEvent`], which the
//! runtime forwards to its combat log.

pub mod damage;
pub mod event;
pub mod result;

pub use damage::calculate_damage;
pub use event::GameEvent;
pub use result::{AttackResult, resolve_attack};
