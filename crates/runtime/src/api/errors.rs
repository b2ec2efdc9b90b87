//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories and game-core validation so clients can
//! bubble them up with consistent context.
use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The player's health reached zero during a battle.
    #[error("{name} has died")]
    PlayerDied { name: String },

    /// Neither side could hurt the other within the round limit.
    #[error("battle against {monster} ended in a stalemate after {rounds} rounds")]
    Stalemate { monster: String, rounds: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid player")]
    Character(#[from] game_core::CharacterError),

    #[error("inventory update failed")]
    Inventory(#[from] game_core::InventoryError),
}

impl RuntimeError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerDied { .. } => "RUNTIME_PLAYER_DIED",
            Self::Stalemate { .. } => "RUNTIME_STALEMATE",
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::Character(_) => "RUNTIME_CHARACTER",
            Self::Inventory(_) => "RUNTIME_INVENTORY",
        }
    }

    /// Classifies the failure, deferring to game-core for wrapped errors.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PlayerDied { .. } | Self::Stalemate { .. } => ErrorSeverity::Fatal,
            Self::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Fatal,
            Self::Repository(_) => ErrorSeverity::Recoverable,
            Self::Character(e) => e.severity(),
            Self::Inventory(e) => e.severity(),
        }
    }
}
