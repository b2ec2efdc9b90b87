//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `CharacterError`, `RosterError`) are defined in
//! their respective modules alongside the types they validate. This module holds
//! the shared classification used by all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same call may succeed later (e.g., an empty queue)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the operation ended the game (e.g., the player died)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after the state changes.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Fatal error - the session cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable `SCREAMING_SNAKE` code per variant
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
