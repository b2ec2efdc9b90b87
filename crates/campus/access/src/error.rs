//! Error types raised by the access control system.

use std::path::PathBuf;

use thiserror::Error;

use crate::user::UserId;

/// Errors surfaced while building, querying or persisting an access system.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("user name cannot be empty")]
    EmptyUserName,

    #[error("resource name cannot be empty")]
    EmptyResourceName,

    #[error("invalid access level: {value:?}")]
    InvalidAccessLevel { value: String },

    #[error("user {id} not found")]
    UserNotFound { id: UserId },

    #[error("resource {name:?} not found")]
    ResourceNotFound { name: String },

    #[error("unknown user kind {kind:?} on line {line}")]
    UnknownUserKind { line: usize, kind: String },

    /// Records are whitespace-delimited, so fields must be single non-empty words.
    #[error("{field} {value:?} cannot be stored in a whitespace-delimited record")]
    UnencodableField { field: &'static str, value: String },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AccessError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyUserName => "ACCESS_EMPTY_USER_NAME",
            Self::EmptyResourceName => "ACCESS_EMPTY_RESOURCE_NAME",
            Self::InvalidAccessLevel { .. } => "ACCESS_INVALID_LEVEL",
            Self::UserNotFound { .. } => "ACCESS_USER_NOT_FOUND",
            Self::ResourceNotFound { .. } => "ACCESS_RESOURCE_NOT_FOUND",
            Self::UnknownUserKind { .. } => "ACCESS_UNKNOWN_USER_KIND",
            Self::UnencodableField { .. } => "ACCESS_UNENCODABLE_FIELD",
            Self::MalformedRecord { .. } => "ACCESS_MALFORMED_RECORD",
            Self::Io { .. } => "ACCESS_IO",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessError>;
