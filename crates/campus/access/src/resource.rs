//! Guarded resources and the permission check.

use std::fmt;

use crate::error::{AccessError, Result};
use crate::user::{AccessLevel, User};

/// Anything an [`AccessControlSystem`](crate::AccessControlSystem) can guard.
///
/// Implementors describe themselves as a name plus a required level, which is
/// also how they are stored on disk. The default permission check admits
/// users whose level is at least the required level; implementors may tighten
/// it further.
pub trait Guarded: Sized {
    fn name(&self) -> &str;

    fn required_access(&self) -> AccessLevel;

    fn permits(&self, user: &User) -> bool {
        user.access_level() >= self.required_access()
    }

    /// Rebuild a resource from a stored record.
    fn from_record(name: String, required_access: AccessLevel) -> Result<Self>;
}

/// A named room, archive or service with a minimum clearance.
///
/// # Invariants
///
/// - `name` is never empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    name: String,
    required_access: AccessLevel,
}

impl Resource {
    pub fn new(name: impl Into<String>, required_access: u32) -> Result<Self> {
        Self::from_record(name.into(), AccessLevel(required_access))
    }
}

impl Guarded for Resource {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_access(&self) -> AccessLevel {
        self.required_access
    }

    fn from_record(name: String, required_access: AccessLevel) -> Result<Self> {
        if name.is_empty() {
            return Err(AccessError::EmptyResourceName);
        }
        Ok(Self {
            name,
            required_access,
        })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resource: {}, Required access level: {}",
            self.name, self.required_access
        )
    }
}
