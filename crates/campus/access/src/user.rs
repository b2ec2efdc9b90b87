//! Campus users and their roles.

use std::fmt;
use std::str::FromStr;

use crate::error::{AccessError, Result};

/// Numeric user identifier. Not required to be unique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Clearance level. Higher levels open more resources; negative levels do not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccessLevel(pub u32);

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccessLevel {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(AccessLevel)
            .map_err(|_| AccessError::InvalidAccessLevel {
                value: s.to_string(),
            })
    }
}

/// What a user is on campus, with the one attribute each role carries.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[strum_discriminants(name(RoleKind), derive(Hash, strum::Display, strum::EnumString))]
pub enum Role {
    Student { group: String },
    Teacher { department: String },
    Administrator { office: String },
}

impl Role {
    pub fn from_parts(kind: RoleKind, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match kind {
            RoleKind::Student => Self::Student { group: detail },
            RoleKind::Teacher => Self::Teacher { department: detail },
            RoleKind::Administrator => Self::Administrator { office: detail },
        }
    }

    pub fn kind(&self) -> RoleKind {
        RoleKind::from(self)
    }

    /// The role's attribute: group, department or office.
    pub fn detail(&self) -> &str {
        match self {
            Self::Student { group } => group,
            Self::Teacher { department } => department,
            Self::Administrator { office } => office,
        }
    }

    pub fn detail_label(&self) -> &'static str {
        match self {
            Self::Student { .. } => "Group",
            Self::Teacher { .. } => "Department",
            Self::Administrator { .. } => "Office",
        }
    }
}

/// A campus user.
///
/// # Invariants
///
/// - `name` is never empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    name: String,
    id: UserId,
    access_level: AccessLevel,
    role: Role,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        id: UserId,
        access_level: AccessLevel,
        role: Role,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AccessError::EmptyUserName);
        }
        Ok(Self {
            name,
            id,
            access_level,
            role,
        })
    }

    pub fn student(
        name: impl Into<String>,
        id: u32,
        access_level: u32,
        group: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            name,
            UserId(id),
            AccessLevel(access_level),
            Role::Student {
                group: group.into(),
            },
        )
    }

    pub fn teacher(
        name: impl Into<String>,
        id: u32,
        access_level: u32,
        department: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            name,
            UserId(id),
            AccessLevel(access_level),
            Role::Teacher {
                department: department.into(),
            },
        )
    }

    pub fn administrator(
        name: impl Into<String>,
        id: u32,
        access_level: u32,
        office: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            name,
            UserId(id),
            AccessLevel(access_level),
            Role::Administrator {
                office: office.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(AccessError::EmptyUserName);
        }
        self.name = name;
        Ok(())
    }

    pub fn set_access_level(&mut self, level: AccessLevel) {
        self.access_level = level;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, ID: {}, Access level: {}, {}: {} ({})",
            self.name,
            self.id.0,
            self.access_level,
            self.role.detail_label(),
            self.role.detail(),
            self.role.kind()
        )
    }
}
