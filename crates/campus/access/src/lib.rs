//! Campus access control.
//!
//! Users of different roles hold a numeric access level; resources require a
//! minimum level. [`AccessControlSystem`] keeps both lists, answers access
//! queries and persists them as whitespace-delimited text files.
//!
//! The system is generic over [`Guarded`], so callers can introduce resources
//! with stricter rules than the level threshold of [`Resource`].
pub mod codec;
pub mod error;
pub mod resource;
pub mod system;
pub mod user;

pub use error::{AccessError, Result};
pub use resource::{Guarded, Resource};
pub use system::AccessControlSystem;
pub use user::{AccessLevel, Role, RoleKind, User, UserId};
