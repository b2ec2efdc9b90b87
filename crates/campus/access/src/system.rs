//! The access control system: users, guarded resources and their files.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::{AccessError, Result};
use crate::resource::{Guarded, Resource};
use crate::user::{User, UserId};

/// Registry of users and the resources they may enter.
///
/// Generic over the guarded type so alternative permission rules can be
/// plugged in; the default is the plain level-threshold [`Resource`].
///
/// User ids are not required to be unique. Lookups by id resolve to the first
/// user registered with that id.
#[derive(Debug)]
pub struct AccessControlSystem<R: Guarded = Resource> {
    users: Vec<User>,
    resources: Vec<R>,
}

impl<R: Guarded> Default for AccessControlSystem<R> {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            resources: Vec::new(),
        }
    }
}

impl<R: Guarded> AccessControlSystem<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn add_resource(&mut self, resource: R) {
        self.resources.push(resource);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn resources(&self) -> &[R] {
        &self.resources
    }

    pub fn resource(&self, name: &str) -> Option<&R> {
        self.resources.iter().find(|r| r.name() == name)
    }

    /// Whether the user with `id` may enter the resource called `resource`.
    pub fn check_access(&self, id: UserId, resource: &str) -> Result<bool> {
        let user = self
            .find_user_by_id(id)
            .ok_or(AccessError::UserNotFound { id })?;
        let resource = self
            .resource(resource)
            .ok_or_else(|| AccessError::ResourceNotFound {
                name: resource.to_string(),
            })?;

        let granted = resource.permits(user);
        tracing::debug!(
            "Access {} for {} ({}) to {}",
            if granted { "granted" } else { "denied" },
            user.name(),
            id,
            resource.name()
        );
        Ok(granted)
    }

    pub fn find_users_by_name(&self, name: &str) -> Vec<&User> {
        self.users.iter().filter(|u| u.name() == name).collect()
    }

    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    /// Stable ascending sort; users sharing a level keep their insertion order.
    pub fn sort_by_access_level(&mut self) {
        self.users.sort_by_key(User::access_level);
    }

    /// Write every user, one record per line, replacing `path`.
    ///
    /// All records are encoded before the file is touched, so an unencodable
    /// user leaves any previous file intact.
    pub fn save_users_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let lines = self
            .users
            .iter()
            .map(codec::encode_user)
            .collect::<Result<Vec<_>>>()?;

        write_lines(path, &lines)?;
        tracing::debug!("Saved {} users to {}", lines.len(), path.display());
        Ok(())
    }

    /// Append users read from `path`. Returns how many were added.
    ///
    /// Records with an unknown kind are skipped. Any other bad record aborts
    /// the load before a single user is added.
    pub fn load_users_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| AccessError::io(path, e))?;

        let mut loaded = Vec::new();
        for (index, record) in contents.lines().enumerate() {
            if record.trim().is_empty() {
                continue;
            }
            match codec::decode_user(record, index + 1) {
                Ok(user) => loaded.push(user),
                Err(AccessError::UnknownUserKind { line, kind }) => {
                    tracing::warn!(
                        "Skipping user with unknown kind {:?} on line {} of {}",
                        kind,
                        line,
                        path.display()
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let count = loaded.len();
        self.users.extend(loaded);
        tracing::debug!("Loaded {} users from {}", count, path.display());
        Ok(count)
    }

    pub fn save_resources_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let lines = self
            .resources
            .iter()
            .map(codec::encode_resource)
            .collect::<Result<Vec<_>>>()?;

        write_lines(path, &lines)?;
        tracing::debug!("Saved {} resources to {}", lines.len(), path.display());
        Ok(())
    }

    /// Append resources read from `path`. Returns how many were added.
    pub fn load_resources_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| AccessError::io(path, e))?;

        let loaded = contents
            .lines()
            .enumerate()
            .filter(|(_, record)| !record.trim().is_empty())
            .map(|(index, record)| codec::decode_resource(record, index + 1))
            .collect::<Result<Vec<R>>>()?;

        let count = loaded.len();
        self.resources.extend(loaded);
        tracing::debug!("Loaded {} resources from {}", count, path.display());
        Ok(count)
    }
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| AccessError::io(path, e))
}

impl<R: Guarded + fmt::Display> fmt::Display for AccessControlSystem<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Users:")?;
        for user in &self.users {
            writeln!(f, "  {}", user)?;
        }
        writeln!(f, "Resources:")?;
        for resource in &self.resources {
            writeln!(f, "  {}", resource)?;
        }
        Ok(())
    }
}
