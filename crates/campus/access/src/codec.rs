//! Line codec for the flat-text user and resource files.
//!
//! # File Format
//!
//! Users, one per line:
//! ```text
//! <Kind> <name> <id> <access_level> <detail>
//! Student Ivan 1 1 G101
//! ```
//!
//! Resources, one per line:
//! ```text
//! <name> <required_access>
//! Library 1
//! ```
//!
//! Fields are separated by single spaces, so every stored field must be a
//! single non-empty word.

use crate::error::{AccessError, Result};
use crate::resource::Guarded;
use crate::user::{AccessLevel, Role, RoleKind, User, UserId};

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(AccessError::UnencodableField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn encode_user(user: &User) -> Result<String> {
    let role = user.role();
    check_field("user name", user.name())?;
    check_field(role.detail_label(), role.detail())?;

    Ok(format!(
        "{} {} {} {} {}",
        role.kind(),
        user.name(),
        user.id().0,
        user.access_level(),
        role.detail()
    ))
}

/// Decode one user line. `line` is the 1-based line number used in errors.
///
/// An unrecognised kind yields [`AccessError::UnknownUserKind`] so callers can
/// decide whether to skip the record.
pub fn decode_user(record: &str, line: usize) -> Result<User> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    let Some(&tag) = fields.first() else {
        return Err(malformed(line, "empty record".to_string()));
    };

    // The kind decides how the rest of the record is read, so it is
    // checked before the field count.
    let kind: RoleKind = tag.parse().map_err(|_| AccessError::UnknownUserKind {
        line,
        kind: tag.to_string(),
    })?;
    check_count(&fields, 5, line)?;

    let id = fields[2]
        .parse::<u32>()
        .map(UserId)
        .map_err(|_| malformed(line, format!("invalid user id {:?}", fields[2])))?;
    let level: AccessLevel = fields[3]
        .parse()
        .map_err(|e: AccessError| malformed(line, e.to_string()))?;

    User::new(fields[1], id, level, Role::from_parts(kind, fields[4]))
}

pub fn encode_resource<R: Guarded>(resource: &R) -> Result<String> {
    check_field("resource name", resource.name())?;
    Ok(format!("{} {}", resource.name(), resource.required_access()))
}

pub fn decode_resource<R: Guarded>(record: &str, line: usize) -> Result<R> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    check_count(&fields, 2, line)?;
    let level: AccessLevel = fields[1]
        .parse()
        .map_err(|e: AccessError| malformed(line, e.to_string()))?;
    R::from_record(fields[0].to_string(), level)
}

fn check_count(fields: &[&str], expected: usize, line: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(malformed(
            line,
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    Ok(())
}

fn malformed(line: usize, reason: String) -> AccessError {
    AccessError::MalformedRecord { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;

    #[test]
    fn user_line_layout() {
        let olga = User::administrator("Olga", 3, 5, "Room200").unwrap();
        let line = encode_user(&olga).unwrap();
        assert_eq!(line, "Administrator Olga 3 5 Room200");
        assert_eq!(decode_user(&line, 1).unwrap(), olga);
    }

    #[test]
    fn refuses_to_encode_spaced_fields() {
        let user = User::teacher("Anna Maria", 2, 2, "CS").unwrap();
        assert!(matches!(
            encode_user(&user),
            Err(AccessError::UnencodableField { field: "user name", .. })
        ));

        let user = User::student("Ivan", 1, 1, "").unwrap();
        assert!(matches!(
            encode_user(&user),
            Err(AccessError::UnencodableField { field: "Group", .. })
        ));
    }

    #[test]
    fn reports_bad_numbers_with_line() {
        let err = decode_user("Student Ivan one 1 G101", 7).unwrap_err();
        assert!(matches!(err, AccessError::MalformedRecord { line: 7, .. }));

        let err = decode_user("Student Ivan 1 -3 G101", 2).unwrap_err();
        assert!(matches!(err, AccessError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn unknown_kind_is_distinguishable() {
        let err = decode_user("Janitor Petr 9 0 Basement", 4).unwrap_err();
        assert!(matches!(err, AccessError::UnknownUserKind { line: 4, .. }));

        // Unknown kinds win over a wrong field count.
        let err = decode_user("Guest Bob 7 0", 5).unwrap_err();
        assert!(matches!(err, AccessError::UnknownUserKind { line: 5, .. }));

        let err = decode_user("Student Petr 4 1", 6).unwrap_err();
        assert!(matches!(err, AccessError::MalformedRecord { line: 6, .. }));
    }

    #[test]
    fn resource_line_layout() {
        let archive = Resource::new("Archive", 4).unwrap();
        let line = encode_resource(&archive).unwrap();
        assert_eq!(line, "Archive 4");
        assert_eq!(decode_resource::<Resource>(&line, 1).unwrap(), archive);
        assert!(decode_resource::<Resource>("Archive", 1).is_err());
    }
}
