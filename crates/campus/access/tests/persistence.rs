use std::fs;

use campus_access::{
    AccessControlSystem, AccessError, AccessLevel, Guarded, Resource, RoleKind, User, UserId,
};
use tempfile::TempDir;

fn campus() -> AccessControlSystem {
    let mut system = AccessControlSystem::new();
    system.add_user(User::student("Ivan", 1, 1, "G101").unwrap());
    system.add_user(User::teacher("Maria", 2, 2, "CS").unwrap());
    system.add_user(User::administrator("Olga", 3, 5, "Room200").unwrap());
    system.add_resource(Resource::new("Library", 1).unwrap());
    system.add_resource(Resource::new("Lab1", 2).unwrap());
    system.add_resource(Resource::new("Archive", 4).unwrap());
    system
}

#[test]
fn save_and_reload_into_fresh_system() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users.txt");
    let resources = dir.path().join("resources.txt");

    let original = campus();
    original.save_users_to_file(&users).unwrap();
    original.save_resources_to_file(&resources).unwrap();

    assert_eq!(
        fs::read_to_string(&users).unwrap(),
        "Student Ivan 1 1 G101\nTeacher Maria 2 2 CS\nAdministrator Olga 3 5 Room200\n"
    );
    assert_eq!(
        fs::read_to_string(&resources).unwrap(),
        "Library 1\nLab1 2\nArchive 4\n"
    );

    let mut restored = AccessControlSystem::<Resource>::new();
    assert_eq!(restored.load_users_from_file(&users).unwrap(), 3);
    assert_eq!(restored.load_resources_from_file(&resources).unwrap(), 3);

    assert_eq!(restored.users(), original.users());
    assert_eq!(restored.resources(), original.resources());

    let maria = restored.find_users_by_name("Maria");
    assert_eq!(maria.len(), 1);
    assert_eq!(maria[0].role().kind(), RoleKind::Teacher);

    assert!(restored.check_access(UserId(1), "Library").unwrap());
    assert!(!restored.check_access(UserId(1), "Lab1").unwrap());
    assert!(restored.check_access(UserId(3), "Archive").unwrap());
}

#[test]
fn loading_appends_and_skips_unknown_kinds() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users.txt");
    fs::write(
        &users,
        "Student Petr 4 1 G102\n\nJanitor Boris 5 0 Basement\nTeacher Anna 6 3 Math\n",
    )
    .unwrap();

    let mut system = campus();
    assert_eq!(system.load_users_from_file(&users).unwrap(), 2);

    let names: Vec<_> = system.users().iter().map(User::name).collect();
    assert_eq!(names, ["Ivan", "Maria", "Olga", "Petr", "Anna"]);
}

#[test]
fn unknown_kind_with_short_record_is_skipped() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users.txt");
    fs::write(&users, "Student Petr 4 1 G102\nGuest Bob 7 0\n").unwrap();

    let mut system = AccessControlSystem::<Resource>::new();
    assert_eq!(system.load_users_from_file(&users).unwrap(), 1);
    assert_eq!(system.users()[0].name(), "Petr");
}

#[test]
fn malformed_record_aborts_load() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users.txt");
    fs::write(&users, "Student Petr 4 1 G102\nTeacher Anna six 3 Math\n").unwrap();

    let mut system = AccessControlSystem::<Resource>::new();
    let err = system.load_users_from_file(&users).unwrap_err();

    assert!(matches!(err, AccessError::MalformedRecord { line: 2, .. }));
    assert!(system.users().is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut system = AccessControlSystem::<Resource>::new();

    let err = system
        .load_resources_from_file(dir.path().join("absent.txt"))
        .unwrap_err();
    assert!(matches!(err, AccessError::Io { .. }));
    assert_eq!(err.error_code(), "ACCESS_IO");
}

#[test]
fn unencodable_user_leaves_previous_file() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users.txt");

    campus().save_users_to_file(&users).unwrap();
    let before = fs::read_to_string(&users).unwrap();

    let mut system = campus();
    system.add_user(User::student("Anna Lee", 8, 1, "G103").unwrap());
    assert!(matches!(
        system.save_users_to_file(&users),
        Err(AccessError::UnencodableField { .. })
    ));
    assert_eq!(fs::read_to_string(&users).unwrap(), before);
}

/// A vault only administrators may enter, whatever their level.
#[derive(Debug, PartialEq)]
struct AdminVault {
    name: String,
    required: AccessLevel,
}

impl Guarded for AdminVault {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_access(&self) -> AccessLevel {
        self.required
    }

    fn permits(&self, user: &User) -> bool {
        user.role().kind() == RoleKind::Administrator && user.access_level() >= self.required
    }

    fn from_record(name: String, required: AccessLevel) -> campus_access::Result<Self> {
        Ok(Self { name, required })
    }
}

#[test]
fn custom_guarded_type_round_trips() {
    let dir = TempDir::new().unwrap();
    let vaults = dir.path().join("vaults.txt");

    let mut system = AccessControlSystem::<AdminVault>::new();
    system.add_user(User::teacher("Maria", 2, 9, "CS").unwrap());
    system.add_user(User::administrator("Olga", 3, 5, "Room200").unwrap());
    system.add_resource(AdminVault {
        name: "Vault".into(),
        required: AccessLevel(1),
    });
    system.save_resources_to_file(&vaults).unwrap();

    let mut restored = AccessControlSystem::<AdminVault>::new();
    restored.load_resources_from_file(&vaults).unwrap();
    for user in system.users() {
        restored.add_user(user.clone());
    }

    assert!(!restored.check_access(UserId(2), "Vault").unwrap());
    assert!(restored.check_access(UserId(3), "Vault").unwrap());
}
