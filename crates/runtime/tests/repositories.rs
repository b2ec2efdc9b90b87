use std::fs;

use game_core::{Character, Entity, HEALTH_POTION, Inventory, Roster};
use runtime::{
    BinarySaveRepository, InMemorySaveRepository, RepositoryError, SaveGame, SaveRepository,
    TextSaveRepository, load_roster, save_roster,
};
use tempfile::TempDir;

fn sample_save() -> SaveGame {
    let player = Character::restore("Hero", 79, 20, 10, 2, 0).unwrap();
    let mut inventory = Inventory::new();
    inventory.add(HEALTH_POTION).unwrap();
    inventory.add("Rusty Key").unwrap();
    SaveGame::new(player, inventory)
}

fn exercise(repo: &dyn SaveRepository) {
    let save = sample_save();

    assert!(!repo.exists("alpha"));
    assert_eq!(repo.load("alpha").unwrap(), None);

    repo.save("beta", &save).unwrap();
    repo.save("alpha", &save).unwrap();
    assert!(repo.exists("alpha"));
    assert_eq!(repo.load("alpha").unwrap(), Some(save.clone()));
    assert_eq!(repo.list_slots().unwrap(), ["alpha", "beta"]);

    repo.delete("alpha").unwrap();
    repo.delete("alpha").unwrap();
    assert!(!repo.exists("alpha"));
    assert_eq!(repo.list_slots().unwrap(), ["beta"]);
}

#[test]
fn text_repository() {
    let dir = TempDir::new().unwrap();
    let repo = TextSaveRepository::new(dir.path()).unwrap();
    exercise(&repo);

    // No temp files are left behind.
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["beta.sav"]);
}

#[test]
fn binary_repository() {
    let dir = TempDir::new().unwrap();
    exercise(&BinarySaveRepository::new(dir.path()).unwrap());
}

#[test]
fn memory_repository() {
    exercise(&InMemorySaveRepository::new());
}

#[test]
fn text_and_binary_slots_do_not_mix() {
    let dir = TempDir::new().unwrap();
    let text = TextSaveRepository::new(dir.path()).unwrap();
    let binary = BinarySaveRepository::new(dir.path()).unwrap();

    text.save("hero", &sample_save()).unwrap();
    assert!(binary.list_slots().unwrap().is_empty());
    assert!(!binary.exists("hero"));
}

#[test]
fn corrupted_text_save() {
    let dir = TempDir::new().unwrap();
    let repo = TextSaveRepository::new(dir.path()).unwrap();
    fs::write(repo.slot_path("broken").unwrap(), "Hero 100 20\n").unwrap();

    assert!(matches!(
        repo.load("broken"),
        Err(RepositoryError::CorruptedData(_))
    ));
}

#[test]
fn text_repository_refuses_unstorable_saves() {
    let dir = TempDir::new().unwrap();
    let repo = TextSaveRepository::new(dir.path()).unwrap();

    // Deserialized saves skip the constructors' name checks.
    let json = sample_save().to_json().unwrap();
    let spaced: SaveGame =
        serde_json::from_str(&json.replace("\"Hero\"", "\"Sir Hero\"")).unwrap();
    assert!(matches!(
        repo.save("spaced", &spaced),
        Err(RepositoryError::UnencodableField { field: "character name", .. })
    ));

    let split: SaveGame = serde_json::from_str(&json.replace("Rusty Key", "Rusty\\nKey")).unwrap();
    assert!(matches!(
        repo.save("split", &split),
        Err(RepositoryError::UnencodableField { field: "item name", .. })
    ));

    assert!(repo.list_slots().unwrap().is_empty());
}

#[test]
fn save_exports_json() {
    let json = sample_save().to_json().unwrap();
    assert!(json.contains("\"Rusty Key\""));
}

fn sample_roster() -> Roster<Entity> {
    let mut roster = Roster::new();
    roster.add(Entity::player("Hero", 100, 0)).unwrap();
    roster.add(Entity::enemy("Goblin", 50, "Goblin")).unwrap();
    roster.add(Entity::enemy("Old Troll", 120, "Cave Troll")).unwrap();
    roster
}

#[test]
fn roster_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game_save.txt");

    let roster = sample_roster();
    save_roster(&roster, &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "3\nPlayer\nHero\n100\n0\nEnemy\nGoblin\n50\nGoblin\nEnemy\nOld Troll\n120\nCave Troll\n"
    );
    assert_eq!(load_roster(&path).unwrap(), roster);
}

#[test]
fn roster_rejects_unknown_tags_and_dead_entities() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.txt");

    fs::write(&path, "1\nMerchant\nBob\n10\n0\n").unwrap();
    assert!(matches!(
        load_roster(&path),
        Err(RepositoryError::CorruptedData(_))
    ));

    fs::write(&path, "1\nPlayer\nGhost\n0\n3\n").unwrap();
    assert!(matches!(
        load_roster(&path),
        Err(RepositoryError::CorruptedData(_))
    ));

    fs::write(&path, "2\nPlayer\nHero\n100\n0\n").unwrap();
    assert!(matches!(
        load_roster(&path),
        Err(RepositoryError::CorruptedData(_))
    ));
}

#[test]
fn roster_names_must_fit_one_line() {
    let dir = TempDir::new().unwrap();
    let mut roster = Roster::new();
    roster.add(Entity::player("Two\nLines", 10, 1)).unwrap();

    assert!(matches!(
        save_roster(&roster, dir.path().join("roster.txt")),
        Err(RepositoryError::UnencodableField { .. })
    ));
}
