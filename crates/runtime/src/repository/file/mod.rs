//! File-based repository implementations.

mod binary;
mod log;
mod roster;
mod text;

pub use binary::BinarySaveRepository;
pub use log::FileCombatLog;
pub use roster::{load_roster, save_roster};
pub use text::TextSaveRepository;

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result};

/// Write `bytes` next to `path` and rename over it, so readers never observe
/// a half-written file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Resolve `<base_dir>/<slot>.<extension>`, rejecting slots that are not a
/// single plain file name.
fn slot_path(base_dir: &Path, slot: &str, extension: &str) -> Result<PathBuf> {
    let valid = !slot.is_empty()
        && slot != "."
        && slot != ".."
        && !slot.contains(['/', '\\'])
        && !slot.chars().any(char::is_control);
    if !valid {
        return Err(RepositoryError::InvalidSlot(slot.to_string()));
    }
    Ok(base_dir.join(format!("{slot}.{extension}")))
}

fn list_slots(base_dir: &Path, extension: &str) -> Result<Vec<String>> {
    let suffix = format!(".{extension}");
    let mut slots = Vec::new();

    for entry in fs::read_dir(base_dir)? {
        let path = entry?.path();

        if let Some(filename) = path.file_name().and_then(|s| s.to_str())
            && let Some(slot) = filename.strip_suffix(&suffix)
            && !slot.is_empty()
        {
            slots.push(slot.to_string());
        }
    }

    slots.sort_unstable();
    Ok(slots)
}

/// Rejects values that would split a line-based record.
fn check_line(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(RepositoryError::UnencodableField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn delete_file(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}
