//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APPLICATION: &str = "dungeon-labs";

/// Get the platform-specific data directory
///
/// - macOS: `~/Library/Application Support/dungeon-labs`
/// - Linux: `~/.local/share/dungeon-labs` (or `$XDG_DATA_HOME/dungeon-labs`)
/// - Windows: `%APPDATA%\dungeon-labs`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/dungeon-labs/logs`
/// - Linux: `~/.cache/dungeon-labs/logs` (or `$XDG_CACHE_HOME/dungeon-labs/logs`)
/// - Windows: `%LOCALAPPDATA%\dungeon-labs\logs`
/// - Fallback: `./save_data/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("logs")
}
