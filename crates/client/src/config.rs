//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Where the labs binary keeps its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Saves, user and resource lists, rosters.
    pub data_dir: PathBuf,
    /// Rolling diagnostic logs.
    pub log_dir: PathBuf,
    /// Append-only combat log of the RPG campaign.
    pub combat_log: PathBuf,
}

impl ClientConfig {
    pub fn new(data_dir: PathBuf, log_dir: PathBuf) -> Self {
        let combat_log = data_dir.join("game.log");
        Self {
            data_dir,
            log_dir,
            combat_log,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Call after `dotenvy::dotenv()` so `.env` entries are visible.
    ///
    /// Environment variables:
    /// - `LABS_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `LABS_LOG_DIR` - Directory for diagnostic logs (default: platform cache dir)
    /// - `LABS_COMBAT_LOG` - Combat log file (default: `<data dir>/game.log`)
    pub fn from_env() -> Self {
        let data_dir = read_env::<PathBuf>("LABS_DATA_DIR").unwrap_or_else(dirs::data_dir);
        let log_dir = read_env::<PathBuf>("LABS_LOG_DIR").unwrap_or_else(dirs::log_dir);

        let mut config = Self::new(data_dir, log_dir);
        if let Some(combat_log) = read_env::<PathBuf>("LABS_COMBAT_LOG") {
            config.combat_log = combat_log;
        }
        config
    }

    /// Apply command-line overrides. A new data directory also moves the
    /// default combat log, but not one set explicitly.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        combat_log: Option<PathBuf>,
    ) -> Self {
        if let Some(data_dir) = data_dir {
            if self.combat_log == self.data_dir.join("game.log") {
                self.combat_log = data_dir.join("game.log");
            }
            self.data_dir = data_dir;
        }
        if let Some(log_dir) = log_dir {
            self.log_dir = log_dir;
        }
        if let Some(combat_log) = combat_log {
            self.combat_log = combat_log;
        }
        self
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.txt")
    }

    pub fn resources_file(&self) -> PathBuf {
        self.data_dir.join("resources.txt")
    }

    pub fn roster_file(&self) -> PathBuf {
        self.data_dir.join("game_save.txt")
    }

    pub fn saves_dir(&self) -> PathBuf {
        self.data_dir.join("saves")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
