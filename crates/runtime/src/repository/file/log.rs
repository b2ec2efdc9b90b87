//! Append-only combat log file.

use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use game_core::GameEvent;

use crate::repository::{CombatLog, Result};

/// Combat log appending one line per event to a text file.
///
/// The file is opened in append mode, so consecutive sessions pointed at the
/// same path extend one history. Lines are flushed as they are written.
pub struct FileCombatLog {
    path: PathBuf,
    writer: LineWriter<File>,
}

impl FileCombatLog {
    /// Open `path` for appending, creating it and its parent directory if
    /// missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!("Opened combat log {}", path.display());

        Ok(Self {
            path,
            writer: LineWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CombatLog for FileCombatLog {
    fn record(&mut self, event: &GameEvent) -> Result<()> {
        writeln!(self.writer, "{event}")?;
        tracing::debug!("{}", event);
        Ok(())
    }
}
