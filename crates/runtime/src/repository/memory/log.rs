//! In-memory combat log.

use game_core::GameEvent;

use crate::repository::{CombatLog, Result};

/// Combat log that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryCombatLog {
    events: Vec<GameEvent>,
}

impl MemoryCombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// The events as they would appear in a log file.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl CombatLog for MemoryCombatLog {
    fn record(&mut self, event: &GameEvent) -> Result<()> {
        tracing::debug!("{}", event);
        self.events.push(event.clone());
        Ok(())
    }
}
