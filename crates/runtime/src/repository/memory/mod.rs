//! In-memory repository implementations for testing and development.

mod log;
mod state;

pub use log::MemoryCombatLog;
pub use state::InMemorySaveRepository;
