//! Command implementations for the labs binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod access;
mod armory;
mod inspect_save;
mod roster;
mod rpg;

pub use access::AccessCommand;
pub use armory::ArmoryDemo;
pub use inspect_save::InspectSave;
pub use roster::RosterDemo;
pub use rpg::Rpg;
