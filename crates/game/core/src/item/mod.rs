//! Items carried by characters.
//!
//! - [`Inventory`]: an unbounded bag of named items (potions, loot)
//! - [`Weapon`]: a weapon with damage and weight, mergeable with `+`
//! - [`Armory`]: a fixed-capacity weapon rack

pub mod armory;
pub mod inventory;
pub mod weapon;

pub use armory::{Armory, ArmoryError};
pub use inventory::{HEALTH_POTION, Inventory, InventoryError};
pub use weapon::Weapon;
