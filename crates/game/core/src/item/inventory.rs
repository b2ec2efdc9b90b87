//! Item bag carried by the player.

use core::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Item name of the healing potion handed out at start and as battle loot.
pub const HEALTH_POTION: &str = "Health Potion";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("item name cannot be empty")]
    EmptyItemName,

    /// Items are stored one per line in save files.
    #[error("item name {item:?} must fit on a single line")]
    MultilineItemName { item: String },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyItemName => "INVENTORY_EMPTY_ITEM_NAME",
            Self::MultilineItemName { .. } => "INVENTORY_MULTILINE_ITEM_NAME",
        }
    }
}

/// Ordered list of item names. Duplicates are allowed and kept in pickup order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: impl Into<String>) -> Result<(), InventoryError> {
        let item = item.into();
        if item.is_empty() {
            return Err(InventoryError::EmptyItemName);
        }
        if item.contains(['\n', '\r']) {
            return Err(InventoryError::MultilineItemName { item });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first occurrence of `item`. Returns false if none was held.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    pub fn count_of(&self, item: &str) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Inventory:")?;
        if self.items.is_empty() {
            return f.write_str(" empty");
        }
        for item in &self.items {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
