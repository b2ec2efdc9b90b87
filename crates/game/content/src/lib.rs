//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Monster bestiary (data-driven via RON, falls back to built-in templates)
//! - Game rules (data-driven via TOML)
//!
//! Content is consumed by the runtime when spawning monsters and never appears
//! in save files.

pub mod bestiary;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::{Bestiary, BestiaryError};

#[cfg(feature = "loaders")]
pub use loaders::{BestiaryLoader, ConfigLoader, LoadResult};
