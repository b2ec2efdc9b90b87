//! Read and inspect saved games
//!
//! Loads `<slot>.sav` (or `<slot>.bin` with `--binary`) and displays it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use runtime::{BinarySaveRepository, SaveGame, SaveRepository, TextSaveRepository};

use crate::config::ClientConfig;

/// Read and inspect a saved game
#[derive(Parser)]
pub struct InspectSave {
    /// Save slot to read (e.g., save)
    #[arg(value_name = "SLOT")]
    slot: String,

    /// Custom saves directory (defaults to `<data dir>/saves`)
    #[arg(short, long, value_name = "DIR")]
    saves_dir: Option<PathBuf>,

    /// Read the bincode save instead of the text one
    #[arg(long)]
    binary: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (player stats and items)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl InspectSave {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let saves_dir = self.saves_dir.unwrap_or_else(|| config.saves_dir());

        let (repo, path): (Box<dyn SaveRepository>, PathBuf) = if self.binary {
            let repo = BinarySaveRepository::new(&saves_dir)?;
            let path = repo.slot_path(&self.slot)?;
            (Box::new(repo), path)
        } else {
            let repo = TextSaveRepository::new(&saves_dir)?;
            let path = repo.slot_path(&self.slot)?;
            (Box::new(repo), path)
        };

        let Some(save) = repo
            .load(&self.slot)
            .with_context(|| format!("Failed to read save file: {}", path.display()))?
        else {
            let available = repo.list_slots().unwrap_or_default();
            anyhow::bail!(
                "Save file not found: {}\n\nAvailable slots: {}",
                path.display(),
                if available.is_empty() {
                    "none".to_string()
                } else {
                    available.join(", ")
                }
            );
        };

        println!("{} {}", style("Save File:").bold().cyan(), path.display());
        println!("{} {}", style("Slot:").bold().cyan(), self.slot);
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&save),
            OutputFormat::Json => print_json(&save)?,
            OutputFormat::Debug => print_debug(&save),
        }

        Ok(())
    }
}

fn print_summary(save: &SaveGame) {
    let player = &save.player;

    println!("{}", style("=== Saved Game Summary ===").bold().green());
    println!();

    println!("{}", style("Player:").bold().yellow());
    println!("  Name: {}", player.name());
    println!("  HP: {}", player.health());
    println!("  Attack / Defense: {} / {}", player.attack(), player.defense());
    println!("  Level: {} ({} XP)", player.level(), player.experience());
    println!();

    println!("{}", style("Inventory:").bold().yellow());
    if save.inventory.is_empty() {
        println!("  (empty)");
    }
    for item in save.inventory.iter() {
        println!("  - {}", item);
    }
    println!();
}

fn print_json(save: &SaveGame) -> Result<()> {
    let json = save.to_json().context("Failed to serialize save to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(save: &SaveGame) {
    println!("{:#?}", save);
}
