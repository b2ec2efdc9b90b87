//! Lab scenarios for the dungeon game and the campus access system.
//!
//! Run with: `cargo run -p dungeon-labs -- <command>`
//!
//! Paths come from `LABS_DATA_DIR`, `LABS_LOG_DIR` and `LABS_COMBAT_LOG`
//! (a `.env` file is honoured); the global flags override them.

mod commands;
mod config;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{AccessCommand, ArmoryDemo, InspectSave, RosterDemo, Rpg};

use crate::config::ClientConfig;

/// Lab scenarios for the dungeon game and the campus access system
#[derive(Parser)]
#[command(name = "labs")]
#[command(about = "Dungeon and campus lab scenarios", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory for saves and text files
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for diagnostic logs
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Combat log file
    #[arg(long, global = true, value_name = "FILE")]
    combat_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the scripted RPG campaign
    Rpg(Rpg),

    /// Campus access control
    #[command(subcommand)]
    Access(AccessCommand),

    /// Save and reload an entity roster, then drain queues
    Roster(RosterDemo),

    /// Merge weapons and fill an armory
    Armory(ArmoryDemo),

    /// Read and inspect a saved game
    InspectSave(InspectSave),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_overrides(cli.data_dir, cli.log_dir, cli.combat_log);

    let _guard = logging::setup_logging(&config.log_dir)?;
    tracing::debug!("Data directory: {}", config.data_dir.display());

    match cli.command {
        Command::Rpg(cmd) => cmd.execute(&config),
        Command::Access(cmd) => cmd.execute(&config),
        Command::Roster(cmd) => cmd.execute(&config),
        Command::Armory(cmd) => cmd.execute(),
        Command::InspectSave(cmd) => cmd.execute(&config),
    }
}
