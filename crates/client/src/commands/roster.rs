//! Entity roster and queue demo

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_core::{Entity, GameError, Queue, Roster};
use runtime::{load_roster, save_roster};

use crate::config::ClientConfig;

/// Save and reload a roster, then drain a couple of queues
#[derive(Parser)]
pub struct RosterDemo {
    /// Include an enemy in the saved roster
    #[arg(long)]
    with_enemy: bool,
}

impl RosterDemo {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                config.data_dir.display()
            )
        })?;

        let mut roster = Roster::new();
        roster.add(Entity::player("Hero", 100, 5))?;
        roster.add(Entity::player("Mage", 80, 3))?;
        roster.add(Entity::player("Rogue", 90, 4))?;
        if self.with_enemy {
            roster.add(Entity::enemy("Goblin", 50, "Goblin"))?;
        }
        if let Err(e) = roster.add(Entity::player("Ghost", 0, 1)) {
            println!(
                "{} {} {}",
                style("Rejected Ghost:").red(),
                e,
                style(format!("[{}]", e.error_code())).dim()
            );
        }

        let path = config.roster_file();
        save_roster(&roster, &path).context("Failed to save roster")?;
        let loaded = load_roster(&path).context("Failed to load roster")?;

        println!("{} {}", style("Roster loaded from").cyan(), path.display());
        print!("{}", loaded);

        let mut words: Queue<&str> = ["Hello", "World", "!"].into_iter().collect();
        println!();
        println!("{}", style("String queue:").bold().yellow());
        while let Ok(word) = words.pop() {
            println!("  {}", word);
        }

        let mut numbers: Queue<i32> = Queue::new();
        for n in [10, 20, 30] {
            numbers.push(n);
        }
        println!("{}", style("Integer queue:").bold().yellow());
        while !numbers.is_empty() {
            println!("  {}", numbers.pop()?);
        }

        if let Err(e) = numbers.pop() {
            println!(
                "{} {} {}",
                style("Error:").red(),
                e,
                style(format!("[{}, {}]", e.error_code(), e.severity().as_str())).dim()
            );
        }

        Ok(())
    }
}
