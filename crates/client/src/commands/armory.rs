//! Weapon and armory demo

use anyhow::Result;
use clap::Parser;
use console::style;

use game_core::{Armory, ArmoryError, GameConfig, GameError, Weapon};

/// Merge and compare weapons, then fill an armory
#[derive(Parser)]
pub struct ArmoryDemo {
    /// Armory capacity (at most 10)
    #[arg(long, default_value_t = GameConfig::MAX_WEAPON_SLOTS)]
    capacity: usize,
}

impl ArmoryDemo {
    pub fn execute(self) -> Result<()> {
        let one = Weapon::new("One", 100, 50);
        let two = Weapon::new("Two", 20, 10);

        let merged = &one + &two;
        println!("{}", style("Merged weapon:").bold().yellow());
        println!("  {}", merged);

        let (stronger, weaker) = if two.outclasses(&one) {
            (&two, &one)
        } else {
            (&one, &two)
        };
        println!("  {} outclasses {}", stronger.name, weaker.name);

        let mut armory = Armory::with_capacity(self.capacity);
        println!();
        println!(
            "{} {}",
            style("Filling armory, capacity").bold().yellow(),
            armory.capacity()
        );

        let mut damage = 5;
        loop {
            let weapon = Weapon::new(format!("Blade{}", armory.len() + 1), damage, 3);
            match armory.add(weapon) {
                Ok(()) => damage += 5,
                Err(e @ ArmoryError::ArmoryFull { .. }) => {
                    println!(
                        "  {} {} {}",
                        style("Stopped:").red(),
                        e,
                        style(format!("[{}]", e.error_code())).dim()
                    );
                    break;
                }
            }
        }

        print!("{}", armory);
        if let Some(best) = armory.strongest() {
            println!("{} {}", style("Strongest:").green(), best);
        }

        Ok(())
    }
}
