//! Campus access control commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use campus_access::{AccessControlSystem, Guarded, Resource, User, UserId};

use crate::config::ClientConfig;

#[derive(Subcommand)]
pub enum AccessCommand {
    /// Build a campus, save it, reload it and run queries
    Demo,

    /// Check one user against one resource using the saved files
    Check(AccessCheck),
}

impl AccessCommand {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        match self {
            AccessCommand::Demo => demo(config),
            AccessCommand::Check(cmd) => cmd.execute(config),
        }
    }
}

#[derive(Parser)]
pub struct AccessCheck {
    /// User ID (the first user with this ID is checked)
    #[arg(long, value_name = "ID")]
    user_id: u32,

    /// Resource name
    #[arg(long, value_name = "NAME")]
    resource: String,
}

impl AccessCheck {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let system = load_system(config)?;
        let id = UserId(self.user_id);

        let granted = system
            .check_access(id, &self.resource)
            .with_context(|| format!("Failed to check access for user {}", id))?;
        print_access(&system, id, &self.resource, granted);
        Ok(())
    }
}

fn demo(config: &ClientConfig) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "Failed to create data directory: {}",
            config.data_dir.display()
        )
    })?;

    let mut system = AccessControlSystem::<Resource>::new();
    system.add_user(User::student("Ivan", 1, 1, "G101")?);
    system.add_user(User::teacher("Maria", 2, 2, "CS")?);
    system.add_user(User::administrator("Olga", 3, 5, "Room200")?);
    system.add_user(User::student("Ivan", 4, 1, "G102")?);

    system.add_resource(Resource::new("Lab1", 2)?);
    system.add_resource(Resource::new("Archive", 4)?);
    system.add_resource(Resource::new("Library", 1)?);

    system
        .save_users_to_file(config.users_file())
        .context("Failed to save users")?;
    system
        .save_resources_to_file(config.resources_file())
        .context("Failed to save resources")?;
    println!(
        "{} {} and {}",
        style("Saved").cyan(),
        config.users_file().display(),
        config.resources_file().display()
    );

    let mut restored = load_system(config)?;
    println!();
    print!("{}", restored);

    let ivans = restored.find_users_by_name("Ivan");
    println!();
    println!(
        "{} {}",
        style("Users named Ivan:").bold().yellow(),
        ivans.len()
    );
    for user in ivans {
        println!("  {}", user);
    }

    println!();
    println!("{}", style("Access checks:").bold().yellow());
    for (id, resource) in [(1, "Lab1"), (2, "Archive"), (3, "Archive"), (4, "Library")] {
        let id = UserId(id);
        let granted = restored.check_access(id, resource)?;
        print_access(&restored, id, resource, granted);
    }

    restored.sort_by_access_level();
    println!();
    println!("{}", style("Users by access level:").bold().yellow());
    for user in restored.users() {
        println!("  {}", user);
    }

    Ok(())
}

fn load_system(config: &ClientConfig) -> Result<AccessControlSystem> {
    let mut system = AccessControlSystem::new();
    system
        .load_users_from_file(config.users_file())
        .context("Failed to load users (run `labs access demo` first)")?;
    system
        .load_resources_from_file(config.resources_file())
        .context("Failed to load resources")?;
    Ok(system)
}

fn print_access<R: Guarded>(
    system: &AccessControlSystem<R>,
    id: UserId,
    resource: &str,
    granted: bool,
) {
    let name = system
        .find_user_by_id(id)
        .map(User::name)
        .unwrap_or("unknown");
    let verdict = if granted {
        style("granted").green()
    } else {
        style("denied").red()
    };
    println!("  {} ({}) -> {}: {}", name, id, resource, verdict);
}
