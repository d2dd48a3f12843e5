use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use nav_coordinator::CoordinatorConfig;

/// Print the effective configuration and where it came from
pub fn config_command(config: &CoordinatorConfig, source: Option<&Path>) -> Result<()> {
    match source {
        Some(path) if path.exists() => println!("{} {}", "# Loaded from".dimmed(), path.display()),
        Some(path) => println!("{} {}", "# Defaults (no file at".dimmed(), format!("{})", path.display()).dimmed()),
        None => println!("{}", "# Defaults".dimmed()),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
