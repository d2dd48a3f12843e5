use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use nav_coordinator::CoordinatorConfig;

mod cli;

use cli::Cli;
use cli::app::Commands;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("nav-coordinator.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting nav-coordinator");

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => CoordinatorConfig::get_config_path()?,
    };
    let config = CoordinatorConfig::load_from(&config_path)?;
    debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::Replay(replay_args) => {
            cli::commands::replay_command(replay_args, &config).await?;
        }
        Commands::Config => {
            cli::commands::config_command(&config, Some(&config_path))?;
        }
    }

    Ok(())
}
