use super::commands::ReplayCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nav-coordinator")]
#[command(about = "Replay scripted navigation sessions against the screen coordinator")]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a scenario file and print the navigation trace
    Replay(ReplayCommands),
    /// Print the effective configuration
    Config,
}
