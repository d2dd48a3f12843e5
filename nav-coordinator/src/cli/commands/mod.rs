pub mod config;
pub mod replay;

pub use config::config_command;
pub use replay::{ReplayCommands, replay_command};
