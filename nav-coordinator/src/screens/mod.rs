pub mod create_team;

pub use create_team::{CreateTeamParams, CreateTeamScreen};
