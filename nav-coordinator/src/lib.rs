//! Navigation and submission coordination for chat client screens.
//!
//! Screens follow an update/subscription model hosted by
//! [`screen::ScreenRuntime`]; navigation effects are plain
//! [`nav::NavCommand`] values executed against a [`nav::Navigator`].

pub mod bridge;
pub mod config;
pub mod dismissal;
pub mod error;
pub mod events;
pub mod menu;
pub mod nav;
pub mod scenario;
pub mod screen;
pub mod screens;
pub mod submission;
pub mod viewport;

pub use config::CoordinatorConfig;
pub use error::{StaleDispatch, SubmissionError};
