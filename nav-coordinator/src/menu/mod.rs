//! Bottom-sheet menu opened from the server icon.
//!
//! Every entry closes the sheet before presenting its target screen; the
//! ordering is carried by [`NavCommand::DismissSheetThen`](crate::nav::NavCommand).

pub mod orchestrator;
pub mod request;
pub mod trigger;

pub use orchestrator::{MenuOpened, MenuOrchestrator};
pub use request::{Capabilities, MenuAction, MenuRequest};
pub use trigger::{MenuTrigger, ServersMenu};
