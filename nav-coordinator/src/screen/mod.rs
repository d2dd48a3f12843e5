pub mod app;
pub mod command;
pub mod modal;
pub mod runtime;
pub mod subscription;

pub use app::Screen;
pub use command::Command;
pub use modal::ModalState;
pub use runtime::ScreenRuntime;
pub use subscription::Subscription;
