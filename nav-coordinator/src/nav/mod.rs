pub mod button;
pub mod command;
pub mod ids;
pub mod navigator;
pub mod recording;

pub use button::{ButtonLayout, Icon, NavButton, ShowAsAction};
pub use command::{BottomSheet, NavCommand, Presentation, SheetItem};
pub use ids::{AvailableScreen, ButtonId, ScreenId, SurfaceHandle};
pub use navigator::{Navigator, execute};
pub use recording::{NavCall, RecordingNavigator, TraceEntry};
