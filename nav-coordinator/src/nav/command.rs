use super::{AvailableScreen, ButtonId, ButtonLayout, Icon, ScreenId, SurfaceHandle};
use serde::{Deserialize, Serialize};

/// A modal presentation of one of the known screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub screen: AvailableScreen,
    pub title: String,
    pub close_button: Option<Icon>,
}

/// One row of a bottom sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetItem {
    pub action_id: String,
    pub icon: String,
    pub text: String,
    pub separator_before: bool,
}

/// A bottom sheet to be shown by the navigation surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomSheet {
    pub surface: SurfaceHandle,
    pub close_button_id: ButtonId,
    pub title: String,
    /// Collapsed and expanded heights
    pub snap_points: [u32; 2],
    pub items: Vec<SheetItem>,
}

/// Navigation commands issued to the navigation surface.
///
/// Sheet-to-modal transitions are only expressible through
/// [`NavCommand::DismissSheetThen`], so the executor is the single place that
/// orders the dismissal before the presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    /// Close the soft keyboard
    DismissKeyboard,

    /// Replace the navigation-bar buttons of a screen
    SetButtons { screen: ScreenId, layout: ButtonLayout },

    /// Pop a screen that was pushed on the stack
    Pop(ScreenId),

    /// Dismiss a screen that was presented as a modal
    DismissModal(ScreenId),

    /// Present a bottom sheet
    ShowBottomSheet(BottomSheet),

    /// Wait for the open bottom sheet to finish dismissing, then present
    DismissSheetThen(Presentation),
}

impl NavCommand {
    /// Screen this command closes, if any
    pub fn closes(&self) -> Option<&ScreenId> {
        match self {
            NavCommand::Pop(screen) | NavCommand::DismissModal(screen) => Some(screen),
            _ => None,
        }
    }
}
