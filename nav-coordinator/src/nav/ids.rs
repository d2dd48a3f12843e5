use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one presentation instance of a screen (the navigation
/// surface's component id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifies a navigation-bar button within a screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonId(String);

impl ButtonId {
    /// Reserved id under which hardware/software back presses are delivered
    pub const HARDWARE_BACK: &'static str = "hardware-back";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn hardware_back() -> Self {
        Self::new(Self::HARDWARE_BACK)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ButtonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Handle to a transient surface (bottom sheet) opened by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceHandle(pub Uuid);

impl SurfaceHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SurfaceHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet-{}", self.0)
    }
}

/// Screens the coordinator knows how to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailableScreen {
    BrowseChannels,
    CreateTeam,
    CreateDirectMessage,
    JoinTeam,
}

impl AvailableScreen {
    pub fn name(&self) -> &'static str {
        match self {
            AvailableScreen::BrowseChannels => "BrowseChannels",
            AvailableScreen::CreateTeam => "CreateTeam",
            AvailableScreen::CreateDirectMessage => "CreateDirectMessage",
            AvailableScreen::JoinTeam => "JoinTeam",
        }
    }
}

impl fmt::Display for AvailableScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
