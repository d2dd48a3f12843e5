use super::ButtonId;
use serde::{Deserialize, Serialize};

/// When the navigation surface should render a button inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowAsAction {
    Always,
    #[default]
    IfRoom,
    Never,
}

/// Icon resource for a button or close affordance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    pub size: u16,
    pub color: String,
}

impl Icon {
    pub fn new(name: impl Into<String>, size: u16, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }

    /// The standard close glyph used for modal close affordances
    pub fn close(size: u16, color: impl Into<String>) -> Self {
        Self::new("close", size, color)
    }
}

/// Descriptor for a navigation-bar button as handed to the navigation surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavButton {
    pub id: ButtonId,
    pub test_id: String,
    pub text: Option<String>,
    pub icon: Option<Icon>,
    pub enabled: bool,
    pub color: Option<String>,
    pub show_as_action: ShowAsAction,
}

impl NavButton {
    /// Create an enabled button with no text or icon
    pub fn new(id: impl Into<ButtonId>, test_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            test_id: test_id.into(),
            text: None,
            icon: None,
            enabled: true,
            color: None,
            show_as_action: ShowAsAction::default(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn show_as_action(mut self, show: ShowAsAction) -> Self {
        self.show_as_action = show;
        self
    }
}

/// Left and right button groups of a screen's navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonLayout {
    pub left: Vec<NavButton>,
    pub right: Vec<NavButton>,
}

impl ButtonLayout {
    pub fn find(&self, id: &ButtonId) -> Option<&NavButton> {
        self.left.iter().chain(self.right.iter()).find(|b| &b.id == id)
    }

    pub fn is_enabled(&self, id: &ButtonId) -> bool {
        self.find(id).is_some_and(|b| b.enabled)
    }
}
