use serde::{Deserialize, Serialize};
use std::fmt;

use crate::nav::{AvailableScreen, ScreenId, SheetItem};

/// Which optional entries the current user may see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub can_search: bool,
    #[serde(default)]
    pub can_join_by_code: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            can_create: true,
            can_search: true,
            can_join_by_code: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    CreateNewTeam,
    BrowseChannels,
    DirectMessage,
    JoinTeamByCode,
}

impl MenuAction {
    /// Display order of the sheet
    pub const ALL: [MenuAction; 4] = [
        MenuAction::CreateNewTeam,
        MenuAction::BrowseChannels,
        MenuAction::DirectMessage,
        MenuAction::JoinTeamByCode,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MenuAction::CreateNewTeam => "create_new_team",
            MenuAction::BrowseChannels => "browse_channels",
            MenuAction::DirectMessage => "direct_message",
            MenuAction::JoinTeamByCode => "join_team_by_code",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuAction::CreateNewTeam => "plus",
            MenuAction::BrowseChannels => "search-list",
            MenuAction::DirectMessage => "account-plus-outline",
            MenuAction::JoinTeamByCode => "magnify-plus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::CreateNewTeam => "Create New Team",
            MenuAction::BrowseChannels => "Browse Channels",
            MenuAction::DirectMessage => "Open a Direct Message",
            MenuAction::JoinTeamByCode => "Join a Team by code",
        }
    }

    /// Screen presented once the sheet has closed
    pub fn target(&self) -> AvailableScreen {
        match self {
            MenuAction::CreateNewTeam => AvailableScreen::CreateTeam,
            MenuAction::BrowseChannels => AvailableScreen::BrowseChannels,
            MenuAction::DirectMessage => AvailableScreen::CreateDirectMessage,
            MenuAction::JoinTeamByCode => AvailableScreen::JoinTeam,
        }
    }

    /// Title of the presented modal
    pub fn title(&self) -> &'static str {
        match self {
            MenuAction::CreateNewTeam => "Create a new team",
            MenuAction::BrowseChannels => "Browse channels",
            MenuAction::DirectMessage => "Create Direct Message",
            MenuAction::JoinTeamByCode => "Join a Team by code",
        }
    }

    pub fn separator_before(&self) -> bool {
        matches!(self, MenuAction::JoinTeamByCode)
    }

    fn allowed(&self, caps: &Capabilities) -> bool {
        match self {
            MenuAction::CreateNewTeam => caps.can_create,
            MenuAction::BrowseChannels => caps.can_search,
            MenuAction::DirectMessage => true,
            MenuAction::JoinTeamByCode => caps.can_join_by_code,
        }
    }

    pub fn sheet_item(&self) -> SheetItem {
        SheetItem {
            action_id: self.id().to_string(),
            icon: self.icon().to_string(),
            text: self.label().to_string(),
            separator_before: self.separator_before(),
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One request to open the menu. Consumed when the action list is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    pub capabilities: Capabilities,
    pub origin: ScreenId,
}

impl MenuRequest {
    pub fn new(capabilities: Capabilities, origin: ScreenId) -> Self {
        Self { capabilities, origin }
    }

    /// Ordered entries the capabilities allow. The direct-message entry is
    /// always present.
    pub fn build_actions(self) -> Vec<MenuAction> {
        MenuAction::ALL
            .into_iter()
            .filter(|action| action.allowed(&self.capabilities))
            .collect()
    }
}
