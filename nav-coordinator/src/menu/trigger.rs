use super::{Capabilities, MenuOpened, MenuOrchestrator, MenuRequest};
use crate::nav::ScreenId;

/// Imperative handle for opening the servers menu from outside the icon
pub trait MenuTrigger {
    fn open_servers(&mut self) -> MenuOpened;
}

/// The server icon on the channel list. A tap and a programmatic trigger
/// both go through [`ServersMenu::open`].
pub struct ServersMenu {
    capabilities: Capabilities,
    origin: ScreenId,
    orchestrator: MenuOrchestrator,
}

impl ServersMenu {
    pub fn new(capabilities: Capabilities, origin: ScreenId, orchestrator: MenuOrchestrator) -> Self {
        Self {
            capabilities,
            origin,
            orchestrator,
        }
    }

    pub fn on_icon_press(&mut self) -> MenuOpened {
        self.open()
    }

    pub fn orchestrator(&self) -> &MenuOrchestrator {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut MenuOrchestrator {
        &mut self.orchestrator
    }

    fn open(&mut self) -> MenuOpened {
        let request = MenuRequest::new(self.capabilities, self.origin.clone());
        self.orchestrator.open_menu(request)
    }
}

impl MenuTrigger for ServersMenu {
    fn open_servers(&mut self) -> MenuOpened {
        self.open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinatorConfig;
    use crate::nav::NavCommand;

    fn servers_menu() -> ServersMenu {
        ServersMenu::new(
            Capabilities::all(),
            ScreenId::new("ChannelList"),
            MenuOrchestrator::from_config(&CoordinatorConfig::default()),
        )
    }

    fn items(opened: &MenuOpened) -> Vec<String> {
        match &opened.command {
            Some(NavCommand::ShowBottomSheet(sheet)) => sheet.items.iter().map(|i| i.action_id.clone()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_tap_and_trigger_build_the_same_sheet() {
        let mut tapped = servers_menu();
        let mut triggered = servers_menu();

        let a = tapped.on_icon_press();
        let b = triggered.open_servers();

        assert_eq!(items(&a), items(&b));
        assert!(tapped.orchestrator().is_open());
        assert!(triggered.orchestrator().is_open());
    }

    #[test]
    fn test_trigger_while_open_is_noop() {
        let mut menu = servers_menu();
        let first = menu.on_icon_press();
        let second = menu.open_servers();
        assert_eq!(first.handle, second.handle);
        assert!(second.command.is_none());
    }
}
