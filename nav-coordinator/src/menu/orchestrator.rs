use log::{debug, info};

use super::{MenuAction, MenuRequest};
use crate::config::{AppearanceConfig, CoordinatorConfig, MenuConfig};
use crate::nav::{BottomSheet, ButtonId, Icon, NavCommand, Presentation, ScreenId, SurfaceHandle};
use crate::screen::ModalState;

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenSheet {
    handle: SurfaceHandle,
    origin: ScreenId,
    actions: Vec<MenuAction>,
}

/// Result of an open request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOpened {
    pub handle: SurfaceHandle,
    /// `None` when the sheet was already showing
    pub command: Option<NavCommand>,
}

/// Owns the lifetime of one bottom-sheet menu at a time
pub struct MenuOrchestrator {
    sheet: ModalState<OpenSheet>,
    layout: MenuConfig,
    appearance: AppearanceConfig,
}

impl MenuOrchestrator {
    pub fn new(layout: MenuConfig, appearance: AppearanceConfig) -> Self {
        Self {
            sheet: ModalState::Closed,
            layout,
            appearance,
        }
    }

    pub fn from_config(config: &CoordinatorConfig) -> Self {
        Self::new(config.menu.clone(), config.appearance.clone())
    }

    pub fn is_open(&self) -> bool {
        self.sheet.is_open()
    }

    pub fn current(&self) -> Option<SurfaceHandle> {
        self.sheet.data().map(|s| s.handle)
    }

    /// Entries of the open sheet, in display order
    pub fn actions(&self) -> &[MenuAction] {
        self.sheet.data().map(|s| s.actions.as_slice()).unwrap_or(&[])
    }

    /// Build the action list and the sheet for a request.
    ///
    /// A second open while the sheet is showing returns the live handle and
    /// issues nothing.
    pub fn open_menu(&mut self, request: MenuRequest) -> MenuOpened {
        if let Some(open) = self.sheet.data() {
            debug!("Menu already open as {}", open.handle);
            return MenuOpened {
                handle: open.handle,
                command: None,
            };
        }

        let origin = request.origin.clone();
        let actions = request.build_actions();
        let handle = SurfaceHandle::new();

        let sheet = BottomSheet {
            surface: handle,
            close_button_id: ButtonId::new(self.layout.close_button_id.clone()),
            title: String::new(),
            snap_points: [1, self.snap_point(&actions)],
            items: actions.iter().map(MenuAction::sheet_item).collect(),
        };

        info!("Opening menu {} from {} with {} entries", handle, origin, actions.len());
        self.sheet.open(OpenSheet {
            handle,
            origin,
            actions,
        });

        MenuOpened {
            handle,
            command: Some(NavCommand::ShowBottomSheet(sheet)),
        }
    }

    /// Expanded sheet height: one row per entry plus the header row, the
    /// separators and the bottom safe-area inset
    pub fn snap_point(&self, actions: &[MenuAction]) -> u32 {
        let rows = actions.len() as u32 + 1;
        let separators = actions.iter().filter(|a| a.separator_before()).count() as u32;
        rows * self.layout.item_height + separators * self.layout.separator_height + self.layout.bottom_inset
    }

    /// Select an entry of the sheet identified by `handle`.
    ///
    /// Returns the dismiss-then-present command, or `None` when the sheet is
    /// no longer open or does not offer `action`.
    pub fn select(&mut self, handle: SurfaceHandle, action: MenuAction) -> Option<NavCommand> {
        let offered = match self.sheet.data() {
            Some(open) if open.handle == handle => open.actions.contains(&action),
            _ => {
                debug!("Ignoring {} for closed sheet {}", action, handle);
                return None;
            }
        };
        if !offered {
            debug!("Sheet {} does not offer {}", handle, action);
            return None;
        }

        let open = self.sheet.take()?;
        info!("Menu {} selected {} (from {})", open.handle, action, open.origin);

        Some(NavCommand::DismissSheetThen(self.presentation(action)))
    }

    /// The sheet was closed by the user (swipe or close button)
    pub fn dismissed_externally(&mut self, handle: SurfaceHandle) -> bool {
        if self.current() != Some(handle) {
            return false;
        }
        self.sheet.close();
        debug!("Menu {} dismissed", handle);
        true
    }

    fn presentation(&self, action: MenuAction) -> Presentation {
        Presentation {
            screen: action.target(),
            title: action.title().to_string(),
            close_button: Some(Icon::close(
                self.appearance.close_icon_size,
                self.appearance.header_text_color.clone(),
            )),
        }
    }
}
