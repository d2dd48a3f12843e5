use super::{BottomSheet, ButtonLayout, NavCommand, Presentation, ScreenId};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;

/// The navigation surface the coordinator drives.
///
/// Implementations wrap the host's navigation library and keyboard API; the
/// coordinator never assumes anything beyond these calls.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn set_buttons(&self, screen: &ScreenId, layout: &ButtonLayout) -> Result<()>;
    async fn dismiss_keyboard(&self) -> Result<()>;
    async fn pop(&self, screen: &ScreenId) -> Result<()>;
    async fn dismiss_modal(&self, screen: &ScreenId) -> Result<()>;

    /// Present a modal and return the id assigned to the new screen instance
    async fn show_modal(&self, presentation: &Presentation) -> Result<ScreenId>;

    async fn show_bottom_sheet(&self, sheet: &BottomSheet) -> Result<()>;

    /// Resolves once the sheet has fully dismissed
    async fn dismiss_bottom_sheet(&self) -> Result<()>;
}

/// Execute a single navigation command.
///
/// Returns the id of a newly presented screen when the command presented one.
pub async fn execute(navigator: &dyn Navigator, command: &NavCommand) -> Result<Option<ScreenId>> {
    debug!("Executing navigation command: {:?}", command);
    match command {
        NavCommand::DismissKeyboard => navigator.dismiss_keyboard().await?,
        NavCommand::SetButtons { screen, layout } => navigator.set_buttons(screen, layout).await?,
        NavCommand::Pop(screen) => navigator.pop(screen).await?,
        NavCommand::DismissModal(screen) => navigator.dismiss_modal(screen).await?,
        NavCommand::ShowBottomSheet(sheet) => navigator.show_bottom_sheet(sheet).await?,
        NavCommand::DismissSheetThen(presentation) => {
            navigator.dismiss_bottom_sheet().await?;
            let screen = navigator.show_modal(presentation).await?;
            return Ok(Some(screen));
        }
    }
    Ok(None)
}
