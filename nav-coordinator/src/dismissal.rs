//! Closing a screen.
//!
//! The keyboard is always dismissed before the navigation transition, then
//! exactly one of dismiss-modal or pop is issued depending on how the screen
//! was presented.

use crate::nav::{NavCommand, ScreenId};
use crate::screen::Command;
use log::debug;

/// Navigation commands that close `screen`, in the order they must run
pub fn close_commands(screen: &ScreenId, presented_as_overlay: bool) -> [NavCommand; 2] {
    let transition = if presented_as_overlay {
        NavCommand::DismissModal(screen.clone())
    } else {
        NavCommand::Pop(screen.clone())
    };
    [NavCommand::DismissKeyboard, transition]
}

/// Close handler shared by a screen's close button and its back gesture.
///
/// Only the first close issues commands; later calls are no-ops because the
/// surface is already on its way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissalPolicy {
    screen: ScreenId,
    presented_as_overlay: bool,
    closed: bool,
}

impl DismissalPolicy {
    pub fn new(screen: ScreenId, presented_as_overlay: bool) -> Self {
        Self {
            screen,
            presented_as_overlay,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn presented_as_overlay(&self) -> bool {
        self.presented_as_overlay
    }

    pub fn close<Msg>(&mut self) -> Command<Msg> {
        if self.closed {
            debug!("Ignoring repeated close of {}", self.screen);
            return Command::None;
        }
        self.closed = true;

        Command::batch(
            close_commands(&self.screen, self.presented_as_overlay)
                .into_iter()
                .map(Command::navigate)
                .collect(),
        )
    }
}
