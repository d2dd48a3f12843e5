use crate::nav::ButtonLayout;
use crate::screen::{Command, Subscription};

/// The main trait that all coordinated screens implement.
///
/// This follows the Elm architecture:
/// - State: data describing the screen's current state
/// - Msg: events/actions that can happen
/// - update: handles messages and returns commands
/// - subscriptions: declares which button presses the screen wants
/// - buttons: declares the navigation-bar buttons for the current state
pub trait Screen: Sized + Send + 'static {
    /// Parameters the screen is mounted with
    type Params;

    /// The screen's state type
    type State: Send;

    /// The screen's message type
    type Msg: Clone + Send + 'static;

    /// Build the initial state and an optional command
    fn init(params: Self::Params) -> (Self::State, Command<Self::Msg>);

    /// Update the state based on a message and return a command
    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    /// Declare what inputs this screen wants to receive
    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    /// Navigation-bar buttons for the current state
    fn buttons(_state: &Self::State) -> ButtonLayout {
        ButtonLayout::default()
    }

    /// Title for the current state
    fn title(state: &Self::State) -> &'static str;
}
