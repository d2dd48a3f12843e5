use crate::nav::NavCommand;
use std::future::Future;
use std::pin::Pin;

/// Commands represent side effects that screens want to perform.
/// They are returned from the update() function and executed by the runtime.
pub enum Command<Msg> {
    /// Do nothing
    None,

    /// Execute multiple commands in sequence
    Batch(Vec<Command<Msg>>),

    /// Issue a navigation command to the navigation surface
    Navigate(NavCommand),

    /// Perform an async operation and send the result as a message
    Perform(Pin<Box<dyn Future<Output = Msg> + Send>>),
}

impl<Msg> Command<Msg> {
    /// Helper to create a command that performs an async operation
    pub fn perform<F, T>(future: F, to_msg: impl Fn(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        Msg: Send + 'static,
    {
        Command::Perform(Box::pin(async move {
            let result = future.await;
            to_msg(result)
        }))
    }

    /// Helper to issue a navigation command
    pub fn navigate(command: NavCommand) -> Self {
        Command::Navigate(command)
    }

    /// Helper to close the soft keyboard
    pub fn dismiss_keyboard() -> Self {
        Command::Navigate(NavCommand::DismissKeyboard)
    }

    /// Helper to batch multiple commands
    pub fn batch(commands: Vec<Command<Msg>>) -> Self {
        Command::Batch(commands)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Command::None)
    }

    /// Navigation commands contained in this command, in execution order
    pub fn navigation(&self) -> Vec<&NavCommand> {
        match self {
            Command::Navigate(nav) => vec![nav],
            Command::Batch(commands) => commands.iter().flat_map(|c| c.navigation()).collect(),
            _ => Vec::new(),
        }
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::None
    }
}
