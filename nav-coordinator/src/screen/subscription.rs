use crate::bridge::binding::fingerprint;
use crate::nav::ButtonId;
use std::hash::Hash;

/// Subscriptions represent inputs that a screen wants to receive.
/// They are declared via the subscriptions() function and kept in sync with
/// the event bridge after every update.
pub enum Subscription<Msg> {
    /// Subscribe to presses of a navigation-bar button
    NavButton { button: ButtonId, deps: u64, msg: Msg },

    /// Subscribe to hardware/software back presses
    BackPress { deps: u64, msg: Msg },
}

impl<Msg> Subscription<Msg> {
    /// Helper to create a navigation-bar button subscription
    pub fn nav_button(button: impl Into<ButtonId>, msg: Msg) -> Self {
        Subscription::NavButton {
            button: button.into(),
            deps: 0,
            msg,
        }
    }

    /// Helper to create a back-press subscription
    pub fn back_press(msg: Msg) -> Self {
        Subscription::BackPress { deps: 0, msg }
    }

    /// Re-subscribe whenever `deps` changes
    pub fn with_deps<D: Hash + ?Sized>(self, deps: &D) -> Self {
        let deps = fingerprint(deps);
        match self {
            Subscription::NavButton { button, msg, .. } => Subscription::NavButton { button, deps, msg },
            Subscription::BackPress { msg, .. } => Subscription::BackPress { deps, msg },
        }
    }

    /// Bridge button id this subscription listens on
    pub fn button(&self) -> ButtonId {
        match self {
            Subscription::NavButton { button, .. } => button.clone(),
            Subscription::BackPress { .. } => ButtonId::hardware_back(),
        }
    }
}
