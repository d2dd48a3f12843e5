//! Navigation-bar button bridge.
//!
//! The navigation surface raises press events tagged with
//! `(screen id, button id)`. Screens register one handler per pair; a press
//! is delivered synchronously to the handler registered for exactly that
//! pair and turned into a screen message.

pub mod binding;

pub use binding::ButtonBinding;

use crate::nav::{ButtonId, ScreenId};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Handler invoked on a matching press; returns the message to dispatch
pub type PressHandler<Msg> = Box<dyn Fn() -> Option<Msg> + Send>;

/// Handle returned by [`EventBridge::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    /// A handle that refers to no subscription
    pub const INERT: SubscriptionHandle = SubscriptionHandle(0);

    pub fn is_inert(&self) -> bool {
        self.0 == 0
    }
}

impl Default for SubscriptionHandle {
    fn default() -> Self {
        Self::INERT
    }
}

struct Entry<Msg> {
    screen: ScreenId,
    button: ButtonId,
    handler: PressHandler<Msg>,
}

/// In-process registry keyed by `(screen id, button id)`
pub struct EventBridge<Msg> {
    screens: HashSet<ScreenId>,
    by_pair: HashMap<(ScreenId, ButtonId), u64>,
    entries: HashMap<u64, Entry<Msg>>,
    next_id: u64,
}

impl<Msg> Default for EventBridge<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg> EventBridge<Msg> {
    pub fn new() -> Self {
        Self {
            screens: HashSet::new(),
            by_pair: HashMap::new(),
            entries: HashMap::new(),
            next_id: 0,
        }
    }

    /// Mark a screen instance as mounted so it may subscribe
    pub fn attach_screen(&mut self, screen: ScreenId) {
        debug!("Attaching screen {} to event bridge", screen);
        self.screens.insert(screen);
    }

    /// Unmount a screen, removing every subscription it holds.
    ///
    /// Returns the number of subscriptions removed.
    pub fn detach_screen(&mut self, screen: &ScreenId) -> usize {
        if !self.screens.remove(screen) {
            return 0;
        }

        let ids: Vec<u64> = self
            .entries
            .iter()
            .filter(|(_, entry)| &entry.screen == screen)
            .map(|(id, _)| *id)
            .collect();

        for id in &ids {
            self.remove_entry(*id);
        }

        debug!("Detached screen {} ({} subscriptions removed)", screen, ids.len());
        ids.len()
    }

    pub fn is_attached(&self, screen: &ScreenId) -> bool {
        self.screens.contains(screen)
    }

    /// Register `handler` for presses of `button` on `screen`.
    ///
    /// An existing subscription for the same pair is torn down first. A
    /// screen that is not attached gets an inert handle and nothing is
    /// registered.
    pub fn subscribe<F>(&mut self, screen: &ScreenId, button: &ButtonId, handler: F) -> SubscriptionHandle
    where
        F: Fn() -> Option<Msg> + Send + 'static,
    {
        if !self.screens.contains(screen) {
            debug!("Ignoring subscription for {}/{}: screen not attached", screen, button);
            return SubscriptionHandle::INERT;
        }

        let pair = (screen.clone(), button.clone());
        if let Some(previous) = self.by_pair.get(&pair).copied() {
            self.remove_entry(previous);
        }

        self.next_id += 1;
        let id = self.next_id;
        self.entries.insert(
            id,
            Entry {
                screen: screen.clone(),
                button: button.clone(),
                handler: Box::new(handler),
            },
        );
        self.by_pair.insert(pair, id);
        SubscriptionHandle(id)
    }

    /// Remove a subscription. Returns false when it was already gone.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        if handle.is_inert() {
            return false;
        }
        self.remove_entry(handle.0)
    }

    pub fn is_active(&self, handle: SubscriptionHandle) -> bool {
        self.entries.contains_key(&handle.0)
    }

    /// Deliver a press to the handler registered for this exact pair
    pub fn press(&self, screen: &ScreenId, button: &ButtonId) -> Option<Msg> {
        let id = self.by_pair.get(&(screen.clone(), button.clone()))?;
        let entry = self.entries.get(id)?;
        (entry.handler)()
    }

    /// Deliver a hardware/software back press to `screen`
    pub fn press_back(&self, screen: &ScreenId) -> Option<Msg> {
        self.press(screen, &ButtonId::hardware_back())
    }

    pub fn subscription_count(&self) -> usize {
        self.entries.len()
    }

    fn remove_entry(&mut self, id: u64) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.by_pair.remove(&(entry.screen, entry.button));
                true
            }
            None => false,
        }
    }
}
