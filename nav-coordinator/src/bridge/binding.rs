use super::{EventBridge, SubscriptionHandle};
use crate::nav::{ButtonId, ScreenId};
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A button subscription that is re-created only when its declared
/// dependencies change.
///
/// Each call to [`ButtonBinding::bind`] compares the dependency fingerprint
/// with the one the live subscription was created with. On a change the old
/// subscription is torn down before the new handler is registered, so a
/// handler built from outdated state can never fire.
#[derive(Debug)]
pub struct ButtonBinding {
    button: ButtonId,
    deps: Option<u64>,
    handle: SubscriptionHandle,
}

impl ButtonBinding {
    pub fn new(button: ButtonId) -> Self {
        Self {
            button,
            deps: None,
            handle: SubscriptionHandle::INERT,
        }
    }

    pub fn button(&self) -> &ButtonId {
        &self.button
    }

    pub fn handle(&self) -> SubscriptionHandle {
        self.handle
    }

    /// Ensure the subscription matches `deps`.
    ///
    /// Returns true when a new subscription was registered.
    pub fn bind<Msg, D, F>(&mut self, bridge: &mut EventBridge<Msg>, screen: &ScreenId, deps: &D, handler: F) -> bool
    where
        D: Hash + ?Sized,
        F: Fn() -> Option<Msg> + Send + 'static,
    {
        let fingerprint = fingerprint(deps);
        if self.deps == Some(fingerprint) && bridge.is_active(self.handle) {
            return false;
        }

        if bridge.unsubscribe(self.handle) {
            debug!("Dependencies of {}/{} changed, re-subscribing", screen, self.button);
        }
        self.handle = bridge.subscribe(screen, &self.button, handler);
        self.deps = Some(fingerprint);
        !self.handle.is_inert()
    }

    /// Tear the subscription down. Safe to call more than once.
    pub fn release<Msg>(&mut self, bridge: &mut EventBridge<Msg>) {
        bridge.unsubscribe(self.handle);
        self.handle = SubscriptionHandle::INERT;
        self.deps = None;
    }
}

pub(crate) fn fingerprint<D: Hash + ?Sized>(deps: &D) -> u64 {
    let mut hasher = DefaultHasher::new();
    deps.hash(&mut hasher);
    hasher.finish()
}
