use anyhow::Result;
use futures::FutureExt;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, warn};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;

use crate::bridge::{ButtonBinding, EventBridge};
use crate::error::StaleDispatch;
use crate::nav::{self, ButtonId, ButtonLayout, NavCommand, Navigator, ScreenId};
use crate::screen::{Command, Screen, Subscription};

type PendingFuture<Msg> = Pin<Box<dyn Future<Output = Msg> + Send>>;

/// The runtime manages one screen instance: event routing, subscription
/// bookkeeping and command execution.
///
/// Side effects are queued rather than executed inline; the host drains them
/// with [`ScreenRuntime::flush`] (or [`ScreenRuntime::take_navigation`]) so that ordering
/// is explicit and testable.
pub struct ScreenRuntime<S: Screen> {
    /// Id of the mounted screen instance
    screen_id: ScreenId,

    /// Current screen state, `None` once unmounted
    state: Option<S::State>,

    /// Button press registry
    bridge: EventBridge<S::Msg>,

    /// Live subscriptions keyed by button id
    bindings: HashMap<ButtonId, ButtonBinding>,

    /// Last button layout pushed to the navigation surface
    last_buttons: Option<ButtonLayout>,

    /// Pending navigation commands, in issue order
    pending_nav: Vec<NavCommand>,

    /// Pending async commands
    pending_async: FuturesUnordered<PendingFuture<S::Msg>>,
}

impl<S: Screen> ScreenRuntime<S> {
    /// Mount a screen instance and run its init command
    pub fn mount(screen_id: ScreenId, params: S::Params) -> Self {
        let mut bridge = EventBridge::new();
        bridge.attach_screen(screen_id.clone());

        let (state, init_command) = S::init(params);
        let title = S::title(&state);

        let mut runtime = Self {
            screen_id,
            state: Some(state),
            bridge,
            bindings: HashMap::new(),
            last_buttons: None,
            pending_nav: Vec::new(),
            pending_async: FuturesUnordered::new(),
        };

        info!("Mounted screen {} ({})", runtime.screen_id, title);
        runtime.execute_command(init_command);
        runtime.sync();
        runtime
    }

    pub fn screen_id(&self) -> &ScreenId {
        &self.screen_id
    }

    pub fn state(&self) -> Option<&S::State> {
        self.state.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_some()
    }

    /// The button layout most recently declared by the screen
    pub fn buttons(&self) -> Option<&ButtonLayout> {
        self.last_buttons.as_ref()
    }

    pub fn subscription_count(&self) -> usize {
        self.bridge.subscription_count()
    }

    /// Route a navigation-bar press to the screen.
    ///
    /// Returns true when a subscription handled it.
    pub fn press(&mut self, button: &ButtonId) -> bool {
        match self.bridge.press(&self.screen_id, button) {
            Some(msg) => self.dispatch(msg).is_ok(),
            None => {
                debug!("No handler for {}/{}", self.screen_id, button);
                false
            }
        }
    }

    /// Route a hardware/software back press to the screen
    pub fn press_back(&mut self) -> bool {
        self.press(&ButtonId::hardware_back())
    }

    /// Run a message through the screen's update function
    pub fn dispatch(&mut self, msg: S::Msg) -> Result<(), StaleDispatch> {
        let Some(state) = self.state.as_mut() else {
            debug!("Dropping message for unmounted screen {}", self.screen_id);
            return Err(StaleDispatch {
                screen: self.screen_id.clone(),
            });
        };

        let command = S::update(state, msg);
        self.execute_command(command);
        self.sync();
        Ok(())
    }

    /// Take the pending navigation commands
    pub fn take_navigation(&mut self) -> Vec<NavCommand> {
        std::mem::take(&mut self.pending_nav)
    }

    pub fn has_pending_async(&self) -> bool {
        !self.pending_async.is_empty()
    }

    /// Dispatch every async command that has already completed, without
    /// waiting. Returns how many were dispatched.
    pub fn poll_async(&mut self) -> usize {
        let mut dispatched = 0;
        while let Some(Some(msg)) = self.pending_async.next().now_or_never() {
            if self.dispatch(msg).is_ok() {
                dispatched += 1;
            }
        }
        dispatched
    }

    /// Wait for the next async command to complete and dispatch its message.
    ///
    /// Returns false when nothing was pending.
    pub async fn next_completion(&mut self) -> bool {
        let next = self.pending_async.next().await;
        match next {
            Some(msg) => {
                let _ = self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Drive every pending async command to completion
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    /// Execute queued navigation effects.
    ///
    /// Navigation runs strictly in issue order. A command that closes this
    /// screen unmounts it once executed; button updates for it are skipped
    /// from then on. When the navigator fails, the failed command and
    /// everything after it stay queued for the next flush.
    pub async fn flush(&mut self, navigator: &dyn Navigator) -> Result<()> {
        let mut queue: VecDeque<NavCommand> = self.take_navigation().into();
        while let Some(command) = queue.pop_front() {
            if !self.is_mounted() && matches!(&command, NavCommand::SetButtons { screen, .. } if screen == &self.screen_id) {
                continue;
            }
            if let Err(e) = nav::execute(navigator, &command).await {
                warn!("Navigation failed on {}, {} command(s) requeued: {}", self.screen_id, queue.len() + 1, e);
                queue.push_front(command);
                let queued_since = std::mem::take(&mut self.pending_nav);
                self.pending_nav = queue.into_iter().chain(queued_since).collect();
                return Err(e);
            }
            if command.closes() == Some(&self.screen_id) {
                self.unmount();
            }
        }
        Ok(())
    }

    /// Tear the screen down: drops in-flight async work, removes every
    /// subscription and discards the state. Idempotent.
    pub fn unmount(&mut self) {
        if self.state.take().is_none() {
            return;
        }

        let dropped = self.pending_async.len();
        self.pending_async = FuturesUnordered::new();
        for binding in self.bindings.values_mut() {
            binding.release(&mut self.bridge);
        }
        self.bindings.clear();
        self.bridge.detach_screen(&self.screen_id);

        info!(
            "Unmounted screen {} ({} in-flight operations dropped)",
            self.screen_id, dropped
        );
    }

    /// Execute a command
    fn execute_command(&mut self, command: Command<S::Msg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd);
                }
            }
            Command::Navigate(nav) => self.pending_nav.push(nav),
            Command::Perform(future) => self.pending_async.push(future),
        }
    }

    fn sync(&mut self) {
        self.sync_subscriptions();
        self.sync_buttons();
    }

    /// Bring bridge subscriptions in line with what the screen declares
    fn sync_subscriptions(&mut self) {
        let Some(state) = self.state.as_ref() else {
            return;
        };

        let declared = S::subscriptions(state);
        let mut seen = Vec::with_capacity(declared.len());

        for subscription in declared {
            let button = subscription.button();
            let (deps, msg) = match subscription {
                Subscription::NavButton { deps, msg, .. } | Subscription::BackPress { deps, msg } => (deps, msg),
            };
            let binding = self
                .bindings
                .entry(button.clone())
                .or_insert_with(|| ButtonBinding::new(button.clone()));
            binding.bind(&mut self.bridge, &self.screen_id, &deps, move || Some(msg.clone()));
            seen.push(button);
        }

        let bridge = &mut self.bridge;
        self.bindings.retain(|button, binding| {
            let keep = seen.contains(button);
            if !keep {
                binding.release(bridge);
            }
            keep
        });
    }

    /// Push the navigation-bar buttons when they changed
    fn sync_buttons(&mut self) {
        let Some(state) = self.state.as_ref() else {
            return;
        };

        let layout = S::buttons(state);
        if self.last_buttons.as_ref() == Some(&layout) {
            return;
        }

        self.pending_nav.push(NavCommand::SetButtons {
            screen: self.screen_id.clone(),
            layout: layout.clone(),
        });
        self.last_buttons = Some(layout);
    }
}
