//! Global outbound event bus.
//!
//! Topics map to a list of listeners; publishing delivers the payload to
//! every current listener. Nothing is retained, so a late listener only sees
//! what is published after it subscribes.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Topic carrying the map of post keys currently inside the viewport
pub const ITEM_IN_VIEWPORT: &str = "item_in_viewport";

pub type EventHandler = Box<dyn Fn(&Value) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<(ListenerId, EventHandler)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, topic: impl Into<String>, handler: F) -> ListenerId
    where
        F: Fn(&Value) + Send + 'static,
    {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners
            .entry(topic.into())
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        for handlers in self.listeners.values_mut() {
            if let Some(pos) = handlers.iter().position(|(listener, _)| *listener == id) {
                handlers.remove(pos);
                return true;
            }
        }
        false
    }

    /// Publish to every listener of `topic`, returning how many received it
    pub fn publish(&self, topic: &str, data: &Value) -> usize {
        let Some(handlers) = self.listeners.get(topic) else {
            debug!("No listeners for topic '{}'", topic);
            return 0;
        };
        for (_, handler) in handlers {
            handler(data);
        }
        handlers.len()
    }

    pub fn publish_serialized<T: Serialize>(&self, topic: &str, data: &T) -> Result<usize> {
        let value = serde_json::to_value(data)
            .with_context(|| format!("Failed to serialize payload for topic '{}'", topic))?;
        Ok(self.publish(topic, &value))
    }
}
