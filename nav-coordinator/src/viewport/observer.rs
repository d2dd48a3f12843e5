use anyhow::Result;
use log::debug;

use super::{ViewToken, VisibleItemSet};
use crate::config::ViewportConfig;
use crate::events::EventBus;

/// Turns viewable-item callbacks into visible-set broadcasts
pub struct ViewportObserver {
    namespace: String,
    topic: String,
    current: Option<VisibleItemSet>,
}

impl ViewportObserver {
    pub fn new(namespace: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            topic: topic.into(),
            current: None,
        }
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(config.namespace.clone(), config.topic.clone())
    }

    /// Last published snapshot
    pub fn current(&self) -> Option<&VisibleItemSet> {
        self.current.as_ref()
    }

    /// Rebuild the visible set from a callback and publish it in full.
    ///
    /// An empty callback publishes nothing and keeps the previous snapshot.
    pub fn on_viewable_items_changed(
        &mut self,
        tokens: &[ViewToken],
        bus: &EventBus,
    ) -> Result<Option<&VisibleItemSet>> {
        if tokens.is_empty() {
            debug!("Skipping empty viewable items callback");
            return Ok(None);
        }

        let visible = VisibleItemSet::from_tokens(&self.namespace, tokens);
        let delivered = bus.publish_serialized(&self.topic, &visible)?;
        debug!(
            "Published {} visible items on '{}' to {} listeners",
            visible.len(),
            self.topic,
            delivered
        );

        self.current = Some(visible);
        Ok(self.current.as_ref())
    }
}
