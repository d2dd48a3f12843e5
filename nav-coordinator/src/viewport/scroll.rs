use log::debug;
use std::time::{Duration, Instant};

/// Debounces raw scroll offsets into committed positions.
///
/// An offset is committed once no newer sample has arrived for the debounce
/// window. Callers pass the clock in, so the sampler never sleeps.
#[derive(Debug, Clone)]
pub struct ScrollSampler {
    debounce: Duration,
    pending: Option<(f64, Instant)>,
    committed: Option<f64>,
}

impl ScrollSampler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: None,
            committed: None,
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Record a raw sample, restarting the debounce window
    pub fn on_scroll(&mut self, offset: f64, now: Instant) {
        self.pending = Some((offset, now));
    }

    /// Commit the pending sample if its window has elapsed.
    ///
    /// Returns the newly committed offset.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let (offset, at) = self.pending?;
        if now.saturating_duration_since(at) < self.debounce {
            return None;
        }

        self.pending = None;
        self.committed = Some(offset);
        debug!("Committed scroll offset {}", offset);
        Some(offset)
    }

    pub fn committed(&self) -> Option<f64> {
        self.committed
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
