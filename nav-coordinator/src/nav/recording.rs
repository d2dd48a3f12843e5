//! In-process navigator that records every call with a sequence number.
//!
//! Used by the scenario replay and by tests to assert ordering invariants
//! such as "keyboard dismissed before pop" and "sheet dismissed before
//! present".

use super::{AvailableScreen, BottomSheet, ButtonLayout, Navigator, Presentation, ScreenId, SurfaceHandle};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;

/// A recorded navigator call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum NavCall {
    SetButtons { screen: ScreenId, layout: ButtonLayout },
    DismissKeyboard,
    Pop { screen: ScreenId },
    DismissModal { screen: ScreenId },
    ShowModal { screen: AvailableScreen, title: String, id: ScreenId },
    ShowBottomSheet { surface: SurfaceHandle, items: usize },
    DismissBottomSheet,
}

impl NavCall {
    pub fn is_close(&self) -> bool {
        matches!(self, NavCall::Pop { .. } | NavCall::DismissModal { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub seq: u64,
    #[serde(flatten)]
    pub call: NavCall,
}

#[derive(Default)]
struct Recorder {
    next_seq: u64,
    next_screen: u64,
    trace: Vec<TraceEntry>,
    sheet_open: bool,
}

impl Recorder {
    fn record(&mut self, call: NavCall) {
        self.next_seq += 1;
        self.trace.push(TraceEntry {
            seq: self.next_seq,
            call,
        });
    }
}

/// Navigator that keeps a sequenced trace instead of driving a real UI
#[derive(Default)]
pub struct RecordingNavigator {
    inner: Mutex<Recorder>,
    sheet_dismiss_delay: Option<Duration>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the bottom-sheet close animation taking `delay`
    pub fn with_sheet_dismiss_delay(mut self, delay: Duration) -> Self {
        self.sheet_dismiss_delay = Some(delay);
        self
    }

    pub fn trace(&self) -> Vec<TraceEntry> {
        self.lock().map(|r| r.trace.clone()).unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<NavCall> {
        self.trace().into_iter().map(|e| e.call).collect()
    }

    /// Number of recorded calls matching `predicate`
    pub fn count(&self, predicate: impl Fn(&NavCall) -> bool) -> usize {
        self.trace().iter().filter(|e| predicate(&e.call)).count()
    }

    /// Sequence numbers of calls matching `predicate`
    pub fn seqs(&self, predicate: impl Fn(&NavCall) -> bool) -> Vec<u64> {
        self.trace()
            .into_iter()
            .filter(|e| predicate(&e.call))
            .map(|e| e.seq)
            .collect()
    }

    pub fn is_sheet_open(&self) -> bool {
        self.lock().map(|r| r.sheet_open).unwrap_or(false)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Recorder>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("recording navigator lock poisoned"))
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn set_buttons(&self, screen: &ScreenId, layout: &ButtonLayout) -> Result<()> {
        self.lock()?.record(NavCall::SetButtons {
            screen: screen.clone(),
            layout: layout.clone(),
        });
        Ok(())
    }

    async fn dismiss_keyboard(&self) -> Result<()> {
        self.lock()?.record(NavCall::DismissKeyboard);
        Ok(())
    }

    async fn pop(&self, screen: &ScreenId) -> Result<()> {
        self.lock()?.record(NavCall::Pop {
            screen: screen.clone(),
        });
        Ok(())
    }

    async fn dismiss_modal(&self, screen: &ScreenId) -> Result<()> {
        self.lock()?.record(NavCall::DismissModal {
            screen: screen.clone(),
        });
        Ok(())
    }

    async fn show_modal(&self, presentation: &Presentation) -> Result<ScreenId> {
        let mut recorder = self.lock()?;
        if recorder.sheet_open {
            warn!("Presenting {} while a bottom sheet is still open", presentation.screen);
        }
        recorder.next_screen += 1;
        let id = ScreenId::new(format!("{}-{}", presentation.screen.name(), recorder.next_screen));
        recorder.record(NavCall::ShowModal {
            screen: presentation.screen,
            title: presentation.title.clone(),
            id: id.clone(),
        });
        Ok(id)
    }

    async fn show_bottom_sheet(&self, sheet: &BottomSheet) -> Result<()> {
        let mut recorder = self.lock()?;
        recorder.sheet_open = true;
        recorder.record(NavCall::ShowBottomSheet {
            surface: sheet.surface,
            items: sheet.items.len(),
        });
        Ok(())
    }

    async fn dismiss_bottom_sheet(&self) -> Result<()> {
        // Recorded when dismissal is requested, resolved after the animation
        self.lock()?.record(NavCall::DismissBottomSheet);
        if let Some(delay) = self.sheet_dismiss_delay {
            tokio::time::sleep(delay).await;
        }
        debug!("Bottom sheet dismissed");
        self.lock()?.sheet_open = false;
        Ok(())
    }
}
