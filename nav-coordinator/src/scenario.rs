//! Scripted sessions replayed against the recording navigator.
//!
//! A scenario is a TOML file listing canned remote replies and a sequence of
//! steps (typing, presses, menu use, viewport callbacks). Replaying it yields
//! the sequenced navigator trace and everything published on the event bus.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::CoordinatorConfig;
use crate::events::EventBus;
use crate::menu::{Capabilities, MenuAction, MenuOrchestrator, MenuTrigger, ServersMenu};
use crate::nav::{self, AvailableScreen, ButtonId, Navigator, RecordingNavigator, ScreenId, SurfaceHandle, TraceEntry};
use crate::screen::ScreenRuntime;
use crate::screens::create_team::{self, CreateTeamParams, CreateTeamScreen};
use crate::submission::{EditTarget, Phase, RemoteMutation, RemoteReply, ScriptedRemote};
use crate::viewport::{ScrollSampler, ViewToken, ViewportObserver};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub screen: ScreenSetup,
    #[serde(default)]
    pub capabilities: Capabilities,
    /// Replies handed out by the scripted remote, in call order
    #[serde(default)]
    pub remote: Vec<RemoteReply>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// How the create-team screen is shown when the scenario starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSetup {
    /// Mount the screen before the first step
    #[serde(default = "default_true")]
    pub mounted: bool,
    #[serde(default = "default_true")]
    pub presented_as_overlay: bool,
    #[serde(default)]
    pub editing: Option<EditTarget>,
}

fn default_true() -> bool {
    true
}

impl Default for ScreenSetup {
    fn default() -> Self {
        Self {
            mounted: true,
            presented_as_overlay: true,
            editing: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Replace the display-name input
    Type { text: String },
    /// Press a navigation-bar button of the mounted screen
    Press { button: String },
    /// Hardware back
    Back,
    /// Let every in-flight remote call finish
    Settle,
    /// Tear the screen down, dropping in-flight work
    Unmount,
    /// Tap the server icon
    OpenMenu,
    /// Open the menu through the imperative handle
    TriggerMenu,
    Select { entry: MenuAction },
    /// Swipe the sheet away
    DismissMenu,
    Viewable { items: Vec<ViewToken> },
    Scroll { offset: f64, at_ms: u64 },
}

/// Outcome of a replay
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub trace: Vec<TraceEntry>,
    pub published: Vec<(String, Value)>,
    pub presented: Vec<ScreenId>,
    pub phase: Option<Phase>,
    pub error: Option<String>,
    pub remote_calls: usize,
    pub committed_scroll: Option<f64>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read scenario file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse scenario file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

struct Session<'a> {
    config: &'a CoordinatorConfig,
    navigator: &'a RecordingNavigator,
    bus: EventBus,
    remote: Arc<ScriptedRemote>,
    setup: ScreenSetup,
    screen: Option<ScreenRuntime<CreateTeamScreen>>,
    menu: ServersMenu,
    sheet: Option<SurfaceHandle>,
    observer: ViewportObserver,
    sampler: ScrollSampler,
    started: Instant,
    presented: Vec<ScreenId>,
    last_phase: Option<Phase>,
    last_error: Option<String>,
}

impl Session<'_> {
    fn mount(&mut self, screen_id: ScreenId, presented_as_overlay: bool) {
        let remote: Arc<dyn RemoteMutation> = self.remote.clone();
        let mut params = CreateTeamParams::from_config(screen_id.clone(), self.config, remote, presented_as_overlay);
        if let Some(target) = self.setup.editing.clone() {
            params = params.editing(target);
        }
        self.screen = Some(ScreenRuntime::mount(screen_id, params));
    }

    fn screen_mut(&mut self, step: &Step) -> Option<&mut ScreenRuntime<CreateTeamScreen>> {
        let screen = self.screen.as_mut().filter(|s| s.is_mounted());
        if screen.is_none() {
            warn!("No mounted screen for {:?}", step);
        }
        screen
    }

    async fn apply(&mut self, step: &Step) -> Result<()> {
        debug!("Step: {:?}", step);
        match step {
            Step::Type { text } => {
                if let Some(screen) = self.screen_mut(step) {
                    let _ = screen.dispatch(create_team::Msg::DisplayNameChanged(text.clone()));
                }
            }
            Step::Press { button } => {
                if let Some(screen) = self.screen_mut(step) {
                    screen.press(&ButtonId::new(button.as_str()));
                }
            }
            Step::Back => {
                if let Some(screen) = self.screen_mut(step) {
                    screen.press_back();
                }
            }
            Step::Settle => {
                if let Some(screen) = self.screen.as_mut() {
                    screen.settle().await;
                }
            }
            Step::Unmount => {
                if let Some(screen) = self.screen.as_mut() {
                    screen.unmount();
                }
            }
            Step::OpenMenu | Step::TriggerMenu => {
                let opened = if matches!(step, Step::OpenMenu) {
                    self.menu.on_icon_press()
                } else {
                    self.menu.open_servers()
                };
                self.sheet = Some(opened.handle);
                if let Some(command) = opened.command {
                    nav::execute(self.navigator, &command).await?;
                }
            }
            Step::Select { entry } => {
                let Some(handle) = self.sheet else {
                    warn!("Select {} without an open menu", entry);
                    return Ok(());
                };
                if let Some(command) = self.menu.orchestrator_mut().select(handle, *entry) {
                    self.sheet = None;
                    if let Some(presented) = nav::execute(self.navigator, &command).await? {
                        if entry.target() == AvailableScreen::CreateTeam {
                            self.mount(presented.clone(), true);
                        }
                        self.presented.push(presented);
                    }
                }
            }
            Step::DismissMenu => {
                if let Some(handle) = self.sheet.take() {
                    if self.menu.orchestrator_mut().dismissed_externally(handle) {
                        self.navigator.dismiss_bottom_sheet().await?;
                    }
                }
            }
            Step::Viewable { items } => {
                self.observer.on_viewable_items_changed(items, &self.bus)?;
            }
            Step::Scroll { offset, at_ms } => {
                let now = self.started + Duration::from_millis(*at_ms);
                self.sampler.poll(now);
                self.sampler.on_scroll(*offset, now);
            }
        }

        self.flush().await
    }

    async fn flush(&mut self) -> Result<()> {
        let Some(screen) = self.screen.as_mut() else {
            return Ok(());
        };

        screen.poll_async();
        if let Some(state) = screen.state() {
            self.last_phase = Some(state.phase());
            self.last_error = state.error().map(str::to_string);
        }
        screen.flush(self.navigator).await
    }
}

/// Replay `scenario`, recording navigation on `navigator`
pub async fn run(scenario: &Scenario, config: &CoordinatorConfig, navigator: &RecordingNavigator) -> Result<Report> {
    info!(
        "Replaying scenario {} ({} steps)",
        scenario.name.as_deref().unwrap_or("<unnamed>"),
        scenario.steps.len()
    );

    let published = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    let topic = config.viewport.topic.clone();
    let sink = Arc::clone(&published);
    bus.subscribe(topic.clone(), move |data: &Value| {
        if let Ok(mut events) = sink.lock() {
            events.push((topic.clone(), data.clone()));
        }
    });

    let mut session = Session {
        config,
        navigator,
        bus,
        remote: Arc::new(ScriptedRemote::new(scenario.remote.clone())),
        setup: scenario.screen.clone(),
        screen: None,
        menu: ServersMenu::new(
            scenario.capabilities,
            ScreenId::new("ChannelList"),
            MenuOrchestrator::from_config(config),
        ),
        sheet: None,
        observer: ViewportObserver::from_config(&config.viewport),
        sampler: ScrollSampler::new(config.viewport.scroll_debounce()),
        started: Instant::now(),
        presented: Vec::new(),
        last_phase: None,
        last_error: None,
    };

    if scenario.screen.mounted {
        session.mount(ScreenId::new("CreateTeam-0"), scenario.screen.presented_as_overlay);
        session.flush().await?;
    }

    let mut last_scroll_ms = 0;
    for step in &scenario.steps {
        if let Step::Scroll { at_ms, .. } = step {
            last_scroll_ms = *at_ms;
        }
        session.apply(step).await?;
    }

    let quiet = session.started + Duration::from_millis(last_scroll_ms) + session.sampler.debounce();
    session.sampler.poll(quiet);

    let published = published.lock().map(|events| events.clone()).unwrap_or_default();
    Ok(Report {
        trace: navigator.trace(),
        published,
        presented: session.presented,
        phase: session.last_phase,
        error: session.last_error,
        remote_calls: session.remote.call_count(),
        committed_scroll: session.sampler.committed(),
    })
}
