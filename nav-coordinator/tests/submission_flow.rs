//! End-to-end tests of the create-team screen hosted by the screen runtime

use async_trait::async_trait;
use nav_coordinator::config::CoordinatorConfig;
use nav_coordinator::error::StaleDispatch;
use nav_coordinator::nav::{
    BottomSheet, ButtonId, ButtonLayout, NavCall, Navigator, Presentation, RecordingNavigator, ScreenId,
};
use nav_coordinator::screen::ScreenRuntime;
use nav_coordinator::screens::create_team::{CLOSE_BUTTON_ID, CREATE_BUTTON_ID, Msg};
use nav_coordinator::screens::{CreateTeamParams, CreateTeamScreen};
use nav_coordinator::submission::{
    ConversationKind, CreatedEntity, Phase, RemoteError, RemoteMutation, RemoteReply, ScriptedRemote,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

fn mount(remote: Arc<dyn RemoteMutation>, overlay: bool) -> ScreenRuntime<CreateTeamScreen> {
    let params = CreateTeamParams::from_config(
        ScreenId::new("CreateTeam-1"),
        &CoordinatorConfig::default(),
        remote,
        overlay,
    );
    ScreenRuntime::mount(ScreenId::new("CreateTeam-1"), params)
}

fn create_enabled(calls: &[NavCall]) -> Vec<bool> {
    calls
        .iter()
        .filter_map(|call| match call {
            NavCall::SetButtons { layout, .. } => Some(layout.is_enabled(&ButtonId::new(CREATE_BUTTON_ID))),
            _ => None,
        })
        .collect()
}

/// Remote that blocks until released
struct GatedRemote {
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl RemoteMutation for GatedRemote {
    async fn create_entity(
        &self,
        _server_url: &str,
        name: &str,
        _kind: ConversationKind,
    ) -> Result<CreatedEntity, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(CreatedEntity {
            id: "late".to_string(),
            display_name: name.to_string(),
        })
    }
}

/// Navigator whose next keyboard dismissal fails once
#[derive(Default)]
struct FlakyNavigator {
    inner: RecordingNavigator,
    fail_keyboard: AtomicBool,
}

impl FlakyNavigator {
    fn failing_once() -> Self {
        Self {
            inner: RecordingNavigator::new(),
            fail_keyboard: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl Navigator for FlakyNavigator {
    async fn set_buttons(&self, screen: &ScreenId, layout: &ButtonLayout) -> anyhow::Result<()> {
        self.inner.set_buttons(screen, layout).await
    }

    async fn dismiss_keyboard(&self) -> anyhow::Result<()> {
        if self.fail_keyboard.swap(false, Ordering::SeqCst) {
            anyhow::bail!("keyboard is busy");
        }
        self.inner.dismiss_keyboard().await
    }

    async fn pop(&self, screen: &ScreenId) -> anyhow::Result<()> {
        self.inner.pop(screen).await
    }

    async fn dismiss_modal(&self, screen: &ScreenId) -> anyhow::Result<()> {
        self.inner.dismiss_modal(screen).await
    }

    async fn show_modal(&self, presentation: &Presentation) -> anyhow::Result<ScreenId> {
        self.inner.show_modal(presentation).await
    }

    async fn show_bottom_sheet(&self, sheet: &BottomSheet) -> anyhow::Result<()> {
        self.inner.show_bottom_sheet(sheet).await
    }

    async fn dismiss_bottom_sheet(&self) -> anyhow::Result<()> {
        self.inner.dismiss_bottom_sheet().await
    }
}

#[tokio::test]
async fn test_successful_create_closes_exactly_once() {
    let navigator = RecordingNavigator::new();
    let remote = Arc::new(ScriptedRemote::new([RemoteReply::Ok { id: "t1".into() }]));
    let mut screen = mount(remote.clone(), true);

    screen.dispatch(Msg::DisplayNameChanged("Eng".into())).unwrap();
    assert_eq!(screen.state().unwrap().phase(), Phase::Idle);

    assert!(screen.press(&ButtonId::new(CREATE_BUTTON_ID)));
    assert_eq!(screen.state().unwrap().phase(), Phase::Saving);
    assert!(!screen.state().unwrap().can_save());

    screen.settle().await;
    screen.flush(&navigator).await.unwrap();

    assert!(!screen.is_mounted());
    assert_eq!(remote.call_count(), 1);
    assert_eq!(remote.calls()[0].kind, ConversationKind::Open);
    assert_eq!(remote.calls()[0].name, "Eng");

    let calls = navigator.calls();
    assert_eq!(navigator.count(NavCall::is_close), 1);
    assert_eq!(
        navigator.count(|c| matches!(c, NavCall::DismissModal { screen } if screen.as_str() == "CreateTeam-1")),
        1
    );

    // Keyboard goes down before the modal is dismissed
    let keyboard = navigator.seqs(|c| matches!(c, NavCall::DismissKeyboard));
    let close = navigator.seqs(NavCall::is_close);
    assert!(keyboard.iter().any(|k| *k < close[0]));

    // Disabled at mount, enabled by "Eng", disabled while saving. The layout
    // computed after completion is never pushed to the closed screen.
    assert_eq!(create_enabled(&calls), vec![false, true, false]);
}

#[tokio::test]
async fn test_empty_name_fails_without_remote_call() {
    let navigator = RecordingNavigator::new();
    let remote = Arc::new(ScriptedRemote::default());
    let mut screen = mount(remote.clone(), true);

    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    screen.settle().await;
    screen.flush(&navigator).await.unwrap();

    let state = screen.state().unwrap();
    assert_eq!(state.phase(), Phase::Failure);
    assert_eq!(state.error(), Some("Name is required"));
    assert_eq!(remote.call_count(), 0);
    assert_eq!(navigator.count(NavCall::is_close), 0);
}

#[tokio::test]
async fn test_remote_failure_then_retry() {
    let navigator = RecordingNavigator::new();
    let remote = Arc::new(ScriptedRemote::new([
        RemoteReply::Error {
            message: "A team with that name already exists".into(),
        },
        RemoteReply::Ok { id: "t2".into() },
    ]));
    let mut screen = mount(remote.clone(), false);

    screen.dispatch(Msg::DisplayNameChanged("Eng".into())).unwrap();
    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    screen.settle().await;
    screen.flush(&navigator).await.unwrap();

    {
        let state = screen.state().unwrap();
        assert_eq!(state.phase(), Phase::Failure);
        assert_eq!(state.error(), Some("A team with that name already exists"));
        assert!(state.can_save());
    }

    screen.dispatch(Msg::DisplayNameChanged("Engineering".into())).unwrap();
    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    screen.settle().await;
    screen.flush(&navigator).await.unwrap();

    assert!(!screen.is_mounted());
    assert_eq!(remote.call_count(), 2);
    assert_eq!(navigator.count(|c| matches!(c, NavCall::Pop { .. })), 1);
    assert_eq!(navigator.count(|c| matches!(c, NavCall::DismissModal { .. })), 0);
}

#[tokio::test]
async fn test_unmount_during_saving_drops_result() {
    let navigator = RecordingNavigator::new();
    let remote = Arc::new(GatedRemote {
        release: Notify::new(),
        calls: AtomicUsize::new(0),
    });
    let mut screen = mount(remote.clone(), true);

    screen.dispatch(Msg::DisplayNameChanged("Eng".into())).unwrap();
    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    assert_eq!(screen.poll_async(), 0);
    assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
    assert!(screen.has_pending_async());

    screen.unmount();
    remote.release.notify_waiters();

    assert!(!screen.has_pending_async());
    assert!(!screen.next_completion().await);
    assert_eq!(screen.subscription_count(), 0);

    let late = screen.dispatch(Msg::CreateFinished {
        attempt: 1,
        result: Ok(CreatedEntity {
            id: "late".into(),
            display_name: "Eng".into(),
        }),
    });
    assert_eq!(
        late,
        Err(StaleDispatch {
            screen: ScreenId::new("CreateTeam-1")
        })
    );

    screen.flush(&navigator).await.unwrap();
    assert_eq!(navigator.count(NavCall::is_close), 0);
}

#[tokio::test]
async fn test_back_and_close_share_one_close() {
    let navigator = RecordingNavigator::new();
    let mut screen = mount(Arc::new(ScriptedRemote::default()), true);

    assert!(screen.press(&ButtonId::new(CLOSE_BUTTON_ID)));
    assert!(screen.press_back());
    screen.flush(&navigator).await.unwrap();

    assert_eq!(navigator.count(NavCall::is_close), 1);
    assert!(!screen.is_mounted());

    // Torn down: nothing is listening any more
    assert!(!screen.press_back());
    assert!(!screen.press(&ButtonId::new(CLOSE_BUTTON_ID)));
    screen.flush(&navigator).await.unwrap();
    assert_eq!(navigator.count(NavCall::is_close), 1);
}

#[tokio::test]
async fn test_second_create_press_while_saving_is_ignored() {
    let navigator = RecordingNavigator::new();
    let remote = Arc::new(ScriptedRemote::default());
    let mut screen = mount(remote.clone(), true);

    screen.dispatch(Msg::DisplayNameChanged("Eng".into())).unwrap();
    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    screen.settle().await;
    screen.flush(&navigator).await.unwrap();

    assert_eq!(remote.call_count(), 1);
    assert_eq!(navigator.count(NavCall::is_close), 1);
}

#[tokio::test]
async fn test_buttons_follow_gate() {
    let navigator = RecordingNavigator::new();
    let mut screen = mount(Arc::new(ScriptedRemote::default()), true);
    screen.flush(&navigator).await.unwrap();

    screen.dispatch(Msg::DisplayNameChanged("E".into())).unwrap();
    screen.flush(&navigator).await.unwrap();
    screen.dispatch(Msg::DisplayNameChanged("Eng".into())).unwrap();
    screen.flush(&navigator).await.unwrap();
    screen.dispatch(Msg::DisplayNameChanged("Engineering".into())).unwrap();
    screen.flush(&navigator).await.unwrap();

    // Only changes are pushed: disabled at mount, enabled once at "Eng"
    assert_eq!(create_enabled(&navigator.calls()), vec![false, true]);

    let layout = screen.buttons().unwrap();
    assert_eq!(layout.left[0].id.as_str(), CLOSE_BUTTON_ID);
    assert_eq!(layout.right[0].text.as_deref(), Some("Create"));
}

#[tokio::test]
async fn test_close_retries_after_navigator_error() {
    let navigator = FlakyNavigator::failing_once();
    let mut screen = mount(Arc::new(ScriptedRemote::default()), true);
    screen.flush(&navigator).await.unwrap();

    assert!(screen.press(&ButtonId::new(CLOSE_BUTTON_ID)));
    assert!(screen.flush(&navigator).await.is_err());
    assert!(screen.is_mounted());
    assert_eq!(navigator.inner.count(NavCall::is_close), 0);

    // The close is still queued; further presses do not add another
    assert!(screen.press(&ButtonId::new(CLOSE_BUTTON_ID)));
    assert!(screen.press_back());
    screen.flush(&navigator).await.unwrap();

    assert!(!screen.is_mounted());
    assert_eq!(navigator.inner.count(NavCall::is_close), 1);
    assert_eq!(
        navigator.inner.seqs(|c| matches!(c, NavCall::DismissKeyboard)).len(),
        1
    );
}

#[tokio::test]
async fn test_completed_create_closes_after_navigator_error() {
    let navigator = FlakyNavigator::default();
    let remote = Arc::new(ScriptedRemote::default());
    let mut screen = mount(remote.clone(), false);
    screen.flush(&navigator).await.unwrap();

    screen.dispatch(Msg::DisplayNameChanged("Eng".into())).unwrap();
    screen.press(&ButtonId::new(CREATE_BUTTON_ID));
    screen.flush(&navigator).await.unwrap();
    screen.settle().await;

    navigator.fail_keyboard.store(true, Ordering::SeqCst);
    assert!(screen.flush(&navigator).await.is_err());
    assert_eq!(screen.state().unwrap().phase(), Phase::Complete);

    screen.flush(&navigator).await.unwrap();
    assert!(!screen.is_mounted());
    assert_eq!(remote.call_count(), 1);
    assert_eq!(
        navigator.inner.calls().iter().filter(|c| c.is_close()).collect::<Vec<_>>(),
        vec![&NavCall::Pop {
            screen: ScreenId::new("CreateTeam-1")
        }]
    );
}
