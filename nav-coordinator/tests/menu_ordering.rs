//! The server menu must be fully dismissed before the next screen appears

use nav_coordinator::config::CoordinatorConfig;
use nav_coordinator::menu::{Capabilities, MenuAction, MenuOrchestrator, MenuTrigger, ServersMenu};
use nav_coordinator::nav::{self, AvailableScreen, NavCall, NavCommand, RecordingNavigator, ScreenId};
use nav_coordinator::scenario::{self, Scenario, ScreenSetup, Step};
use nav_coordinator::submission::Phase;
use std::time::Duration;

fn servers_menu(capabilities: Capabilities) -> ServersMenu {
    ServersMenu::new(
        capabilities,
        ScreenId::new("ChannelList"),
        MenuOrchestrator::from_config(&CoordinatorConfig::default()),
    )
}

#[tokio::test]
async fn test_every_action_dismisses_before_presenting() {
    let navigator = RecordingNavigator::new().with_sheet_dismiss_delay(Duration::from_millis(20));
    let mut menu = servers_menu(Capabilities::all());

    for action in MenuAction::ALL {
        let opened = menu.on_icon_press();
        nav::execute(&navigator, opened.command.as_ref().unwrap()).await.unwrap();
        assert!(navigator.is_sheet_open());

        let command = menu.orchestrator_mut().select(opened.handle, action).unwrap();
        let presented = nav::execute(&navigator, &command).await.unwrap();
        assert!(presented.is_some());
        assert!(!navigator.is_sheet_open());
    }

    let dismissed = navigator.seqs(|c| matches!(c, NavCall::DismissBottomSheet));
    let shown = navigator.seqs(|c| matches!(c, NavCall::ShowModal { .. }));
    assert_eq!(dismissed.len(), 4);
    assert_eq!(shown.len(), 4);
    for (dismiss, show) in dismissed.iter().zip(shown.iter()) {
        assert!(dismiss < show, "dismiss {} should precede show {}", dismiss, show);
    }

    let titles: Vec<String> = navigator
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            NavCall::ShowModal { title, .. } => Some(title),
            _ => None,
        })
        .collect();
    assert_eq!(
        titles,
        vec![
            "Create a new team",
            "Browse channels",
            "Create Direct Message",
            "Join a Team by code"
        ]
    );
}

#[tokio::test]
async fn test_trigger_and_tap_open_same_menu() {
    let navigator = RecordingNavigator::new();
    let mut menu = servers_menu(Capabilities {
        can_create: true,
        can_search: false,
        can_join_by_code: false,
    });

    let opened = menu.open_servers();
    let Some(NavCommand::ShowBottomSheet(sheet)) = &opened.command else {
        panic!("expected a bottom sheet");
    };
    let ids: Vec<&str> = sheet.items.iter().map(|i| i.action_id.as_str()).collect();
    assert_eq!(ids, vec!["create_new_team", "direct_message"]);

    nav::execute(&navigator, opened.command.as_ref().unwrap()).await.unwrap();

    // Tapping the icon while the sheet is up does not stack a second sheet
    assert!(menu.on_icon_press().command.is_none());
    assert_eq!(navigator.count(|c| matches!(c, NavCall::ShowBottomSheet { .. })), 1);
}

#[tokio::test]
async fn test_select_after_swipe_dismiss_is_ignored() {
    let mut menu = servers_menu(Capabilities::all());
    let opened = menu.on_icon_press();

    assert!(menu.orchestrator_mut().dismissed_externally(opened.handle));
    assert!(menu.orchestrator_mut().select(opened.handle, MenuAction::DirectMessage).is_none());
}

#[tokio::test]
async fn test_menu_to_create_team_scenario() {
    let scenario = Scenario {
        name: Some("menu to create team".into()),
        screen: ScreenSetup {
            mounted: false,
            ..ScreenSetup::default()
        },
        capabilities: Capabilities::all(),
        remote: Vec::new(),
        steps: vec![
            Step::OpenMenu,
            Step::Select {
                entry: MenuAction::CreateNewTeam,
            },
            Step::Type { text: "Eng".into() },
            Step::Press {
                button: "create-team".into(),
            },
            Step::Settle,
        ],
    };

    let navigator = RecordingNavigator::new().with_sheet_dismiss_delay(Duration::from_millis(10));
    let report = scenario::run(&scenario, &CoordinatorConfig::default(), &navigator)
        .await
        .unwrap();

    assert_eq!(report.presented.len(), 1);
    let presented = report.presented[0].clone();
    assert!(presented.as_str().starts_with(AvailableScreen::CreateTeam.name()));

    assert_eq!(report.phase, Some(Phase::Complete));
    assert_eq!(report.remote_calls, 1);

    let dismiss_sheet = navigator.seqs(|c| matches!(c, NavCall::DismissBottomSheet));
    let show = navigator.seqs(|c| matches!(c, NavCall::ShowModal { .. }));
    let close = navigator.seqs(|c| matches!(c, NavCall::DismissModal { screen } if *screen == presented));
    assert_eq!(close.len(), 1);
    assert!(dismiss_sheet[0] < show[0]);
    assert!(show[0] < close[0]);
}
