//! The shipped scenario files parse and replay cleanly

use nav_coordinator::config::CoordinatorConfig;
use nav_coordinator::nav::{NavCall, RecordingNavigator};
use nav_coordinator::scenario::{self, Scenario};
use nav_coordinator::submission::Phase;
use serde_json::json;

async fn replay(content: &str) -> (scenario::Report, RecordingNavigator) {
    let scenario = Scenario::from_toml(content).unwrap();
    let navigator = RecordingNavigator::new();
    let report = scenario::run(&scenario, &CoordinatorConfig::default(), &navigator)
        .await
        .unwrap();
    (report, navigator)
}

#[tokio::test]
async fn test_create_team_scenario() {
    let (report, navigator) = replay(include_str!("../../scenarios/create_team.toml")).await;

    assert_eq!(report.remote_calls, 2);
    assert_eq!(report.phase, Some(Phase::Complete));
    assert_eq!(navigator.count(NavCall::is_close), 1);
}

#[tokio::test]
async fn test_servers_menu_scenario() {
    let (report, navigator) = replay(include_str!("../../scenarios/servers_menu.toml")).await;

    // Back closes the presented screen without creating anything
    assert_eq!(report.presented.len(), 1);
    assert_eq!(report.remote_calls, 0);
    assert_eq!(navigator.count(|c| matches!(c, NavCall::DismissModal { .. })), 1);
    assert_eq!(navigator.count(|c| matches!(c, NavCall::ShowBottomSheet { .. })), 2);
    assert_eq!(navigator.count(|c| matches!(c, NavCall::DismissBottomSheet)), 2);
}

#[tokio::test]
async fn test_mentions_viewport_scenario() {
    let (report, _) = replay(include_str!("../../scenarios/mentions_viewport.toml")).await;

    assert_eq!(report.published.len(), 2);
    assert_eq!(
        report.published[0].1,
        json!({"Mentions-p1": true, "Mentions-p2": true})
    );
    assert_eq!(
        report.published[1].1,
        json!({"Mentions-p2": true, "Mentions-p3": true})
    );
    assert_eq!(report.committed_scroll, Some(260.0));
}
