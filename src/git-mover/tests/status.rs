mod common;

use common::{InMemoryTracker, SOURCE};
use git_mover::{
    collect_status, render_summary_table, ItemState, StateFilter, StatusConfig, StatusError,
};
use pretty_assertions::assert_eq;

fn status_config() -> StatusConfig {
    StatusConfig::new("token", SOURCE, "https://api.github.com").unwrap()
}

#[tokio::test]
async fn report_is_capped_at_five_milestones() {
    let tracker = InMemoryTracker::with_repo(SOURCE, 1);
    for n in 1..=7 {
        tracker.add_milestone(SOURCE, &format!("Sprint {n}"), ItemState::Open);
    }

    let statuses = collect_status(&tracker, &status_config().with_limit(10))
        .await
        .unwrap();

    let titles: Vec<&str> = statuses
        .iter()
        .map(|s| s.milestone.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Sprint 1", "Sprint 2", "Sprint 3", "Sprint 4", "Sprint 5"]
    );
}

#[tokio::test]
async fn counts_open_and_closed_issues_per_milestone() {
    let tracker = InMemoryTracker::with_repo(SOURCE, 1);
    tracker.add_milestone(SOURCE, "Lifecycle", ItemState::Open);
    tracker.add_milestone(SOURCE, "Narratives", ItemState::Open);
    tracker.add_issue(SOURCE, "Dream", ItemState::Closed, Some("Lifecycle"), &[], &[]);
    tracker.add_issue(SOURCE, "Discovery", ItemState::Closed, Some("Lifecycle"), &[], &[]);
    tracker.add_issue(SOURCE, "Deployment", ItemState::Open, Some("Lifecycle"), &[], &[]);
    tracker.add_issue(SOURCE, "ReadMe", ItemState::Open, Some("Narratives"), &[], &[]);
    tracker.add_issue(SOURCE, "Unplanned", ItemState::Open, None, &[], &[]);

    let statuses = collect_status(&tracker, &status_config()).await.unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].closed_count(), 2);
    assert_eq!(statuses[0].open_count(), 1);
    assert_eq!(statuses[1].open_count(), 1);
    assert_eq!(statuses[1].closed_count(), 0);

    let expected = "\
| Milestone | State | Open | Closed | Progress | Due |
|-|-|-|-|-|-|
| Lifecycle | open | 1 | 2 | 66% | - |
| Narratives | open | 1 | 0 | 0% | - |
";
    assert_eq!(render_summary_table(&statuses), expected);
}

#[tokio::test]
async fn state_filter_selects_milestones() {
    let tracker = InMemoryTracker::with_repo(SOURCE, 1);
    tracker.add_milestone(SOURCE, "Done", ItemState::Closed);
    tracker.add_milestone(SOURCE, "Doing", ItemState::Open);

    let closed = collect_status(&tracker, &status_config().with_state(StateFilter::Closed))
        .await
        .unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].milestone.title, "Done");

    let all = collect_status(&tracker, &status_config().with_state(StateFilter::All))
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn reporting_does_not_write() {
    let tracker = InMemoryTracker::with_repo(SOURCE, 1);
    tracker.add_milestone(SOURCE, "v1", ItemState::Open);
    tracker.add_issue(SOURCE, "Crash", ItemState::Open, Some("v1"), &[], &[]);

    collect_status(&tracker, &status_config()).await.unwrap();

    assert_eq!(tracker.writes(), 0);
}

#[tokio::test]
async fn failed_issue_listing_is_reported() {
    let tracker = InMemoryTracker::with_repo(SOURCE, 1);
    tracker.add_milestone(SOURCE, "v1", ItemState::Open);
    tracker.fail_listing("issues");

    let result = collect_status(&tracker, &status_config()).await;

    assert!(matches!(result, Err(StatusError::Fetch { .. })));
}

#[tokio::test]
async fn unknown_repository_is_reported() {
    let tracker = InMemoryTracker::new(1);

    let result = collect_status(&tracker, &status_config()).await;

    assert!(matches!(result, Err(StatusError::Lookup { .. })));
}
