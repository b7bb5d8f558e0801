//! End-to-end checks against the bundled sample snapshot.

use teamboard_core::dashboard::{project_cards, DashboardView, TaskBoardView, TeamsView, ViewLimits};
use teamboard_core::filter::{filter_projects, ProjectFilter, TaskFilter, ALL_FILTER};
use teamboard_core::task::{TaskStatus, DEFAULT_COLUMNS};
use teamboard_core::Snapshot;

fn sample() -> Snapshot {
    Snapshot::sample().expect("sample snapshot should parse")
}

#[test]
fn sample_dashboard_figures() {
    let snapshot = sample();
    let view = DashboardView::build(&snapshot, &ProjectFilter::default(), &ViewLimits::default());

    assert_eq!(view.stats.total_projects, 6);
    assert_eq!(view.stats.completed_projects, 1);
    assert_eq!(view.stats.in_progress_projects, 3);
    assert_eq!(view.stats.total_tasks, 11);
    assert_eq!(view.stats.completed_tasks, 4);
    assert_eq!(view.stats.active_tasks(), 7);
    // (65 + 40 + 100 + 25 + 0 + 80) / 6 = 51.67
    assert_eq!(view.stats.overall_progress, 52);
    assert_eq!(view.stats.team_count, 3);

    let engineering = &view.team_performance[0];
    assert_eq!(engineering.name, "Engineering");
    assert_eq!(engineering.stats.project_count, 3);
    assert_eq!(engineering.stats.task_count, 7);
    assert_eq!(engineering.stats.completed_tasks, 4);
    assert_eq!(engineering.stats.completion_rate, 57);
}

#[test]
fn sample_project_search() {
    let snapshot = sample();
    let filter = ProjectFilter {
        search_text: Some("redesign".to_string()),
        status: Some(ALL_FILTER.to_string()),
        team_id: None,
    };
    let view = DashboardView::build(&snapshot, &filter, &ViewLimits::default());

    assert_eq!(view.projects.len(), 1);
    assert_eq!(view.projects[0].project.name, "Website Redesign");
    assert_eq!(view.projects[0].team.as_ref().map(|t| t.name.as_str()), Some("Design"));
}

#[test]
fn sample_filter_identity_and_idempotence() {
    let snapshot = sample();

    let all = filter_projects(snapshot.projects(), &ProjectFilter::default());
    assert_eq!(all.as_slice(), snapshot.projects());

    let filter = ProjectFilter {
        team_id: Some("t1".to_string()),
        status: Some("in_progress".to_string()),
        ..Default::default()
    };
    let once = filter_projects(snapshot.projects(), &filter);
    let twice = filter_projects(&once, &filter);
    assert_eq!(once, twice);
    let ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p6"]);
}

#[test]
fn sample_task_board() {
    let snapshot = sample();
    let view = TaskBoardView::build(&snapshot, &TaskFilter::default(), DEFAULT_COLUMNS);

    assert_eq!(view.board.task_count(), snapshot.tasks().len());
    let done: Vec<&str> = view
        .board
        .column(TaskStatus::Done)
        .iter()
        .map(|c| c.task.id.as_str())
        .collect();
    assert_eq!(done, vec!["k3", "k6", "k7", "k11"]);

    let review = view.board.column(TaskStatus::Review);
    assert_eq!(review[0].task.title, "Design homepage mockups");
    assert_eq!(review[0].subtask_width, 67);
}

#[test]
fn sample_high_priority_tasks() {
    let snapshot = sample();
    let filter = TaskFilter {
        priority: Some("high".to_string()),
        project_id: Some(ALL_FILTER.to_string()),
        search_text: None,
    };
    let view = TaskBoardView::build(&snapshot, &filter, DEFAULT_COLUMNS);
    assert_eq!(view.board.task_count(), 4);
}

#[test]
fn sample_teams_view() {
    let snapshot = sample();
    let view = TeamsView::build(&snapshot, &ViewLimits::default());

    let summary: Vec<(&str, usize, u32)> = view
        .teams
        .iter()
        .map(|t| (t.name.as_str(), t.project_count, t.average_progress))
        .collect();
    assert_eq!(
        summary,
        vec![("Engineering", 3, 73), ("Design", 2, 45), ("Marketing", 1, 0)]
    );
    assert!(view.teams.iter().all(|t| t.lead.is_some()));

    let engineering = &view.teams[0].members;
    assert_eq!(engineering.shown.len(), 4);
    assert_eq!(engineering.overflow, 0);
}

#[test]
fn sample_recent_activity() {
    let snapshot = sample();
    let view = DashboardView::build(&snapshot, &ProjectFilter::default(), &ViewLimits::default());

    let feed: Vec<(&str, &str, Option<&str>)> = view
        .recent_activity
        .iter()
        .map(|e| {
            (
                e.user.as_ref().map(|u| u.name.as_str()).unwrap_or("?"),
                e.activity.action.as_str(),
                e.target_name.as_deref(),
            )
        })
        .collect();
    assert_eq!(
        feed,
        vec![
            ("Casey Morgan", "commented on", Some("Design homepage mockups")),
            ("Emily Davis", "updated project", Some("Website Redesign")),
            ("Taylor Swift", "uploaded file to", Some("Brand Guidelines")),
            ("Jordan Lee", "created task", Some("Push notifications")),
            ("Alex Rivera", "completed task", Some("API client setup")),
        ]
    );

    let limits = ViewLimits {
        recent_activity: 2,
        ..Default::default()
    };
    let view = DashboardView::build(&snapshot, &ProjectFilter::default(), &limits);
    assert_eq!(view.recent_activity.len(), 2);
}

#[test]
fn sample_member_previews_per_screen() {
    let snapshot = sample();
    let limits = ViewLimits::default();
    let filter = ProjectFilter {
        team_id: Some("t1".to_string()),
        ..Default::default()
    };

    // Engineering has four members.
    let cards = project_cards(&snapshot, &filter, limits.card_members);
    assert_eq!(cards[0].members.shown.len(), 3);
    assert_eq!(cards[0].members.overflow, 1);

    let rows = project_cards(&snapshot, &filter, limits.table_members);
    assert_eq!(rows[0].members.shown.len(), 2);
    assert_eq!(rows[0].members.overflow, 2);
}

#[test]
fn dashboard_view_serializes() {
    let snapshot = sample();
    let view = DashboardView::build(&snapshot, &ProjectFilter::default(), &ViewLimits::default());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["stats"]["overallProgress"], 52);
    assert_eq!(json["teamPerformance"][0]["completionRate"], 57);
    assert_eq!(json["projects"][0]["project"]["teamId"], "t2");
    assert_eq!(json["recentActivity"][0]["targetType"], "task");
    assert_eq!(json["recentActivity"][0]["targetName"], "Design homepage mockups");
    assert_eq!(json["recentActivity"][0]["user"]["id"], "u5");
}
