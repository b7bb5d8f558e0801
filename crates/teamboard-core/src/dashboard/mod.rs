//! View models for each screen.
//!
//! Every view is rebuilt from a [`Snapshot`] and the caller's current
//! selection: filter first, then aggregate, then resolve references into
//! cards. Nothing is cached between builds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::activity::{recent_activity, ActivityEntry, DEFAULT_ACTIVITY_LIMIT};
use crate::filter::{filter_projects, filter_tasks, ProjectFilter, TaskFilter};
use crate::progress::percent_of;
use crate::project::ProjectCard;
use crate::repository::Snapshot;
use crate::stats::{dashboard_stats, team_overview, team_stats, DashboardStats, TeamOverview, TeamStats};
use crate::task::{group_tasks_by_status, subtask_completion, Board, Task, TaskCard, TaskStatus};
use crate::team::{CARD_MEMBER_PREVIEW, TABLE_MEMBER_PREVIEW, TEAMS_PAGE_MEMBER_PREVIEW};

/// How many avatars and activity entries each screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewLimits {
    /// Avatars per team on the teams page.
    pub team_members: usize,
    /// Avatars on a project card.
    pub card_members: usize,
    /// Avatars in a projects table row.
    pub table_members: usize,
    /// Entries in the recent activity panel.
    pub recent_activity: usize,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            team_members: TEAMS_PAGE_MEMBER_PREVIEW,
            card_members: CARD_MEMBER_PREVIEW,
            table_members: TABLE_MEMBER_PREVIEW,
            recent_activity: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

/// One row of the team performance panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformance {
    pub team_id: String,
    pub name: String,
    pub member_count: usize,
    #[serde(flatten)]
    pub stats: TeamStats,
}

/// The landing dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Computed over the whole snapshot, independent of the filter.
    pub stats: DashboardStats,
    pub projects: Vec<ProjectCard>,
    pub team_performance: Vec<TeamPerformance>,
    /// Newest first, independent of the filter.
    pub recent_activity: Vec<ActivityEntry>,
}

impl DashboardView {
    pub fn build(snapshot: &Snapshot, filter: &ProjectFilter, limits: &ViewLimits) -> Self {
        let stats = dashboard_stats(snapshot.projects(), snapshot.tasks(), snapshot.teams());
        let projects = project_cards(snapshot, filter, limits.card_members);

        let team_performance = snapshot
            .teams()
            .iter()
            .map(|team| TeamPerformance {
                team_id: team.id.clone(),
                name: team.name.clone(),
                member_count: team.members.len(),
                stats: team_stats(team, snapshot.projects(), snapshot.tasks()),
            })
            .collect();

        let recent_activity = recent_activity(
            snapshot.activity(),
            snapshot.users(),
            snapshot.projects(),
            snapshot.tasks(),
            snapshot.teams(),
            limits.recent_activity,
        );

        debug!(
            total_projects = stats.total_projects,
            shown_projects = projects.len(),
            filtered = !filter.is_match_all(),
            activity = recent_activity.len(),
            "Dashboard view built"
        );

        Self {
            stats,
            projects,
            team_performance,
            recent_activity,
        }
    }
}

/// Projects matching `filter` with their teams resolved, each showing at
/// most `member_limit` avatars.
pub fn project_cards(snapshot: &Snapshot, filter: &ProjectFilter, member_limit: usize) -> Vec<ProjectCard> {
    filter_projects(snapshot.projects(), filter)
        .into_iter()
        .map(|project| {
            let team = snapshot.find_team(&project.team_id).cloned();
            ProjectCard::new(project, team, member_limit)
        })
        .collect()
}

/// The Kanban board of tasks.
#[derive(Debug, Clone, Serialize)]
pub struct TaskBoardView {
    pub board: Board<TaskCard>,
}

impl TaskBoardView {
    pub fn build(snapshot: &Snapshot, filter: &TaskFilter, columns: &[TaskStatus]) -> Self {
        let tasks = filter_tasks(snapshot.tasks(), filter);
        let board = group_tasks_by_status(&tasks, columns).map(|task| task_card(snapshot, task));

        debug!(
            filtered = !filter.is_match_all(),
            matched = tasks.len(),
            on_board = board.task_count(),
            columns = board.columns.len(),
            "Task board built"
        );

        Self { board }
    }
}

/// Resolve a task's project and assignee for display.
pub fn task_card(snapshot: &Snapshot, task: Task) -> TaskCard {
    let project_name = snapshot.find_project(&task.project_id).map(|p| p.name.clone());
    let assignee = task
        .assignee_id
        .as_deref()
        .and_then(|id| snapshot.find_user(id))
        .cloned();
    let subtasks = subtask_completion(&task);

    TaskCard {
        project_name,
        assignee,
        subtask_width: percent_of(subtasks.completed, subtasks.total),
        subtasks,
        task,
    }
}

/// The teams page.
#[derive(Debug, Clone, Serialize)]
pub struct TeamsView {
    pub teams: Vec<TeamOverview>,
}

impl TeamsView {
    pub fn build(snapshot: &Snapshot, limits: &ViewLimits) -> Self {
        let teams = snapshot
            .teams()
            .iter()
            .map(|team| team_overview(team, snapshot.projects(), snapshot.users(), limits.team_members))
            .collect();
        Self { teams }
    }
}
