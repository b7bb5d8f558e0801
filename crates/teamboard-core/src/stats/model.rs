//! Aggregate result types.

use serde::Serialize;

use crate::team::MemberPreview;
use crate::user::User;

/// Per-team task completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub project_count: usize,
    pub task_count: usize,
    pub completed_tasks: usize,
    /// Rounded percentage, 0 when the team has no tasks.
    pub completion_rate: u32,
}

/// Global dashboard figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub in_progress_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Rounded mean of raw project progress, 0 with no projects.
    pub overall_progress: u32,
    pub team_count: usize,
}

impl DashboardStats {
    /// Tasks not yet done.
    pub fn active_tasks(&self) -> usize {
        self.total_tasks.saturating_sub(self.completed_tasks)
    }
}

/// Summary row for the teams page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOverview {
    pub team_id: String,
    pub name: String,
    pub description: Option<String>,
    pub project_count: usize,
    pub average_progress: u32,
    /// `None` when the lead id dangles.
    pub lead: Option<User>,
    pub member_count: usize,
    pub members: MemberPreview,
}
