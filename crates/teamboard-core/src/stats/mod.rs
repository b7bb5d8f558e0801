//! Aggregation engine.
//!
//! Pure functions turning entity collections into dashboard figures. Every
//! function takes its collections explicitly and never fails: dangling
//! references contribute nothing and empty denominators yield 0.
//!
//! Averages use the raw stored `progress`, so a project at 150 pulls the mean
//! above what its clamped bar shows.

pub mod model;

pub use model::{DashboardStats, TeamOverview, TeamStats};

use std::collections::HashSet;

use crate::progress::{percent_of, rounded_mean};
use crate::project::{Project, ProjectStatus};
use crate::task::{Task, TaskStatus};
use crate::team::{member_preview, Team};
use crate::user::User;

/// Projects owned by `team`, in input order.
pub fn team_projects<'a>(team: &'a Team, projects: &'a [Project]) -> impl Iterator<Item = &'a Project> + 'a {
    projects.iter().filter(move |p| p.team_id == team.id)
}

/// Project, task and completion counts for one team.
pub fn team_stats(team: &Team, projects: &[Project], tasks: &[Task]) -> TeamStats {
    let project_ids: HashSet<&str> = team_projects(team, projects).map(|p| p.id.as_str()).collect();

    let team_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|t| project_ids.contains(t.project_id.as_str()))
        .collect();
    let completed_tasks = team_tasks.iter().filter(|t| t.status == TaskStatus::Done).count();

    TeamStats {
        project_count: team_projects(team, projects).count(),
        task_count: team_tasks.len(),
        completed_tasks,
        completion_rate: percent_of(completed_tasks, team_tasks.len()),
    }
}

/// Rounded mean progress of the team's projects, 0 when it owns none.
pub fn team_average_progress(team: &Team, projects: &[Project]) -> u32 {
    rounded_mean(team_projects(team, projects).map(|p| p.progress))
}

/// Global counts and overall progress.
pub fn dashboard_stats(projects: &[Project], tasks: &[Task], teams: &[Team]) -> DashboardStats {
    DashboardStats {
        total_projects: projects.len(),
        completed_projects: count_projects(projects, ProjectStatus::Completed),
        in_progress_projects: count_projects(projects, ProjectStatus::InProgress),
        total_tasks: tasks.len(),
        completed_tasks: tasks.iter().filter(|t| t.status == TaskStatus::Done).count(),
        overall_progress: rounded_mean(projects.iter().map(|p| p.progress)),
        team_count: teams.len(),
    }
}

/// Teams-page summary: project count, average progress, resolved lead and
/// the first `member_limit` members.
pub fn team_overview(team: &Team, projects: &[Project], users: &[User], member_limit: usize) -> TeamOverview {
    TeamOverview {
        team_id: team.id.clone(),
        name: team.name.clone(),
        description: team.description.clone(),
        project_count: team_projects(team, projects).count(),
        average_progress: team_average_progress(team, projects),
        lead: users.iter().find(|u| u.id == team.lead_id).cloned(),
        member_count: team.members.len(),
        members: member_preview(&team.members, member_limit),
    }
}

fn count_projects(projects: &[Project], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}
