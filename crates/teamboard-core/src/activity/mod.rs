//! Comments and activity feed.

pub mod model;

pub use model::{ActivityEntry, ActivityLog, Comment, TargetType};

use crate::project::Project;
use crate::task::Task;
use crate::team::Team;
use crate::user::User;

/// Number of entries in the dashboard's recent activity panel.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;

/// The newest `limit` activity entries, newest first, with user and target
/// resolved.
///
/// Entries sharing a timestamp keep their input order. Dangling user or
/// target ids resolve to `None` rather than dropping the entry.
pub fn recent_activity(
    activity: &[ActivityLog],
    users: &[User],
    projects: &[Project],
    tasks: &[Task],
    teams: &[Team],
    limit: usize,
) -> Vec<ActivityEntry> {
    let mut newest_first: Vec<&ActivityLog> = activity.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    newest_first
        .into_iter()
        .take(limit)
        .map(|entry| ActivityEntry {
            user: users.iter().find(|u| u.id == entry.user_id).cloned(),
            target_name: target_name(entry, projects, tasks, teams),
            activity: entry.clone(),
        })
        .collect()
}

fn target_name(entry: &ActivityLog, projects: &[Project], tasks: &[Task], teams: &[Team]) -> Option<String> {
    let id = entry.target_id.as_str();
    match entry.target_type {
        TargetType::Project => projects.iter().find(|p| p.id == id).map(|p| p.name.clone()),
        TargetType::Task => tasks.iter().find(|t| t.id == id).map(|t| t.title.clone()),
        TargetType::Team => teams.iter().find(|t| t.id == id).map(|t| t.name.clone()),
    }
}
