//! Read-only access to an in-memory snapshot of all entities.
//!
//! A [`Snapshot`] is the single source of truth handed to the aggregation,
//! filter and view functions. It is validated once when built and never
//! mutated afterwards; replacing data means building a new snapshot.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::activity::{ActivityLog, Comment};
use crate::error::{TeamboardError, TeamboardResult};
use crate::project::Project;
use crate::task::Task;
use crate::team::Team;
use crate::user::User;

const SAMPLE_SNAPSHOT: &str = include_str!("sample.json");

/// Raw collections as they appear on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    pub current_user: User,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub activity: Vec<ActivityLog>,
}

/// A validated, indexed, immutable set of entity collections.
#[derive(Debug, Clone)]
pub struct Snapshot {
    data: SnapshotData,
    users_by_id: HashMap<String, usize>,
    teams_by_id: HashMap<String, usize>,
    projects_by_id: HashMap<String, usize>,
}

impl Snapshot {
    /// Validate the collections and index them by id.
    ///
    /// Ids must be unique per collection and subtask ids unique per task.
    /// Dangling references are allowed.
    pub fn new(data: SnapshotData) -> TeamboardResult<Self> {
        let users_by_id = index_by_id("user", data.users.iter().map(|u| u.id.as_str()))?;
        let teams_by_id = index_by_id("team", data.teams.iter().map(|t| t.id.as_str()))?;
        let projects_by_id = index_by_id("project", data.projects.iter().map(|p| p.id.as_str()))?;
        index_by_id("task", data.tasks.iter().map(|t| t.id.as_str()))?;

        for task in &data.tasks {
            index_by_id("subtask", task.subtasks.iter().map(|s| s.id.as_str()))?;
        }

        for team in &data.teams {
            let lead = users_by_id.get(team.lead_id.as_str()).map(|&i| &data.users[i]);
            if let Some(lead) = lead.filter(|u| !u.role.can_lead()) {
                warn!(team = %team.id, lead = %lead.id, role = %lead.role, "Team lead has a non-leading role");
            }
        }

        let snapshot = Self {
            data,
            users_by_id,
            teams_by_id,
            projects_by_id,
        };

        debug!(
            users = snapshot.data.users.len(),
            teams = snapshot.data.teams.len(),
            projects = snapshot.data.projects.len(),
            tasks = snapshot.data.tasks.len(),
            dangling = snapshot.dangling_reference_count(),
            "Snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Parse and validate a JSON snapshot.
    ///
    /// Unknown status, priority or role values are rejected here.
    pub fn from_json(json: &str) -> TeamboardResult<Self> {
        let data: SnapshotData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// Read a JSON snapshot from disk.
    pub fn load(path: &Path) -> TeamboardResult<Self> {
        debug!(path = %path.display(), "Reading snapshot");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The bundled sample dataset.
    pub fn sample() -> TeamboardResult<Self> {
        Self::from_json(SAMPLE_SNAPSHOT)
    }

    pub fn current_user(&self) -> &User {
        &self.data.current_user
    }

    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    pub fn teams(&self) -> &[Team] {
        &self.data.teams
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn activity(&self) -> &[ActivityLog] {
        &self.data.activity
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users_by_id.get(id).map(|&i| &self.data.users[i])
    }

    pub fn find_team(&self, id: &str) -> Option<&Team> {
        self.teams_by_id.get(id).map(|&i| &self.data.teams[i])
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects_by_id.get(id).map(|&i| &self.data.projects[i])
    }

    pub fn require_team(&self, id: &str) -> TeamboardResult<&Team> {
        self.find_team(id)
            .ok_or_else(|| TeamboardError::TeamNotFound(id.to_string()))
    }

    pub fn require_project(&self, id: &str) -> TeamboardResult<&Project> {
        self.find_project(id)
            .ok_or_else(|| TeamboardError::ProjectNotFound(id.to_string()))
    }

    /// Number of foreign references that resolve to nothing.
    pub fn dangling_reference_count(&self) -> usize {
        let teams = self
            .data
            .projects
            .iter()
            .filter(|p| self.find_team(&p.team_id).is_none())
            .count();
        let projects = self
            .data
            .tasks
            .iter()
            .filter(|t| self.find_project(&t.project_id).is_none())
            .count();
        let assignees = self
            .data
            .tasks
            .iter()
            .filter_map(|t| t.assignee_id.as_deref())
            .filter(|id| self.find_user(id).is_none())
            .count();
        let leads = self
            .data
            .teams
            .iter()
            .filter(|t| self.find_user(&t.lead_id).is_none())
            .count();
        let user_teams = self
            .data
            .users
            .iter()
            .filter_map(|u| u.team_id.as_deref())
            .filter(|id| self.find_team(id).is_none())
            .count();

        teams + projects + assignees + leads + user_teams
    }
}

fn index_by_id<'a, I>(kind: &'static str, ids: I) -> TeamboardResult<HashMap<String, usize>>
where
    I: Iterator<Item = &'a str>,
{
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(TeamboardError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}
