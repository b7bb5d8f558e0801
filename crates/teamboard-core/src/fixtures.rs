//! Builders for unit-test entities.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::priority::Priority;
use crate::project::{Project, ProjectStatus};
use crate::task::{Task, TaskStatus};
use crate::team::Team;
use crate::user::{User, UserRole};

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@example.com", id),
        avatar: None,
        role: UserRole::Member,
        team_id: None,
    }
}

pub fn team(id: &str, lead_id: &str) -> Team {
    Team {
        id: id.to_string(),
        name: format!("Team {}", id),
        description: None,
        lead_id: lead_id.to_string(),
        members: Vec::new(),
        created_at: created_at(),
    }
}

pub fn project(id: &str, team_id: &str, status: ProjectStatus, progress: u32) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        description: String::new(),
        team_id: team_id.to_string(),
        status,
        priority: Priority::Medium,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 6, 30),
        progress,
        created_at: created_at(),
    }
}

pub fn task(id: &str, project_id: &str, status: TaskStatus, priority: Priority) -> Task {
    Task {
        id: id.to_string(),
        project_id: project_id.to_string(),
        title: format!("Task {}", id),
        description: None,
        assignee_id: None,
        status,
        priority,
        due_date: date(2024, 3, 1),
        subtasks: Vec::new(),
        created_at: created_at(),
    }
}
