//! Task domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TeamboardError;
use crate::priority::Priority;
use crate::progress::Tone;
use crate::user::User;

/// A Kanban task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
    pub created_at: DateTime<Utc>,
}

/// A checklist item inside a task. Ids are unique within the parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Task status (Kanban column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Board columns, left to right.
    pub const ALL: [TaskStatus; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "In Review",
            Self::Done => "Done",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Todo => Tone::NotStarted,
            Self::InProgress => Tone::InProgress,
            Self::Review => Tone::Accent,
            Self::Done => Tone::Completed,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TeamboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TeamboardError::validation(format!("unknown task status '{}'", s)))
    }
}

/// Completed vs total subtasks of one task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubtaskCompletion {
    pub completed: usize,
    pub total: usize,
}

/// A column on the Kanban board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<T> {
    pub status: TaskStatus,
    pub label: &'static str,
    pub tone: Tone,
    pub tasks: Vec<T>,
}

/// Tasks grouped by status, one column per requested status.
#[derive(Debug, Clone, Serialize)]
pub struct Board<T = Task> {
    pub columns: Vec<BoardColumn<T>>,
}

impl<T> Board<T> {
    /// Tasks in the column for `status`; empty when the column was not requested.
    pub fn column(&self, status: TaskStatus) -> &[T] {
        self.columns
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of tasks across all columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Transform every task while keeping the column layout.
    pub fn map<U, F>(self, mut f: F) -> Board<U>
    where
        F: FnMut(T) -> U,
    {
        Board {
            columns: self
                .columns
                .into_iter()
                .map(|c| BoardColumn {
                    status: c.status,
                    label: c.label,
                    tone: c.tone,
                    tasks: c.tasks.into_iter().map(&mut f).collect(),
                })
                .collect(),
        }
    }
}

/// A task ready for display, with project and assignee resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCard {
    pub task: Task,
    /// `None` when the task's project id dangles.
    pub project_name: Option<String>,
    /// `None` when unassigned or the assignee id dangles.
    pub assignee: Option<User>,
    pub subtasks: SubtaskCompletion,
    /// Subtask bar width, 0..=100.
    pub subtask_width: u32,
}
