//! Project domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TeamboardError;
use crate::priority::Priority;
use crate::progress::{clamp_progress, Tone};
use crate::team::{member_preview, MemberPreview, Team};

/// A project owned by a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Owning team. May dangle.
    pub team_id: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percentage complete. Stored as given, may exceed 100.
    pub progress: u32,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Progress clamped to 0..=100, for bar widths and labels.
    pub fn progress_width(&self) -> u32 {
        clamp_progress(self.progress)
    }

    /// Progress bar tone derived from the stored progress.
    pub fn progress_tone(&self) -> Tone {
        Tone::for_progress(self.progress)
    }
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Variants in display order.
    pub const ALL: [ProjectStatus; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::NotStarted => Tone::NotStarted,
            Self::InProgress => Tone::InProgress,
            Self::Completed => Tone::Completed,
            Self::OnHold => Tone::OnHold,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = TeamboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TeamboardError::validation(format!("unknown project status '{}'", s)))
    }
}

/// A project ready for display, with its owning team resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub project: Project,
    /// `None` when the project's team id dangles.
    pub team: Option<Team>,
    /// Clamped progress, 0..=100.
    pub width: u32,
    pub tone: Tone,
    /// Team member avatars; empty when the team dangles.
    pub members: MemberPreview,
}

impl ProjectCard {
    /// Build a card showing at most `member_limit` team avatars.
    pub fn new(project: Project, team: Option<Team>, member_limit: usize) -> Self {
        let width = project.progress_width();
        let tone = project.progress_tone();
        let team_members = team.as_ref().map_or(&[][..], |t| t.members.as_slice());
        let members = member_preview(team_members, member_limit);
        Self {
            project,
            team,
            width,
            tone,
            members,
        }
    }
}
