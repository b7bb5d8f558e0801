//! User domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TeamboardError;

/// A person who can lead teams and be assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar initials, e.g. "AR".
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: UserRole,
    /// Back-reference to the user's team. Not ownership; may dangle.
    #[serde(default)]
    pub team_id: Option<String>,
}

impl User {
    /// Initials to render when no avatar is set.
    pub fn initials(&self) -> String {
        if let Some(avatar) = &self.avatar {
            return avatar.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Organisational role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    TeamLead,
    Member,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::TeamLead, Self::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::TeamLead => "team_lead",
            Self::Member => "member",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::TeamLead => "Team Lead",
            Self::Member => "Member",
        }
    }

    /// Whether a user with this role may lead a team.
    pub fn can_lead(&self) -> bool {
        matches!(self, Self::Admin | Self::TeamLead)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = TeamboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| TeamboardError::validation(format!("unknown user role '{}'", s)))
    }
}
