//! Team domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A team of users owning projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// User id of the team lead. May dangle.
    pub lead_id: String,
    /// Members in display order.
    #[serde(default)]
    pub members: Vec<User>,
    pub created_at: DateTime<Utc>,
}

/// The first few members of a team plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberPreview {
    pub shown: Vec<User>,
    /// Rendered as a "+N" chip when non-zero.
    pub overflow: usize,
}
