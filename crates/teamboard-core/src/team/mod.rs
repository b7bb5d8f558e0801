//! Teams.

pub mod model;

pub use model::{MemberPreview, Team};

use crate::user::User;

/// Avatars shown per team on the teams page.
pub const TEAMS_PAGE_MEMBER_PREVIEW: usize = 5;

/// Avatars shown on a project card.
pub const CARD_MEMBER_PREVIEW: usize = 3;

/// Avatars shown in a row of the projects table.
pub const TABLE_MEMBER_PREVIEW: usize = 2;

/// Split `members` into the first `limit` entries and an overflow count.
pub fn member_preview(members: &[User], limit: usize) -> MemberPreview {
    let shown: Vec<User> = members.iter().take(limit).cloned().collect();
    let overflow = members.len() - shown.len();
    MemberPreview { shown, overflow }
}
