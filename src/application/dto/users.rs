use crate::domain::user::{User, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub reputation: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            reputation: user.reputation.into(),
            created_at: user.created_at,
        }
    }
}

/// Owner block embedded in questions, answers and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i64,
    pub username: String,
    pub reputation: i64,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.into(),
            username: summary.username,
            reputation: summary.reputation.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListDto {
    pub users_count: u64,
    pub users: Vec<UserDto>,
}
