use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PostRefDto, UserSummaryDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post: PostRefDto,
    pub owner: UserSummaryDto,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post: comment.post.into(),
            owner: comment.owner.into(),
            content: comment.body.into_inner(),
            created_at: comment.created_at,
        }
    }
}
