// src/domain/comment/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{CommentId, UserId};
use crate::domain::post::PostRef;
use crate::domain::user::UserSummary;
use chrono::{DateTime, Utc};

const MAX_COMMENT_LEN: usize = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        if value.chars().count() > MAX_COMMENT_LEN {
            return Err(DomainError::Validation(format!(
                "comment cannot exceed {MAX_COMMENT_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post: PostRef,
    pub owner: UserSummary,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post: PostRef,
    pub owner_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}
